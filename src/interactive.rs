use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use yield_scope::fetch_data;
use yield_scope::render;
use yield_scope::session::{MarketData, Session};

const HELP: &str = "\
Commands:
  markets              list lending markets
  strategies           list yield strategies
  market <symbol>      select a market
  strategy <id|name>   select a strategy
  deposit <amount>     set the deposit amount
  borrow <amount>      set the borrow amount
  clear                clear both selections and amounts
  help                 show this help
  quit                 exit";

/// Interactive calculator loop, the CLI stand-in for the original's two
/// selects and two text inputs. Every input event re-derives the snapshot;
/// incomplete input just withholds the derived sections.
pub fn run(data: Option<&Path>) -> Result<()> {
    // A failed load is logged and leaves the calculator inert with empty
    // lists, matching the widget's behavior; it is not fatal here.
    let data = match fetch_data::load_or_read(data) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("WARN  market data load failed: {e:#}");
            eprintln!("WARN  continuing with no data; the calculator will stay inert");
            MarketData::default()
        }
    };

    println!(
        "yield-scope interactive: {} markets, {} strategies loaded",
        data.markets.len(),
        data.strategies.len()
    );
    println!("{HELP}\n");

    let mut session = Session::new(data);
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match cmd {
            "quit" | "exit" | "q" => break,
            "help" => {
                println!("{HELP}");
                continue;
            }
            "markets" => {
                print!("{}", render::markets_table(&session.data().markets));
                continue;
            }
            "strategies" => {
                print!("{}", render::strategies_table(&session.data().strategies));
                continue;
            }
            "market" => {
                if let Err(e) = session.select_market(rest) {
                    println!("  {e}");
                    continue;
                }
            }
            "strategy" => {
                if let Err(e) = session.select_strategy(rest) {
                    println!("  {e}");
                    continue;
                }
            }
            // Amounts are taken as typed; bad input is a normal "not yet
            // computable" state, not an error.
            "deposit" => session.set_deposit(rest),
            "borrow" => session.set_borrow(rest),
            "clear" => {
                session.clear_market();
                session.clear_strategy();
                session.set_deposit("");
                session.set_borrow("");
            }
            other => {
                println!("  unknown command `{other}` (try `help`)");
                continue;
            }
        }

        print!("{}", render::snapshot_panel(&session.snapshot()));
    }

    Ok(())
}
