use clap::Parser;

mod cli;
mod example;
mod interactive;
mod markets;
mod quote;
mod schema;
mod strategies;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Schema => schema::run(),
        cli::Command::Example => example::run(),
        cli::Command::Markets { data } => markets::run(data.as_deref()),
        cli::Command::Strategies { data } => strategies::run(data.as_deref()),
        cli::Command::Quote {
            market,
            strategy,
            deposit,
            borrow,
            data,
            json,
        } => quote::run(&quote::QuoteArgs {
            market,
            strategy,
            deposit,
            borrow,
            data,
            json,
        }),
        cli::Command::Interactive { data } => interactive::run(data.as_deref()),
    }
}
