use thiserror::Error;

/// User-input errors surfaced by the one-shot CLI surface.
///
/// The calculator itself never errors on bad input: incomplete or
/// non-positive amounts are a normal "not yet computable" state that just
/// withholds output. These variants exist for the places where silence
/// would be confusing: naming a market that does not exist, or passing a
/// dead amount to a command whose whole job is to print a result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown market `{symbol}`. Run `yield-scope markets` to list available markets")]
    UnknownMarket { symbol: String },

    #[error("Unknown strategy `{id}`. Run `yield-scope strategies` to list available strategies")]
    UnknownStrategy { id: String },

    #[error("{field} amount `{raw}` is not a positive number")]
    NotPositive { field: &'static str, raw: String },
}

/// Gate an amount string for a one-shot command, where "withhold the
/// panel" is not an acceptable answer.
pub fn require_positive(field: &'static str, raw: &str) -> Result<(), InputError> {
    match crate::calc::parse_amount(raw) {
        Some(_) => Ok(()),
        None => Err(InputError::NotPositive {
            field,
            raw: raw.to_string(),
        }),
    }
}
