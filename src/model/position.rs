use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Raw user input for a position: deposit and borrow amounts as decimal
/// strings, exactly as typed. Parsing happens at calculation time; an
/// empty, non-numeric, zero, or negative entry means "not yet computable"
/// rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PositionInput {
    pub deposit: String,
    pub borrow: String,
}

impl PositionInput {
    pub fn new(deposit: impl Into<String>, borrow: impl Into<String>) -> Self {
        Self {
            deposit: deposit.into(),
            borrow: borrow.into(),
        }
    }
}
