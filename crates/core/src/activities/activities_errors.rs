use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons the ledger refuses an activity.
///
/// Every variant is raised before any state is touched, so a rejected
/// activity leaves balance, holdings, and history exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Amount must be greater than zero, got {0}")]
    InvalidAmount(Decimal),
    #[error("Quantity must be greater than zero, got {0}")]
    InvalidQuantity(i64),
    #[error("Symbol must not be empty")]
    InvalidSymbol,
    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds {
        required: Decimal,
        available: Decimal,
    },
    #[error("Insufficient shares of {symbol}: requested {requested}, held {held}")]
    InsufficientShares {
        symbol: String,
        requested: i64,
        held: i64,
    },
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),
    #[error("Arithmetic overflow while computing {0}")]
    Overflow(&'static str),
}

impl From<ActivityError> for String {
    fn from(error: ActivityError) -> Self {
        error.to_string()
    }
}
