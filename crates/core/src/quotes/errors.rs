//! Quote-related error types.

use thiserror::Error;

/// Errors that can occur while resolving a price.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    #[error("No price available for symbol: {0}")]
    UnknownSymbol(String),

    #[error("Invalid price for {symbol}: {reason}")]
    InvalidPrice { symbol: String, reason: String },

    #[error("Unknown policy: {0}")]
    UnknownPolicy(String),
}
