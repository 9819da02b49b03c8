//! Core error types for the Tradebook ledger.
//!
//! Ledger rejections (`ActivityError`) and pricing failures (`QuoteError`)
//! are ordinary values; this root type lets callers propagate any of them
//! with `?`.

use std::num::ParseIntError;
use thiserror::Error;

use crate::activities::ActivityError;
use crate::quotes::QuoteError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the ledger.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Activity rejected: {0}")]
    Activity(#[from] ActivityError),

    #[error("Quote lookup failed: {0}")]
    Quote(#[from] QuoteError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Ledger lock poisoned: {0}")]
    Lock(String),
}

impl Error {
    /// Returns true when the error is a business rejection that left the
    /// ledger untouched, as opposed to a fault in the service itself.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Error::Activity(_) | Error::Quote(_) | Error::Validation(_)
        )
    }
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse integer: {0}")]
    IntegerParse(#[from] ParseIntError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ParseIntError> for Error {
    fn from(err: ParseIntError) -> Self {
        Error::Validation(ValidationError::IntegerParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
