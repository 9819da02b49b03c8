//! Tradebook Core - ledger entities, services, and traits.
//!
//! This crate contains the bookkeeping for a single trading account:
//! cash movements, share trades priced through an injectable quote
//! provider, and the derived portfolio queries. It performs no I/O.

pub mod accounts;
pub mod activities;
pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod quotes;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
