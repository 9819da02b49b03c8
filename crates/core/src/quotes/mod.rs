//! Quote module.
//!
//! Prices reach the ledger through two layers:
//!
//! - [`provider`] - `QuoteProviderTrait`, the capability "price a symbol or
//!   report it unknown", and `StaticQuoteProvider`, a fixed price table
//! - [`service`] - `QuoteService`, which applies the `UnknownSymbolPolicy`
//!   to a provider's answer
//! - [`errors`] - quote error types
//!
//! ```text
//! AccountService → QuoteService (policy) → QuoteProvider (price table)
//! ```

pub mod errors;
pub mod provider;
pub mod service;


pub use errors::QuoteError;
pub use provider::{normalize_symbol, QuoteProviderTrait, StaticQuoteProvider};
pub use service::{QuoteService, QuoteServiceTrait, UnknownSymbolPolicy};
