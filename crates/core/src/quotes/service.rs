//! Quote service: applies the unknown-symbol policy on top of a provider.

use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::errors::QuoteError;
use super::provider::{normalize_symbol, QuoteProviderTrait};

/// What a lookup does when the provider has no price for a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnknownSymbolPolicy {
    /// Unknown symbols are priced at zero. Buying one succeeds at no cost
    /// and still records a holding.
    #[default]
    PriceAtZero,
    /// Unknown symbols fail the lookup, so trades in them are rejected.
    Reject,
}

impl UnknownSymbolPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnknownSymbolPolicy::PriceAtZero => "zero",
            UnknownSymbolPolicy::Reject => "reject",
        }
    }
}

impl fmt::Display for UnknownSymbolPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnknownSymbolPolicy {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" | "price_at_zero" => Ok(UnknownSymbolPolicy::PriceAtZero),
            "reject" => Ok(UnknownSymbolPolicy::Reject),
            other => Err(QuoteError::UnknownPolicy(other.to_string())),
        }
    }
}

/// Trait for price resolution as seen by the ledger.
pub trait QuoteServiceTrait: Send + Sync {
    /// Resolves the execution price for a symbol under the configured policy.
    fn get_price(&self, symbol: &str) -> Result<Decimal, QuoteError>;

    /// Returns true if the underlying provider has a price for the symbol.
    fn is_known(&self, symbol: &str) -> bool;

    /// The policy applied to unknown symbols.
    fn policy(&self) -> UnknownSymbolPolicy;

    /// Identifier of the underlying provider.
    fn provider_id(&self) -> &'static str;
}

pub struct QuoteService {
    provider: Arc<dyn QuoteProviderTrait>,
    policy: UnknownSymbolPolicy,
}

impl QuoteService {
    pub fn new(provider: Arc<dyn QuoteProviderTrait>, policy: UnknownSymbolPolicy) -> Self {
        Self { provider, policy }
    }
}

impl QuoteServiceTrait for QuoteService {
    fn get_price(&self, symbol: &str) -> Result<Decimal, QuoteError> {
        let symbol = normalize_symbol(symbol);
        match self.provider.latest_price(&symbol) {
            Some(price) => {
                debug!("{} priced {} at {}", self.provider.id(), symbol, price);
                Ok(price)
            }
            None => match self.policy {
                UnknownSymbolPolicy::PriceAtZero => {
                    warn!(
                        "{} has no price for {}; pricing at zero",
                        self.provider.id(),
                        symbol
                    );
                    Ok(Decimal::ZERO)
                }
                UnknownSymbolPolicy::Reject => Err(QuoteError::UnknownSymbol(symbol)),
            },
        }
    }

    fn is_known(&self, symbol: &str) -> bool {
        self.provider
            .latest_price(&normalize_symbol(symbol))
            .is_some()
    }

    fn policy(&self) -> UnknownSymbolPolicy {
        self.policy
    }

    fn provider_id(&self) -> &'static str {
        self.provider.id()
    }
}
