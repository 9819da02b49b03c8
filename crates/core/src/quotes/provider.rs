//! Price source trait and the static price table.

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

use super::errors::QuoteError;

/// Canonical form of a ticker symbol: trimmed and upper-cased.
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

/// Trait for price sources.
///
/// A provider either knows the current price of a symbol or reports it as
/// unknown by returning `None`. What "unknown" means for a trade is decided
/// by the `QuoteService` policy, not by the provider.
pub trait QuoteProviderTrait: Send + Sync {
    /// Unique identifier for this provider, used in logs.
    fn id(&self) -> &'static str;

    /// Latest price for a normalized symbol, or `None` if the symbol is not
    /// covered.
    fn latest_price(&self, symbol: &str) -> Option<Decimal>;

    /// Symbols this provider can price, in ascending order.
    fn symbols(&self) -> Vec<String>;
}

/// Fixed price table. Prices never change for the life of the provider.
#[derive(Debug, Clone)]
pub struct StaticQuoteProvider {
    prices: BTreeMap<String, Decimal>,
}

impl StaticQuoteProvider {
    pub const ID: &'static str = "STATIC";

    /// Builds a table from symbol/price pairs. Symbols are normalized and
    /// prices must not be negative.
    pub fn new<I, S>(prices: I) -> Result<Self, QuoteError>
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: AsRef<str>,
    {
        let mut table = BTreeMap::new();
        for (symbol, price) in prices {
            let symbol = normalize_symbol(symbol.as_ref());
            if symbol.is_empty() {
                return Err(QuoteError::InvalidPrice {
                    symbol,
                    reason: "symbol is empty".to_string(),
                });
            }
            if price < Decimal::ZERO {
                return Err(QuoteError::InvalidPrice {
                    symbol,
                    reason: format!("price {} is negative", price),
                });
            }
            table.insert(symbol, price);
        }
        debug!("Static price table loaded with {} symbols", table.len());
        Ok(Self { prices: table })
    }

    /// Parses `SYMBOL=PRICE` pairs separated by commas, e.g.
    /// `AAPL=170.00,TSLA=800`.
    pub fn parse(spec: &str) -> Result<Self, QuoteError> {
        let mut pairs = Vec::new();
        for entry in spec.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (symbol, price) = entry.split_once('=').ok_or_else(|| QuoteError::InvalidPrice {
                symbol: entry.to_string(),
                reason: "expected SYMBOL=PRICE".to_string(),
            })?;
            let price: Decimal = price.trim().parse().map_err(|e: rust_decimal::Error| {
                QuoteError::InvalidPrice {
                    symbol: symbol.trim().to_string(),
                    reason: e.to_string(),
                }
            })?;
            pairs.push((symbol.to_string(), price));
        }
        Self::new(pairs)
    }
}

impl Default for StaticQuoteProvider {
    fn default() -> Self {
        let prices = [
            ("AAPL".to_string(), dec!(170.00)),
            ("TSLA".to_string(), dec!(800.00)),
            ("GOOGL".to_string(), dec!(2600.00)),
        ];
        Self {
            prices: prices.into_iter().collect(),
        }
    }
}

impl QuoteProviderTrait for StaticQuoteProvider {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn latest_price(&self, symbol: &str) -> Option<Decimal> {
        self.prices.get(symbol).copied()
    }

    fn symbols(&self) -> Vec<String> {
        self.prices.keys().cloned().collect()
    }
}
