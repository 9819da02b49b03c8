//! Portfolio valuation domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Market value of one holding at the current price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingValuation {
    pub symbol: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub market_value: Decimal,
}

/// Point-in-time view of an account, computed from a single read of the
/// ledger so every figure agrees with the others.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub account_id: String,
    pub balance: Decimal,
    pub initial_deposit: Decimal,
    pub portfolio_value: Decimal,
    pub profit_loss: Decimal,
    pub holdings: Vec<HoldingValuation>,
    pub transaction_count: usize,
}
