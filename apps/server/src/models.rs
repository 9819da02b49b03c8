use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tradebook_core::activities::Activity;
use tradebook_core::portfolio::PortfolioSummary;

/// Account overview returned by `GET /api/v1/account`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub id: String,
    pub balance: Decimal,
    pub portfolio_value: Decimal,
    pub profit_loss: Decimal,
    pub initial_deposit: Decimal,
    pub holdings: BTreeMap<String, i64>,
}

impl From<PortfolioSummary> for AccountSummary {
    fn from(s: PortfolioSummary) -> Self {
        Self {
            id: s.account_id,
            balance: s.balance,
            portfolio_value: s.portfolio_value,
            profit_loss: s.profit_loss,
            initial_deposit: s.initial_deposit,
            holdings: s
                .holdings
                .into_iter()
                .map(|h| (h.symbol, h.quantity))
                .collect(),
        }
    }
}

/// A user-entered value that may arrive as a JSON string or number.
///
/// Parsing is deferred so malformed input produces the same status line as a
/// rejected one instead of an extractor error.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum RawInput {
    Text(String),
    Number(serde_json::Number),
}

impl RawInput {
    pub fn as_text(&self) -> String {
        match self {
            RawInput::Text(s) => s.clone(),
            RawInput::Number(n) => n.to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CashRequest {
    pub amount: RawInput,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TradeRequest {
    pub symbol: String,
    pub quantity: RawInput,
}

/// Result of an accepted action.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub status: String,
    pub balance: Decimal,
    pub activity: Activity,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub symbol: String,
    pub price: Decimal,
    pub known: bool,
}

/// Form fields posted by the cash action forms.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct CashForm {
    #[serde(default)]
    pub amount: String,
}

/// Form fields posted by the trade forms.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct TradeForm {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub quantity: String,
}
