//! Activity domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::activities_constants::*;

/// Enum representing the kinds of record the ledger appends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Deposit,
    Withdrawal,
    Buy,
    Sell,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Deposit => ACTIVITY_TYPE_DEPOSIT,
            ActivityType::Withdrawal => ACTIVITY_TYPE_WITHDRAWAL,
            ActivityType::Buy => ACTIVITY_TYPE_BUY,
            ActivityType::Sell => ACTIVITY_TYPE_SELL,
        }
    }

    /// Human-readable label used by transaction history views.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Deposit => "Deposit",
            ActivityType::Withdrawal => "Withdrawal",
            ActivityType::Buy => "Buy",
            ActivityType::Sell => "Sell",
        }
    }

    pub fn is_trade(&self) -> bool {
        is_trading_activity(self.as_str())
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            s if s == ACTIVITY_TYPE_DEPOSIT => Ok(ActivityType::Deposit),
            s if s == ACTIVITY_TYPE_WITHDRAWAL => Ok(ActivityType::Withdrawal),
            s if s == ACTIVITY_TYPE_BUY => Ok(ActivityType::Buy),
            s if s == ACTIVITY_TYPE_SELL => Ok(ActivityType::Sell),
            _ => Err(format!("Unknown activity type: {}", s)),
        }
    }
}

/// Domain model representing one entry in an account's transaction history.
///
/// Cash movements carry `amount`; trades carry `symbol`, `quantity`, and the
/// `unit_price` used at execution time. Records are immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub activity_type: ActivityType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,
    pub recorded_at: DateTime<Utc>,
}

impl Activity {
    pub fn deposit(amount: Decimal, recorded_at: DateTime<Utc>) -> Self {
        Self::cash(ActivityType::Deposit, amount, recorded_at)
    }

    pub fn withdrawal(amount: Decimal, recorded_at: DateTime<Utc>) -> Self {
        Self::cash(ActivityType::Withdrawal, amount, recorded_at)
    }

    pub fn buy(
        symbol: impl Into<String>,
        quantity: i64,
        unit_price: Decimal,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self::trade(ActivityType::Buy, symbol.into(), quantity, unit_price, recorded_at)
    }

    pub fn sell(
        symbol: impl Into<String>,
        quantity: i64,
        unit_price: Decimal,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self::trade(ActivityType::Sell, symbol.into(), quantity, unit_price, recorded_at)
    }

    fn cash(activity_type: ActivityType, amount: Decimal, recorded_at: DateTime<Utc>) -> Self {
        Self {
            activity_type,
            amount: Some(amount),
            symbol: None,
            quantity: None,
            unit_price: None,
            recorded_at,
        }
    }

    fn trade(
        activity_type: ActivityType,
        symbol: String,
        quantity: i64,
        unit_price: Decimal,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            activity_type,
            amount: None,
            symbol: Some(symbol),
            quantity: Some(quantity),
            unit_price: Some(unit_price),
            recorded_at,
        }
    }

    /// Get quantity, defaulting to zero if not set
    pub fn qty(&self) -> i64 {
        self.quantity.unwrap_or(0)
    }

    /// Get unit price, defaulting to zero if not set
    pub fn price(&self) -> Decimal {
        self.unit_price.unwrap_or(Decimal::ZERO)
    }

    /// Get amount, defaulting to zero if not set
    pub fn amt(&self) -> Decimal {
        self.amount.unwrap_or(Decimal::ZERO)
    }

    /// Gross value of the record: the amount for cash movements,
    /// price × quantity for trades.
    pub fn gross_value(&self) -> Decimal {
        if self.activity_type.is_trade() {
            self.price() * Decimal::from(self.qty())
        } else {
            self.amt()
        }
    }

    /// Signed effect of this record on the cash balance.
    pub fn cash_delta(&self) -> Decimal {
        match self.activity_type {
            ActivityType::Deposit | ActivityType::Sell => self.gross_value(),
            ActivityType::Withdrawal | ActivityType::Buy => -self.gross_value(),
        }
    }
}
