//! Account domain model: the ledger state and its guarded transitions.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::activities::{Activity, ActivityError};
use crate::errors::{Result, ValidationError};

/// A single trading account.
///
/// Invariants held by every transition:
/// - `balance` is never taken below zero by a withdrawal or purchase;
/// - `holdings` only contains symbols with a quantity above zero;
/// - `transactions` is append-only and grows by exactly one record per
///   accepted transition, and not at all on a rejection.
///
/// Transitions take an already resolved price and timestamp, so the model
/// itself does no lookups and no I/O. Each one validates fully before it
/// mutates anything.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    id: String,
    balance: Decimal,
    initial_deposit: Decimal,
    holdings: BTreeMap<String, i64>,
    transactions: Vec<Activity>,
}

impl Account {
    /// Opens an account with the given opening balance.
    pub fn new(id: impl Into<String>, initial_deposit: Decimal) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::InvalidInput("account id must not be empty".into()).into());
        }
        if initial_deposit < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "opening balance must not be negative, got {}",
                initial_deposit
            ))
            .into());
        }
        Ok(Self {
            id,
            balance: initial_deposit,
            initial_deposit,
            holdings: BTreeMap::new(),
            transactions: Vec::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn initial_deposit(&self) -> Decimal {
        self.initial_deposit
    }

    /// Quantity held for a symbol, zero if the symbol is not held.
    pub fn quantity_of(&self, symbol: &str) -> i64 {
        self.holdings.get(symbol).copied().unwrap_or(0)
    }

    /// Read-only view of the holdings. Use `holdings_snapshot` for a copy.
    pub fn holdings(&self) -> &BTreeMap<String, i64> {
        &self.holdings
    }

    /// Read-only view of the history. Use `transaction_history` for a copy.
    pub fn transactions(&self) -> &[Activity] {
        &self.transactions
    }

    /// Owned copy of the holdings; changes to it never reach the account.
    pub fn holdings_snapshot(&self) -> BTreeMap<String, i64> {
        self.holdings.clone()
    }

    /// Owned copy of the history; changes to it never reach the account.
    pub fn transaction_history(&self) -> Vec<Activity> {
        self.transactions.clone()
    }

    pub fn deposit(
        &mut self,
        amount: Decimal,
        recorded_at: DateTime<Utc>,
    ) -> std::result::Result<Activity, ActivityError> {
        if amount <= Decimal::ZERO {
            return Err(ActivityError::InvalidAmount(amount));
        }
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(ActivityError::Overflow("balance"))?;

        self.balance = balance;
        Ok(self.record(Activity::deposit(amount, recorded_at)))
    }

    pub fn withdraw(
        &mut self,
        amount: Decimal,
        recorded_at: DateTime<Utc>,
    ) -> std::result::Result<Activity, ActivityError> {
        if amount <= Decimal::ZERO {
            return Err(ActivityError::InvalidAmount(amount));
        }
        if amount > self.balance {
            return Err(ActivityError::InsufficientFunds {
                required: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        Ok(self.record(Activity::withdrawal(amount, recorded_at)))
    }

    /// Buys `quantity` shares of `symbol` at `unit_price`.
    ///
    /// `symbol` is expected in normalized form.
    pub fn buy_shares(
        &mut self,
        symbol: &str,
        quantity: i64,
        unit_price: Decimal,
        recorded_at: DateTime<Utc>,
    ) -> std::result::Result<Activity, ActivityError> {
        if quantity <= 0 {
            return Err(ActivityError::InvalidQuantity(quantity));
        }
        if symbol.is_empty() {
            return Err(ActivityError::InvalidSymbol);
        }
        let cost = unit_price
            .checked_mul(Decimal::from(quantity))
            .ok_or(ActivityError::Overflow("purchase cost"))?;
        if cost > self.balance {
            return Err(ActivityError::InsufficientFunds {
                required: cost,
                available: self.balance,
            });
        }
        let held = self
            .quantity_of(symbol)
            .checked_add(quantity)
            .ok_or(ActivityError::Overflow("holding quantity"))?;

        self.balance -= cost;
        self.holdings.insert(symbol.to_string(), held);
        Ok(self.record(Activity::buy(symbol, quantity, unit_price, recorded_at)))
    }

    /// Sells `quantity` shares of `symbol` at `unit_price`, dropping the
    /// holding once it reaches zero.
    pub fn sell_shares(
        &mut self,
        symbol: &str,
        quantity: i64,
        unit_price: Decimal,
        recorded_at: DateTime<Utc>,
    ) -> std::result::Result<Activity, ActivityError> {
        if quantity <= 0 {
            return Err(ActivityError::InvalidQuantity(quantity));
        }
        if symbol.is_empty() {
            return Err(ActivityError::InvalidSymbol);
        }
        let held = self.quantity_of(symbol);
        if held < quantity {
            return Err(ActivityError::InsufficientShares {
                symbol: symbol.to_string(),
                requested: quantity,
                held,
            });
        }
        let balance = unit_price
            .checked_mul(Decimal::from(quantity))
            .and_then(|proceeds| self.balance.checked_add(proceeds))
            .ok_or(ActivityError::Overflow("sale proceeds"))?;

        self.balance = balance;
        let remaining = held - quantity;
        if remaining == 0 {
            self.holdings.remove(symbol);
        } else {
            self.holdings.insert(symbol.to_string(), remaining);
        }
        Ok(self.record(Activity::sell(symbol, quantity, unit_price, recorded_at)))
    }

    fn record(&mut self, activity: Activity) -> Activity {
        self.transactions.push(activity.clone());
        activity
    }
}
