use chrono::Utc;
use log::{debug, info};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::accounts_model::Account;
use super::accounts_traits::AccountServiceTrait;
use crate::activities::{Activity, ActivityError};
use crate::errors::{Error, Result};
use crate::portfolio::{
    calculate_holdings_value, calculate_profit_loss, total_market_value, PortfolioSummary,
};
use crate::quotes::{normalize_symbol, QuoteError, QuoteServiceTrait};

/// Service owning one account ledger.
///
/// The (balance, holdings, transactions) triple sits behind a single mutex,
/// so the check-then-act sequence of every trade is atomic with respect to
/// other callers. Prices are resolved before the lock is taken.
pub struct AccountService {
    account_id: String,
    initial_deposit: Decimal,
    account: Mutex<Account>,
    quote_service: Arc<dyn QuoteServiceTrait>,
}

impl AccountService {
    /// Creates a new AccountService owning `account`
    pub fn new(account: Account, quote_service: Arc<dyn QuoteServiceTrait>) -> Self {
        Self {
            account_id: account.id().to_string(),
            initial_deposit: account.initial_deposit(),
            account: Mutex::new(account),
            quote_service,
        }
    }

    /// Copy of the full ledger state.
    pub fn snapshot(&self) -> Result<Account> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Account>> {
        self.account.lock().map_err(|e| Error::Lock(e.to_string()))
    }

    fn resolve_price(&self, symbol: &str) -> Result<Decimal> {
        self.quote_service.get_price(symbol).map_err(|e| match e {
            QuoteError::UnknownSymbol(symbol) => ActivityError::UnknownSymbol(symbol).into(),
            other => other.into(),
        })
    }

    fn finish(
        &self,
        action: &str,
        outcome: std::result::Result<Activity, ActivityError>,
    ) -> Result<Activity> {
        match outcome {
            Ok(activity) => {
                info!(
                    "Account {}: {} accepted ({})",
                    self.account_id,
                    action,
                    activity.activity_type
                );
                Ok(activity)
            }
            Err(err) => {
                debug!("Account {}: {} rejected: {}", self.account_id, action, err);
                Err(err.into())
            }
        }
    }
}

impl AccountServiceTrait for AccountService {
    fn account_id(&self) -> &str {
        &self.account_id
    }

    fn deposit(&self, amount: Decimal) -> Result<Activity> {
        let outcome = self.lock()?.deposit(amount, Utc::now());
        self.finish("deposit", outcome)
    }

    fn withdraw(&self, amount: Decimal) -> Result<Activity> {
        let outcome = self.lock()?.withdraw(amount, Utc::now());
        self.finish("withdraw", outcome)
    }

    fn buy_shares(&self, symbol: &str, quantity: i64) -> Result<Activity> {
        let symbol = normalize_symbol(symbol);
        if quantity <= 0 {
            return self.finish("buy", Err(ActivityError::InvalidQuantity(quantity)));
        }
        if symbol.is_empty() {
            return self.finish("buy", Err(ActivityError::InvalidSymbol));
        }
        let unit_price = self.resolve_price(&symbol)?;
        let outcome = self
            .lock()?
            .buy_shares(&symbol, quantity, unit_price, Utc::now());
        self.finish("buy", outcome)
    }

    fn sell_shares(&self, symbol: &str, quantity: i64) -> Result<Activity> {
        let symbol = normalize_symbol(symbol);
        if quantity <= 0 {
            return self.finish("sell", Err(ActivityError::InvalidQuantity(quantity)));
        }
        if symbol.is_empty() {
            return self.finish("sell", Err(ActivityError::InvalidSymbol));
        }
        let unit_price = self.resolve_price(&symbol)?;
        let outcome = self
            .lock()?
            .sell_shares(&symbol, quantity, unit_price, Utc::now());
        self.finish("sell", outcome)
    }

    fn balance(&self) -> Result<Decimal> {
        Ok(self.lock()?.balance())
    }

    fn initial_deposit(&self) -> Decimal {
        self.initial_deposit
    }

    fn holdings(&self) -> Result<BTreeMap<String, i64>> {
        Ok(self.lock()?.holdings_snapshot())
    }

    fn transactions(&self) -> Result<Vec<Activity>> {
        Ok(self.lock()?.transaction_history())
    }

    fn portfolio_value(&self) -> Result<Decimal> {
        let holdings = self.holdings()?;
        let valuations = calculate_holdings_value(&holdings, self.quote_service.as_ref())?;
        total_market_value(&valuations)
    }

    fn profit_loss(&self) -> Result<Decimal> {
        Ok(self.summary()?.profit_loss)
    }

    fn summary(&self) -> Result<PortfolioSummary> {
        let (balance, holdings, transaction_count) = {
            let account = self.lock()?;
            (
                account.balance(),
                account.holdings_snapshot(),
                account.transactions().len(),
            )
        };
        let valuations = calculate_holdings_value(&holdings, self.quote_service.as_ref())?;
        let portfolio_value = total_market_value(&valuations)?;
        Ok(PortfolioSummary {
            account_id: self.account_id.clone(),
            balance,
            initial_deposit: self.initial_deposit,
            portfolio_value,
            profit_loss: calculate_profit_loss(balance, portfolio_value, self.initial_deposit),
            holdings: valuations,
            transaction_count,
        })
    }

    fn quote(&self, symbol: &str) -> Result<Decimal> {
        Ok(self.quote_service.get_price(symbol)?)
    }
}
