//! Account service trait.
//!
//! This is the contract the presentation layer depends on. Implementations
//! own exactly one ledger and serialize access to it.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::activities::Activity;
use crate::errors::Result;
use crate::portfolio::PortfolioSummary;

/// Trait defining the contract for ledger operations.
///
/// Mutations either apply completely and return the appended record, or
/// fail and leave the ledger unchanged.
pub trait AccountServiceTrait: Send + Sync {
    /// Identifier of the account this service owns.
    fn account_id(&self) -> &str;

    /// Adds funds. Rejects amounts that are not above zero.
    fn deposit(&self, amount: Decimal) -> Result<Activity>;

    /// Removes funds. Rejects non-positive amounts and amounts above the balance.
    fn withdraw(&self, amount: Decimal) -> Result<Activity>;

    /// Buys shares at the current price. Rejects non-positive quantities and
    /// purchases costing more than the balance.
    fn buy_shares(&self, symbol: &str, quantity: i64) -> Result<Activity>;

    /// Sells shares at the current price. Rejects non-positive quantities and
    /// sales of more shares than are held.
    fn sell_shares(&self, symbol: &str, quantity: i64) -> Result<Activity>;

    /// Current cash balance.
    fn balance(&self) -> Result<Decimal>;

    /// Opening balance, the baseline for profit/loss.
    fn initial_deposit(&self) -> Decimal;

    /// Copy of the current holdings, keyed by symbol.
    fn holdings(&self) -> Result<BTreeMap<String, i64>>;

    /// Copy of the transaction history, oldest first.
    fn transactions(&self) -> Result<Vec<Activity>>;

    /// Sum of price × quantity over all holdings.
    fn portfolio_value(&self) -> Result<Decimal>;

    /// `balance + portfolio_value - initial_deposit`.
    fn profit_loss(&self) -> Result<Decimal>;

    /// Balance, valuation, and profit/loss from one consistent read.
    fn summary(&self) -> Result<PortfolioSummary>;

    /// Price the ledger would use for a symbol right now.
    fn quote(&self, symbol: &str) -> Result<Decimal>;
}
