use crate::activities::ActivityError;
use crate::errors::{Error, Result};
use crate::portfolio::valuation::HoldingValuation;
use crate::quotes::QuoteServiceTrait;

use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Prices every holding at the quote service's current price.
///
/// Holdings are returned in symbol order. Lookup failures propagate; under
/// the zero-price policy an unknown symbol is valued at zero.
pub fn calculate_holdings_value(
    holdings: &BTreeMap<String, i64>,
    quotes: &dyn QuoteServiceTrait,
) -> Result<Vec<HoldingValuation>> {
    holdings
        .iter()
        .map(|(symbol, quantity)| -> Result<HoldingValuation> {
            let unit_price = quotes.get_price(symbol)?;
            let market_value = unit_price
                .checked_mul(Decimal::from(*quantity))
                .ok_or(ActivityError::Overflow("holding value"))?;
            Ok(HoldingValuation {
                symbol: symbol.clone(),
                quantity: *quantity,
                unit_price,
                market_value,
            })
        })
        .collect()
}

/// Sum of the market values of all holdings.
pub fn total_market_value(valuations: &[HoldingValuation]) -> Result<Decimal> {
    valuations.iter().try_fold(Decimal::ZERO, |total, v| {
        total
            .checked_add(v.market_value)
            .ok_or_else(|| Error::from(ActivityError::Overflow("portfolio value")))
    })
}

/// Profit or loss relative to the opening balance:
/// `balance + portfolio_value - initial_deposit`.
pub fn calculate_profit_loss(
    balance: Decimal,
    portfolio_value: Decimal,
    initial_deposit: Decimal,
) -> Decimal {
    balance + portfolio_value - initial_deposit
}
