//! Portfolio module - derived valuation queries over an account's holdings.

pub mod valuation;

pub use valuation::{
    calculate_holdings_value, calculate_profit_loss, total_market_value, HoldingValuation,
    PortfolioSummary,
};
