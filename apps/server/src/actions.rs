//! Parsing and dispatch for the four user actions, shared by the HTML forms
//! and the JSON API so both surfaces report identical status lines.

use std::str::FromStr;

use rust_decimal::Decimal;
use tradebook_core::accounts::AccountServiceTrait;
use tradebook_core::activities::Activity;
use tradebook_core::errors::ValidationError;

use crate::error::{ApiError, ApiResult};
use crate::views::format_currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Deposit,
    Withdraw,
    Buy,
    Sell,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Deposit => "deposit",
            ActionKind::Withdraw => "withdraw",
            ActionKind::Buy => "buy",
            ActionKind::Sell => "sell",
        }
    }

    pub fn success_status(&self, balance: Decimal) -> String {
        let prefix = match self {
            ActionKind::Deposit => "Deposit successful.",
            ActionKind::Withdraw => "Withdrawal successful.",
            ActionKind::Buy => "Buy order successful.",
            ActionKind::Sell => "Sell order successful.",
        };
        format!("{} New balance: {}", prefix, format_currency(balance))
    }

    pub fn failure_status(&self) -> &'static str {
        match self {
            ActionKind::Deposit => "Deposit failed. Please enter a valid amount.",
            ActionKind::Withdraw => "Withdrawal failed. Insufficient funds or invalid amount.",
            ActionKind::Buy => "Buy order failed. Insufficient funds or invalid quantity.",
            ActionKind::Sell => "Sell order failed. Insufficient shares or invalid quantity.",
        }
    }
}

/// A user action with its inputs still in raw text form.
#[derive(Debug, Clone)]
pub enum ActionRequest {
    Deposit { amount: String },
    Withdraw { amount: String },
    Buy { symbol: String, quantity: String },
    Sell { symbol: String, quantity: String },
}

impl ActionRequest {
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionRequest::Deposit { .. } => ActionKind::Deposit,
            ActionRequest::Withdraw { .. } => ActionKind::Withdraw,
            ActionRequest::Buy { .. } => ActionKind::Buy,
            ActionRequest::Sell { .. } => ActionKind::Sell,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ActionOutcome {
    Accepted {
        status: String,
        balance: Decimal,
        activity: Activity,
    },
    Rejected {
        status: String,
        reason: String,
    },
}

impl ActionOutcome {
    pub fn status(&self) -> &str {
        match self {
            ActionOutcome::Accepted { status, .. } | ActionOutcome::Rejected { status, .. } => {
                status
            }
        }
    }
}

pub fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    Ok(Decimal::from_str(raw.trim())?)
}

pub fn parse_quantity(raw: &str) -> Result<i64, ValidationError> {
    Ok(raw.trim().parse::<i64>()?)
}

/// Runs an action against the ledger.
///
/// Unparseable input and ledger rejections both become
/// `ActionOutcome::Rejected`; only service faults are returned as errors.
pub fn execute(
    service: &dyn AccountServiceTrait,
    request: &ActionRequest,
) -> ApiResult<ActionOutcome> {
    let kind = request.kind();
    let result = match request {
        ActionRequest::Deposit { amount } => parse_amount(amount)
            .map_err(Into::into)
            .and_then(|amount| service.deposit(amount)),
        ActionRequest::Withdraw { amount } => parse_amount(amount)
            .map_err(Into::into)
            .and_then(|amount| service.withdraw(amount)),
        ActionRequest::Buy { symbol, quantity } => parse_quantity(quantity)
            .map_err(Into::into)
            .and_then(|quantity| service.buy_shares(symbol, quantity)),
        ActionRequest::Sell { symbol, quantity } => parse_quantity(quantity)
            .map_err(Into::into)
            .and_then(|quantity| service.sell_shares(symbol, quantity)),
    };

    match result {
        Ok(activity) => {
            let balance = service.balance()?;
            Ok(ActionOutcome::Accepted {
                status: kind.success_status(balance),
                balance,
                activity,
            })
        }
        Err(err) if err.is_rejection() => {
            tracing::debug!("{} rejected: {}", kind.as_str(), err);
            Ok(ActionOutcome::Rejected {
                status: kind.failure_status().to_string(),
                reason: err.to_string(),
            })
        }
        Err(err) => Err(ApiError::from(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use tradebook_core::accounts::{Account, AccountService};
    use tradebook_core::quotes::{QuoteService, StaticQuoteProvider, UnknownSymbolPolicy};

    fn service() -> AccountService {
        let quotes = QuoteService::new(
            Arc::new(StaticQuoteProvider::default()),
            UnknownSymbolPolicy::PriceAtZero,
        );
        AccountService::new(
            Account::new("user1", dec!(10000.00)).unwrap(),
            Arc::new(quotes),
        )
    }

    fn run(service: &AccountService, request: ActionRequest) -> String {
        execute(service, &request).unwrap().status().to_string()
    }

    #[test]
    fn deposit_statuses() {
        let service = service();
        assert_eq!(
            run(&service, ActionRequest::Deposit { amount: "500".into() }),
            "Deposit successful. New balance: $10500.00"
        );
        assert_eq!(
            run(&service, ActionRequest::Deposit { amount: "0".into() }),
            "Deposit failed. Please enter a valid amount."
        );
        assert_eq!(
            run(&service, ActionRequest::Deposit { amount: "abc".into() }),
            "Deposit failed. Please enter a valid amount."
        );
    }

    #[test]
    fn withdraw_statuses() {
        let service = service();
        assert_eq!(
            run(&service, ActionRequest::Withdraw { amount: " 100 ".into() }),
            "Withdrawal successful. New balance: $9900.00"
        );
        assert_eq!(
            run(&service, ActionRequest::Withdraw { amount: "100000".into() }),
            "Withdrawal failed. Insufficient funds or invalid amount."
        );
    }

    #[test]
    fn trade_statuses() {
        let service = service();
        assert_eq!(
            run(
                &service,
                ActionRequest::Buy {
                    symbol: "aapl".into(),
                    quantity: "10".into()
                }
            ),
            "Buy order successful. New balance: $8300.00"
        );
        assert_eq!(
            run(
                &service,
                ActionRequest::Buy {
                    symbol: "TSLA".into(),
                    quantity: "100".into()
                }
            ),
            "Buy order failed. Insufficient funds or invalid quantity."
        );
        assert_eq!(
            run(
                &service,
                ActionRequest::Sell {
                    symbol: "AAPL".into(),
                    quantity: "4".into()
                }
            ),
            "Sell order successful. New balance: $8980.00"
        );
        assert_eq!(
            run(
                &service,
                ActionRequest::Sell {
                    symbol: "GOOGL".into(),
                    quantity: "1".into()
                }
            ),
            "Sell order failed. Insufficient shares or invalid quantity."
        );
        assert_eq!(
            run(
                &service,
                ActionRequest::Sell {
                    symbol: "AAPL".into(),
                    quantity: "2.5".into()
                }
            ),
            "Sell order failed. Insufficient shares or invalid quantity."
        );
    }

    #[test]
    fn rejection_keeps_reason() {
        let service = service();
        let outcome = execute(
            &service,
            &ActionRequest::Withdraw {
                amount: "20000".into(),
            },
        )
        .unwrap();
        match outcome {
            ActionOutcome::Rejected { reason, .. } => assert!(reason.contains("Insufficient")),
            other => panic!("expected rejection, got {:?}", other),
        }
    }
}
