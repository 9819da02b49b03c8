//! HTML form surface: one page, four actions, each re-rendering the page.

use std::sync::Arc;

use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Form, Router,
};

use crate::{
    actions::{execute, ActionRequest},
    error::ApiResult,
    main_lib::AppState,
    models::{CashForm, TradeForm},
    views::{render_page, PageView},
};

fn page(state: &AppState, request: Option<ActionRequest>) -> ApiResult<Html<String>> {
    let status = match request {
        Some(request) => {
            let outcome = execute(state.account_service.as_ref(), &request)?;
            Some((request.kind(), outcome.status().to_string()))
        }
        None => None,
    };

    let summary = state.account_service.summary()?;
    let view = PageView {
        balance: summary.balance,
        holdings: summary
            .holdings
            .into_iter()
            .map(|h| (h.symbol, h.quantity))
            .collect(),
        profit_loss: summary.profit_loss,
        transactions: state.account_service.transactions()?,
        status,
    };
    Ok(Html(render_page(&view)))
}

async fn index(State(state): State<Arc<AppState>>) -> ApiResult<Html<String>> {
    page(&state, None)
}

async fn deposit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CashForm>,
) -> ApiResult<Html<String>> {
    page(&state, Some(ActionRequest::Deposit { amount: form.amount }))
}

async fn withdraw(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CashForm>,
) -> ApiResult<Html<String>> {
    page(&state, Some(ActionRequest::Withdraw { amount: form.amount }))
}

async fn buy(
    State(state): State<Arc<AppState>>,
    Form(form): Form<TradeForm>,
) -> ApiResult<Html<String>> {
    page(
        &state,
        Some(ActionRequest::Buy {
            symbol: form.symbol,
            quantity: form.quantity,
        }),
    )
}

async fn sell(
    State(state): State<Arc<AppState>>,
    Form(form): Form<TradeForm>,
) -> ApiResult<Html<String>> {
    page(
        &state,
        Some(ActionRequest::Sell {
            symbol: form.symbol,
            quantity: form.quantity,
        }),
    )
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/actions/deposit", post(deposit))
        .route("/actions/withdraw", post(withdraw))
        .route("/actions/buy", post(buy))
        .route("/actions/sell", post(sell))
}
