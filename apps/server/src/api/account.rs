use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tradebook_core::activities::Activity;

use crate::{
    actions::{execute, ActionOutcome, ActionRequest},
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{AccountSummary, ActionResponse, CashRequest, TradeRequest},
};

async fn get_account(State(state): State<Arc<AppState>>) -> ApiResult<Json<AccountSummary>> {
    let summary = state.account_service.summary()?;
    Ok(Json(AccountSummary::from(summary)))
}

async fn get_holdings(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<BTreeMap<String, i64>>> {
    Ok(Json(state.account_service.holdings()?))
}

async fn get_transactions(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Activity>>> {
    Ok(Json(state.account_service.transactions()?))
}

fn respond(state: &AppState, request: ActionRequest) -> ApiResult<Json<ActionResponse>> {
    match execute(state.account_service.as_ref(), &request)? {
        ActionOutcome::Accepted {
            status,
            balance,
            activity,
        } => Ok(Json(ActionResponse {
            status,
            balance,
            activity,
        })),
        ActionOutcome::Rejected { status, .. } => Err(ApiError::Rejected(status)),
    }
}

async fn deposit(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CashRequest>,
) -> ApiResult<Json<ActionResponse>> {
    respond(
        &state,
        ActionRequest::Deposit {
            amount: body.amount.as_text(),
        },
    )
}

async fn withdraw(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CashRequest>,
) -> ApiResult<Json<ActionResponse>> {
    respond(
        &state,
        ActionRequest::Withdraw {
            amount: body.amount.as_text(),
        },
    )
}

async fn buy(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TradeRequest>,
) -> ApiResult<Json<ActionResponse>> {
    respond(
        &state,
        ActionRequest::Buy {
            symbol: body.symbol,
            quantity: body.quantity.as_text(),
        },
    )
}

async fn sell(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TradeRequest>,
) -> ApiResult<Json<ActionResponse>> {
    respond(
        &state,
        ActionRequest::Sell {
            symbol: body.symbol,
            quantity: body.quantity.as_text(),
        },
    )
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/account", get(get_account))
        .route("/account/holdings", get(get_holdings))
        .route("/account/transactions", get(get_transactions))
        .route("/account/deposit", post(deposit))
        .route("/account/withdraw", post(withdraw))
        .route("/account/buy", post(buy))
        .route("/account/sell", post(sell))
}
