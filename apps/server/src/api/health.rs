use std::sync::Arc;

use axum::{extract::State, routing::get, Router};

use crate::{error::ApiResult, main_lib::AppState};

pub async fn healthz() -> &'static str {
    "ok"
}

/// Ready once the ledger lock can be taken.
pub async fn readyz(State(state): State<Arc<AppState>>) -> ApiResult<&'static str> {
    state.account_service.balance()?;
    Ok("ok")
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
