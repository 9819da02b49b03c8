use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tradebook_core::quotes::normalize_symbol;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::QuoteResponse,
};

async fn get_quote(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<QuoteResponse>> {
    let symbol = normalize_symbol(&symbol);
    if symbol.is_empty() {
        return Err(ApiError::BadRequest("Symbol must not be empty".to_string()));
    }
    let price = state.account_service.quote(&symbol)?;
    Ok(Json(QuoteResponse {
        known: state.quote_service.is_known(&symbol),
        symbol,
        price,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quotes/{symbol}", get(get_quote))
}
