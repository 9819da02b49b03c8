use std::sync::Arc;

use crate::config::Config;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use tradebook_core::{
    accounts::{Account, AccountService, AccountServiceTrait},
    quotes::{QuoteProviderTrait, QuoteService, QuoteServiceTrait, StaticQuoteProvider},
};

pub struct AppState {
    pub account_service: Arc<dyn AccountServiceTrait>,
    pub quote_service: Arc<dyn QuoteServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("TB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider: Arc<dyn QuoteProviderTrait> = match &config.prices {
        Some(prices) => Arc::new(prices.clone()),
        None => Arc::new(StaticQuoteProvider::default()),
    };
    tracing::info!(
        "Price table: {} ({} symbols), unknown symbols: {}",
        provider.id(),
        provider.symbols().len(),
        config.unknown_symbol_policy
    );

    let quote_service: Arc<dyn QuoteServiceTrait> =
        Arc::new(QuoteService::new(provider, config.unknown_symbol_policy));

    let account = Account::new(config.account_id.clone(), config.opening_balance)?;
    tracing::info!(
        "Opened account {} with balance {}",
        account.id(),
        account.balance()
    );
    let account_service: Arc<dyn AccountServiceTrait> =
        Arc::new(AccountService::new(account, quote_service.clone()));

    Ok(Arc::new(AppState {
        account_service,
        quote_service,
    }))
}
