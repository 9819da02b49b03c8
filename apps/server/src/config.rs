use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::Context;
use rust_decimal::Decimal;
use tradebook_core::constants::{DEFAULT_ACCOUNT_ID, DEFAULT_OPENING_BALANCE};
use tradebook_core::quotes::{StaticQuoteProvider, UnknownSymbolPolicy};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub account_id: String,
    pub opening_balance: Decimal,
    /// Price table override. `None` keeps the built-in table.
    pub prices: Option<StaticQuoteProvider>,
    pub unknown_symbol_policy: UnknownSymbolPolicy,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    /// Loads `.env` if present, then reads the `TB_*` variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    ///
    /// An unparseable listen address or opening balance is an error; any other
    /// bad value falls back to its default with a warning.
    pub fn from_vars<F>(get: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = get("TB_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("Invalid TB_LISTEN_ADDR")?;

        let account_id = get("TB_ACCOUNT_ID")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ACCOUNT_ID.to_string());

        let opening_balance = get("TB_OPENING_BALANCE")
            .unwrap_or_else(|| DEFAULT_OPENING_BALANCE.to_string());
        let opening_balance = Decimal::from_str(opening_balance.trim())
            .with_context(|| format!("Invalid TB_OPENING_BALANCE: {}", opening_balance))?;

        let prices = get("TB_PRICES")
            .filter(|s| !s.trim().is_empty())
            .and_then(|spec| match StaticQuoteProvider::parse(&spec) {
                Ok(provider) => Some(provider),
                Err(e) => {
                    tracing::warn!("Ignoring TB_PRICES ({}), using built-in prices", e);
                    None
                }
            });

        let unknown_symbol_policy = get("TB_UNKNOWN_SYMBOL_POLICY")
            .map(|raw| {
                raw.parse::<UnknownSymbolPolicy>().unwrap_or_else(|e| {
                    tracing::warn!("{}, falling back to {}", e, UnknownSymbolPolicy::default());
                    UnknownSymbolPolicy::default()
                })
            })
            .unwrap_or_default();

        let cors_allow = get("TB_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let timeout_ms: u64 = match get("TB_REQUEST_TIMEOUT_MS") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "Invalid TB_REQUEST_TIMEOUT_MS '{}', using {}",
                    raw,
                    DEFAULT_REQUEST_TIMEOUT_MS
                );
                DEFAULT_REQUEST_TIMEOUT_MS
            }),
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };

        Ok(Self {
            listen_addr,
            account_id,
            opening_balance,
            prices,
            unknown_symbol_policy,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            account_id: DEFAULT_ACCOUNT_ID.to_string(),
            opening_balance: Decimal::from(10_000),
            prices: None,
            unknown_symbol_policy: UnknownSymbolPolicy::default(),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tradebook_core::quotes::QuoteProviderTrait;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.account_id, "user1");
        assert_eq!(config.opening_balance, Decimal::new(1_000_000, 2));
        assert!(config.prices.is_none());
        assert_eq!(config.unknown_symbol_policy, UnknownSymbolPolicy::PriceAtZero);
        assert_eq!(config.cors_allow, vec!["*".to_string()]);
        assert_eq!(config.request_timeout, Duration::from_millis(30_000));
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("TB_LISTEN_ADDR", "127.0.0.1:9000"),
            ("TB_ACCOUNT_ID", "alice"),
            ("TB_OPENING_BALANCE", "2500.50"),
            ("TB_PRICES", "msft=400.25, AAPL=171"),
            ("TB_UNKNOWN_SYMBOL_POLICY", "reject"),
            ("TB_CORS_ALLOW_ORIGINS", "http://a.test, http://b.test"),
            ("TB_REQUEST_TIMEOUT_MS", "500"),
        ])
        .unwrap();
        assert_eq!(config.listen_addr.port(), 9000);
        assert_eq!(config.account_id, "alice");
        assert_eq!(config.opening_balance, Decimal::new(250_050, 2));
        let prices = config.prices.unwrap();
        assert_eq!(prices.symbols(), vec!["AAPL".to_string(), "MSFT".to_string()]);
        assert_eq!(config.unknown_symbol_policy, UnknownSymbolPolicy::Reject);
        assert_eq!(config.cors_allow.len(), 2);
        assert_eq!(config.request_timeout, Duration::from_millis(500));
    }

    #[test]
    fn bad_optional_values_fall_back() {
        let config = config_from(&[
            ("TB_PRICES", "AAPL=abc"),
            ("TB_UNKNOWN_SYMBOL_POLICY", "sometimes"),
            ("TB_REQUEST_TIMEOUT_MS", "soon"),
            ("TB_ACCOUNT_ID", "   "),
        ])
        .unwrap();
        assert!(config.prices.is_none());
        assert_eq!(config.unknown_symbol_policy, UnknownSymbolPolicy::PriceAtZero);
        assert_eq!(config.request_timeout, Duration::from_millis(30_000));
        assert_eq!(config.account_id, "user1");
    }

    #[test]
    fn bad_listen_addr_fails() {
        assert!(config_from(&[("TB_LISTEN_ADDR", "not-an-addr")]).is_err());
    }

    #[test]
    fn bad_opening_balance_fails() {
        assert!(config_from(&[("TB_OPENING_BALANCE", "lots")]).is_err());
    }
}
