use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; ChatApp/1.0)";
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://duckduckgo.com/html/";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 20;

/// Settings read once at startup and shared read-only with every handler.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub user_agent: String,
    pub search_endpoint: String,
    pub fetch_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Build the config from the process environment, loading `.env` first if present.
    pub fn from_env() -> Result<Config> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = match lookup("RELAY_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("RELAY_PORT is not a valid port: {raw:?}"))?,
            None => DEFAULT_PORT,
        };
        let timeout_secs = match lookup("RELAY_FETCH_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().with_context(|| {
                format!("RELAY_FETCH_TIMEOUT_SECS is not a number of seconds: {raw:?}")
            })?,
            None => DEFAULT_FETCH_TIMEOUT_SECS,
        };

        Ok(Config {
            host: get_or_default("RELAY_HOST", DEFAULT_HOST),
            port,
            user_agent: get_or_default("RELAY_USER_AGENT", DEFAULT_USER_AGENT),
            search_endpoint: get_or_default("RELAY_SEARCH_ENDPOINT", DEFAULT_SEARCH_ENDPOINT),
            fetch_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.user_agent, "Mozilla/5.0 (compatible; ChatApp/1.0)");
        assert_eq!(config.search_endpoint, "https://duckduckgo.com/html/");
        assert_eq!(config.fetch_timeout, Duration::from_secs(20));
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("RELAY_HOST", "127.0.0.1"),
            ("RELAY_PORT", "8080"),
            ("RELAY_FETCH_TIMEOUT_SECS", " 5 "),
            ("RELAY_USER_AGENT", "test-agent"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.fetch_timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn test_bad_port_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("RELAY_PORT", "http")])).unwrap_err();
        assert!(format!("{err:#}").contains("RELAY_PORT"));
    }

    #[test]
    fn test_bad_timeout_is_an_error() {
        assert!(Config::from_lookup(lookup_from(&[("RELAY_FETCH_TIMEOUT_SECS", "-1")])).is_err());
    }
}
