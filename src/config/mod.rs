//! Runtime Configuration
//!
//! Settings are read from the environment with sensible defaults, then optionally
//! overridden by command-line flags in `main`.
//!
//! | Variable                  | Default                    |
//! |---------------------------|----------------------------|
//! | `LIVE_SEARCH_ENDPOINT`    | public mock product list   |
//! | `LIVE_SEARCH_DEBOUNCE_MS` | `500`                      |
//! | `LIVE_SEARCH_TIMEOUT_MS`  | `10000`                    |
//! | `LIVE_SEARCH_BIND`        | unset (terminal mode)      |

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://5f87f81549ccbb0016177d0d.mockapi.io/products";
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const ENV_ENDPOINT: &str = "LIVE_SEARCH_ENDPOINT";
pub const ENV_DEBOUNCE_MS: &str = "LIVE_SEARCH_DEBOUNCE_MS";
pub const ENV_TIMEOUT_MS: &str = "LIVE_SEARCH_TIMEOUT_MS";
pub const ENV_BIND: &str = "LIVE_SEARCH_BIND";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// URL answering `GET` with a JSON array of products.
    pub endpoint: String,
    pub debounce: Duration,
    pub request_timeout: Duration,
    /// When set, the HTTP API is served here instead of the terminal front-end.
    pub bind: Option<SocketAddr>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            debounce: DEFAULT_DEBOUNCE,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            bind: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            config.set_endpoint(&endpoint)?;
        }
        if let Some(ms) = lookup(ENV_DEBOUNCE_MS) {
            config.debounce = parse_millis(ENV_DEBOUNCE_MS, &ms)?;
        }
        if let Some(ms) = lookup(ENV_TIMEOUT_MS) {
            config.request_timeout = parse_millis(ENV_TIMEOUT_MS, &ms)?;
        }
        if let Some(addr) = lookup(ENV_BIND) {
            config.set_bind(&addr)?;
        }

        Ok(config)
    }

    pub fn set_endpoint(&mut self, endpoint: &str) -> Result<()> {
        let trimmed = endpoint.trim();
        if trimmed.is_empty() {
            anyhow::bail!("endpoint must not be empty");
        }
        self.endpoint = trimmed.to_string();
        Ok(())
    }

    pub fn set_debounce_ms(&mut self, ms: &str) -> Result<()> {
        self.debounce = parse_millis("--debounce-ms", ms)?;
        Ok(())
    }

    pub fn set_bind(&mut self, addr: &str) -> Result<()> {
        let addr = addr
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid bind address '{}'", addr))?;
        self.bind = Some(addr);
        Ok(())
    }
}

fn parse_millis(name: &str, value: &str) -> Result<Duration> {
    let ms = value
        .trim()
        .parse::<u64>()
        .with_context(|| format!("{} must be a number of milliseconds, got '{}'", name, value))?;
    Ok(Duration::from_millis(ms))
}
