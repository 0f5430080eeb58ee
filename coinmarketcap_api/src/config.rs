//! Client configuration: base URL, API key and HTTP settings.

use std::time::Duration;

/// Production API host.
pub const PRODUCTION_URL: &str = "https://pro-api.coinmarketcap.com";
/// Sandbox API host, serving mock data.
pub const SANDBOX_URL: &str = "https://sandbox-api.coinmarketcap.com";
/// Shared public key accepted by the sandbox host.
pub const SANDBOX_API_KEY: &str = "b54bcf4d-1bca-4e8e-9a24-22ff2c3d462c";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings used to build a [`Client`](crate::Client).
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL for the API. Defaults to [`PRODUCTION_URL`].
    pub base_url: String,
    /// Sent as the `X-CMC_PRO_API_KEY` header. Not validated.
    pub api_key: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Sent as the `User-Agent` header.
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: PRODUCTION_URL.to_string(),
            api_key: String::new(),
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    /// Production host with the given key.
    pub fn production(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Sandbox host with the shared sandbox key.
    pub fn sandbox() -> Self {
        let mut config = Self::default();
        config.use_sandbox();
        config
    }

    /// Switches host and key together so a production key never reaches the sandbox.
    pub fn use_sandbox(&mut self) {
        self.base_url = SANDBOX_URL.to_string();
        self.api_key = SANDBOX_API_KEY.to_string();
    }

    /// True when the base URL is the sandbox host.
    pub fn is_sandbox(&self) -> bool {
        self.base_url == SANDBOX_URL
    }

    /// Replaces the per-request timeout. `None` disables it.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replaces the `User-Agent` header value.
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }
}
