//! HTTP client for the CoinMarketCap Pro API.

use std::fmt;
use std::sync::Arc;

use reqwest::header::{HeaderMap, ACCEPT};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{
    config::Config,
    envelope::Envelope,
    errors::ApiError,
    query::{build_url, Query},
    repository::{
        CexRepository, CommunityRepository, CryptoRepository, DexRepository, MetricRepository,
        MiscRepository,
    },
    types::{Response, Status},
    Error,
};

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

type ErrorHook = Arc<dyn Fn(&Url, &Value) + Send + Sync>;

/// HTTP client for the CoinMarketCap Pro API.
///
/// Every call is a single GET. The response envelope is unwrapped and the
/// status block comes back with the payload in [`Response`], so concurrent
/// calls on one client never observe each other's status. The endpoint
/// groups are reached through [`Client::crypto`], [`Client::dex`],
/// [`Client::cex`], [`Client::metric`], [`Client::community`] and
/// [`Client::misc`].
pub struct Client {
    config: Config,
    http: reqwest::Client,
    on_error: Option<ErrorHook>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .field("on_error", &self.on_error.is_some())
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a new client pointing at the production API.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::from_config(Config::production(api_key))
    }

    /// Creates a new client pointing at the sandbox with the shared sandbox key.
    pub fn new_sandbox() -> Result<Self, Error> {
        Self::from_config(Config::sandbox())
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: impl Into<String>) -> Result<Self, Error> {
        Self::from_config(Config {
            base_url: base_url.to_string(),
            ..Config::production(api_key)
        })
    }

    pub fn from_config(config: Config) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::RequestFailed(e)
        })?;
        Ok(Self {
            config,
            http,
            on_error: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.config.api_key
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) -> &mut Self {
        self.config.api_key = api_key.into();
        self
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) -> &mut Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Points the client at the sandbox host and replaces the key with the
    /// sandbox key.
    pub fn sandbox(&mut self) -> &mut Self {
        self.config.use_sandbox();
        self
    }

    /// Registers a hook called with the request URL and raw body whenever the
    /// status block is missing or does not report success. The error is
    /// still returned to the caller afterwards.
    pub fn on_error<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(&Url, &Value) + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(hook));
        self
    }

    pub fn crypto(&self) -> CryptoRepository<'_> {
        CryptoRepository::new(self)
    }

    pub fn dex(&self) -> DexRepository<'_> {
        DexRepository::new(self)
    }

    pub fn cex(&self) -> CexRepository<'_> {
        CexRepository::new(self)
    }

    pub fn metric(&self) -> MetricRepository<'_> {
        MetricRepository::new(self)
    }

    pub fn community(&self) -> CommunityRepository<'_> {
        CommunityRepository::new(self)
    }

    pub fn misc(&self) -> MiscRepository<'_> {
        MiscRepository::new(self)
    }

    /// Builds the full request URL for `path` and `query` against the configured base URL.
    pub fn get_url<Q>(&self, path: &str, query: Option<&Q>) -> Result<Url, Error>
    where
        Q: Query + ?Sized,
    {
        build_url(&self.config.base_url, path, query)
    }

    /// Sends a GET to `path` and unwraps the response envelope into `T`.
    pub async fn send<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<Response<T>, Error>
    where
        T: DeserializeOwned,
        Q: Query + ?Sized,
    {
        self.send_with_headers(path, query, HeaderMap::new()).await
    }

    /// Like [`Client::send`], with extra request headers. A header with the
    /// same name as a default one replaces it.
    pub async fn send_with_headers<T, Q>(
        &self,
        path: &str,
        query: Option<&Q>,
        headers: HeaderMap,
    ) -> Result<Response<T>, Error>
    where
        T: DeserializeOwned,
        Q: Query + ?Sized,
    {
        let url = self.get_url(path, query)?;
        let body = self.fetch(&url, headers).await?;

        let (data, status) = match Envelope::classify(&body) {
            Envelope::Nested { data, status } | Envelope::Flat { data, status } => (data, status),
            Envelope::Unenveloped => {
                self.notify_error(&url, &body);
                let snippet = truncate_body(&body.to_string());
                tracing::error!("Response from {} has no status block: {}", url, snippet);
                return Err(Error::MissingStatus {
                    url: url.to_string(),
                    body: snippet,
                });
            }
        };

        let (status, clean) = Status::decode(&status);
        if status.is_error() || !clean {
            self.notify_error(&url, &body);
            let err = if status.is_error() {
                ApiError::new(status, data)
            } else {
                tracing::error!(
                    "Malformed status block from {}: {}",
                    url,
                    truncate_body(&body.to_string())
                );
                ApiError::generic(status, data)
            };
            tracing::error!("Request to {} failed: {}", url, err);
            return Err(err.into());
        }

        if let Some(notice) = status.notice.as_deref() {
            tracing::warn!("Notice from {}: {}", url, notice);
        }
        tracing::debug!(
            "{} used {} credit(s)",
            url.path(),
            status.credit_count.unwrap_or_default()
        );

        let data = serde_json::from_value::<T>(data).map_err(|e| {
            tracing::error!("Failed to parse payload from {}: {}", url, e);
            Error::Parse(e)
        })?;

        Ok(Response { data, status })
    }

    /// Sends a GET to `path` and returns the whole JSON body without any
    /// envelope handling. For endpoints whose payload is the body itself.
    pub async fn send_raw<Q>(&self, path: &str, query: Option<&Q>) -> Result<Value, Error>
    where
        Q: Query + ?Sized,
    {
        let url = self.get_url(path, query)?;
        self.fetch(&url, HeaderMap::new()).await
    }

    async fn fetch(&self, url: &Url, headers: HeaderMap) -> Result<Value, Error> {
        tracing::debug!("GET {}", url);
        let resp = self
            .http
            .get(url.clone())
            .header(API_KEY_HEADER, self.config.api_key.as_str())
            .header(ACCEPT, "application/json")
            .headers(headers)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed(e)
        })?;

        match serde_json::from_str::<Value>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(_) if !status.is_success() => {
                let snippet = truncate_body(&body);
                tracing::error!("Request failed with status {}: {}", status, snippet);
                Err(Error::HttpStatus {
                    status: status.as_u16(),
                    body: snippet,
                })
            }
            Err(e) => {
                tracing::error!(
                    "Failed to parse resource: {} | body: {}",
                    e,
                    truncate_body(&body)
                );
                Err(Error::Parse(e))
            }
        }
    }

    fn notify_error(&self, url: &Url, body: &Value) {
        if let Some(hook) = &self.on_error {
            hook(url, body);
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PRODUCTION_URL, SANDBOX_API_KEY, SANDBOX_URL};
    use crate::query::Params;

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert!(truncated.len() <= 2000 + "...[truncated]".len());
    }

    #[test]
    fn client_creation_with_defaults() {
        let client = Client::new("test-key").unwrap();
        assert_eq!(client.base_url(), PRODUCTION_URL);
        assert_eq!(client.api_key(), "test-key");
    }

    #[test]
    fn sandbox_switch_replaces_key() {
        let mut client = Client::new("prod-key").unwrap();
        client.sandbox();
        assert_eq!(client.base_url(), SANDBOX_URL);
        assert_eq!(client.api_key(), SANDBOX_API_KEY);

        let client = Client::new_sandbox().unwrap();
        assert_eq!(client.base_url(), SANDBOX_URL);
    }

    #[test]
    fn setters_mutate_in_place() {
        let mut client = Client::new("a").unwrap();
        client.set_api_key("b").set_base_url("http://localhost:9");
        assert_eq!(client.api_key(), "b");
        assert_eq!(client.base_url(), "http://localhost:9");
    }

    #[test]
    fn get_url_uses_current_base() {
        let mut client = Client::new("k").unwrap();
        let params = Params::new().with("limit", 1i64);
        let url = client.get_url("/v1/fiat/map", Some(&params)).unwrap();
        assert_eq!(url.host_str(), Some("pro-api.coinmarketcap.com"));

        client.sandbox();
        let url = client.get_url("/v1/fiat/map", Some(&params)).unwrap();
        assert_eq!(url.host_str(), Some("sandbox-api.coinmarketcap.com"));
        assert_eq!(url.query(), Some("limit=1"));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let client = Client::new("super-secret").unwrap();
        let text = format!("{:?}", client);
        assert!(!text.contains("super-secret"));
    }
}
