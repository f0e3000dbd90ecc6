//! HTTP client for the upstream search form.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use super::ConnectionSource;
use super::error::HafasError;

/// Default search form endpoint.
const DEFAULT_URL: &str = "https://reiseauskunft.bahn.de/bin/query.exe/";

/// Default user agent sent with every request.
const DEFAULT_USER_AGENT: &str = concat!("connection-finder/", env!("CARGO_PKG_VERSION"));

/// How much of an error body to keep.
const ERROR_BODY_CHARS: usize = 500;

/// Configuration for the upstream client.
#[derive(Debug, Clone)]
pub struct HafasConfig {
    /// Search form endpoint
    pub url: String,
    /// User agent header value
    pub user_agent: String,
    /// Request timeout in seconds. `None` leaves requests unbounded.
    pub timeout_secs: Option<u64>,
}

impl HafasConfig {
    /// Create a config for the public endpoint.
    pub fn new() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }

    /// Set a custom endpoint (for testing).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl Default for HafasConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client posting searches to the upstream form.
#[derive(Debug, Clone)]
pub struct HafasClient {
    http: reqwest::Client,
    url: String,
}

impl HafasClient {
    /// Create a new client with the given configuration.
    pub fn new(config: HafasConfig) -> Result<Self, HafasError> {
        if config.url.is_empty() {
            return Err(HafasError::NotConfigured("empty search URL".to_string()));
        }

        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| HafasError::NotConfigured("invalid user agent".to_string()))?;
        headers.insert(USER_AGENT, user_agent);

        let mut builder = reqwest::Client::builder().default_headers(headers);
        // No timeout unless asked for: a hung server hangs the run.
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            url: config.url,
        })
    }

    /// The endpoint searches are posted to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ConnectionSource for HafasClient {
    async fn search(&self, form: &[(String, String)]) -> Result<String, HafasError> {
        let response = self.http.post(&self.url).form(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HafasError::Status {
                status: status.as_u16(),
                body: body.chars().take(ERROR_BODY_CHARS).collect(),
            });
        }

        Ok(response.text().await?)
    }
}
