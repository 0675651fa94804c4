//! Client configuration options.

use std::time::Duration;

use chrono::FixedOffset;
use url::Url;

use crate::{Environment, Error, Result};

/// Default value of the `Origin` header.
pub const DEFAULT_ORIGIN: &str = "bca-rs.local";

/// Configuration for the BCA client.
///
/// # Example
///
/// ```
/// use bca_rs::{ClientConfig, Environment};
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_environment(Environment::Sandbox)
///     .with_timeout(Duration::from_secs(60))
///     .with_origin("example.com");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Target environment
    pub environment: Environment,
    /// Host override; takes precedence over `environment`
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// `Origin` header value, as registered with the bank
    pub origin: String,
    /// Offset for `X-BCA-Timestamp`; local time when `None`
    pub timestamp_offset: Option<FixedOffset>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            base_url: None,
            timeout: Duration::from_secs(30),
            user_agent: format!("bca-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            origin: DEFAULT_ORIGIN.to_string(),
            timestamp_offset: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Send requests to a custom host, e.g. a proxy or test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the `Origin` header.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Express timestamps in a fixed offset instead of local time.
    pub fn with_timestamp_offset(mut self, offset: FixedOffset) -> Self {
        self.timestamp_offset = Some(offset);
        self
    }

    /// The validated base URL without a trailing slash.
    pub(crate) fn resolved_base_url(&self) -> Result<String> {
        let raw = self
            .base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.api_base_url());

        let url = Url::parse(raw)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "unsupported scheme in base URL: {}",
                url.scheme()
            )));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(Error::Config(
                "base URL must not carry a query or fragment".to_string(),
            ));
        }

        Ok(raw.trim_end_matches('/').to_string())
    }
}
