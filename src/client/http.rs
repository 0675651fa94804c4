//! HTTP client implementation for the BCA API.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE, ORIGIN};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::api::{BalancesService, StatementsService, TransfersService};
use crate::auth::{basic_authorization, Credentials, Session, SignIn, Timestamp};
use crate::{Error, Result};

use super::config::ClientConfig;
use super::relative_url::RelativeUrl;

/// OAuth token endpoint.
pub const OAUTH_TOKEN_PATH: &str = "/api/oauth/token";

const X_BCA_KEY: &str = "x-bca-key";
const X_BCA_TIMESTAMP: &str = "x-bca-timestamp";
const X_BCA_SIGNATURE: &str = "x-bca-signature";

/// The main client for interacting with the BCA API.
///
/// The client holds the API credentials and the current access token,
/// and hands out service structs for each group of endpoints. It is cheap
/// to clone; clones share the same session.
///
/// # Example
///
/// ```no_run
/// use bca_rs::{AccountNumber, BcaClient, ClientConfig, CorporateId, Credentials};
///
/// # async fn example() -> bca_rs::Result<()> {
/// let client = BcaClient::new(
///     Credentials::new("your-api-key", "your-api-secret"),
///     ClientConfig::default(),
/// )?;
///
/// client.sign_in("your-client-id", "your-client-secret").await?;
///
/// let corporate = CorporateId::new("BCAAPI2016");
/// let inquiry = client
///     .balances()
///     .get(&corporate, &[AccountNumber::new("0201245680")])
///     .await?;
/// println!("{:?}", inquiry.account_detail_data_success);
/// # Ok(())
/// # }
/// ```
pub struct BcaClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) session: Session,
    pub(crate) config: ClientConfig,
    pub(crate) base_url: String,
}

impl BcaClient {
    /// Create an unauthenticated client.
    ///
    /// Call [`sign_in`](Self::sign_in) before using any service.
    pub fn new(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Self::with_session(Session::new(credentials), config)
    }

    /// Create a client around an existing session.
    pub fn with_session(session: Session, config: ClientConfig) -> Result<Self> {
        let base_url = config.resolved_base_url()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                session,
                config,
                base_url,
            }),
        })
    }

    /// Exchange OAuth client credentials for an access token.
    ///
    /// On [`SignIn::Authenticated`] the new token replaces the session's
    /// current one. [`SignIn::UnexpectedResponse`] carries the raw body
    /// when the bank answered 2xx without a token.
    ///
    /// # Errors
    ///
    /// [`Error::Remote`] with the bank's English message when the
    /// credentials are rejected, e.g.
    /// `Invalid client_id/client_secret/grant_type`.
    pub async fn sign_in(&self, client_id: &str, client_secret: &str) -> Result<SignIn> {
        self.inner
            .sign_in(client_id, &SecretString::from(client_secret.to_string()))
            .await
    }

    /// Get the balance inquiry service.
    pub fn balances(&self) -> BalancesService {
        BalancesService::new(self.inner.clone())
    }

    /// Get the account statement service.
    pub fn statements(&self) -> StatementsService {
        StatementsService::new(self.inner.clone())
    }

    /// Get the fund transfer service.
    pub fn transfers(&self) -> TransfersService {
        TransfersService::new(self.inner.clone())
    }

    /// Issue a signed GET to any relative URL.
    ///
    /// Use `T = serde_json::Value` to consume the response untyped.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &RelativeUrl) -> Result<T> {
        self.inner.get(url).await
    }

    /// Issue a signed POST with a JSON body to any relative URL.
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &RelativeUrl,
        body: &B,
    ) -> Result<T> {
        self.inner.post(url, body).await
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// The host requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }
}

impl ClientInner {
    /// Timestamp for the next request.
    pub(crate) fn timestamp(&self) -> Timestamp {
        match self.config.timestamp_offset {
            Some(offset) => Timestamp::now_in(offset),
            None => Timestamp::now(),
        }
    }

    /// Build the signed header set for one request.
    pub(crate) fn build_headers(
        &self,
        access_token: &str,
        timestamp: &Timestamp,
        signature: &str,
    ) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(
            AUTHORIZATION,
            header_value(&format!("Bearer {}", access_token), "access token")?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ORIGIN, header_value(&self.config.origin, "origin")?);
        headers.insert(
            HeaderName::from_static(X_BCA_KEY),
            header_value(self.session.api_key(), "API key")?,
        );
        headers.insert(
            HeaderName::from_static(X_BCA_TIMESTAMP),
            header_value(timestamp.as_str(), "timestamp")?,
        );
        headers.insert(
            HeaderName::from_static(X_BCA_SIGNATURE),
            header_value(signature, "signature")?,
        );

        Ok(headers)
    }

    /// Make a signed GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &RelativeUrl) -> Result<T> {
        self.execute(Method::GET, url, None).await
    }

    /// Make a signed POST request with a compact JSON body.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &RelativeUrl,
        body: &B,
    ) -> Result<T> {
        let payload = serde_json::to_vec(body)
            .map_err(|e| Error::Validation(format!("request body cannot be serialized: {}", e)))?;
        self.execute(Method::POST, url, Some(payload)).await
    }

    /// Sign, send and decode one request.
    ///
    /// The access token is read once, so the signature and the
    /// `Authorization` header always carry the same token.
    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &RelativeUrl,
        body: Option<Vec<u8>>,
    ) -> Result<T> {
        let token = self.session.bearer().await;
        let timestamp = self.timestamp();
        let signature = self.session.signer().sign(
            &method,
            url.as_str(),
            token.expose_secret(),
            body.as_deref().unwrap_or_default(),
            &timestamp,
        )?;
        let headers = self.build_headers(token.expose_secret(), &timestamp, &signature)?;

        tracing::debug!(method = %method, url = %url, "Sending signed request");

        let mut request = self
            .http
            .request(method, format!("{}{}", self.base_url, url))
            .headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Exchange client credentials for a token and store it.
    pub(crate) async fn sign_in(
        &self,
        client_id: &str,
        client_secret: &SecretString,
    ) -> Result<SignIn> {
        let url = format!("{}{}", self.base_url, OAUTH_TOKEN_PATH);

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, basic_authorization(client_id, client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let body: Value = self.handle_response(response).await?;
        let outcome = SignIn::from_token_response(body);

        match &outcome {
            SignIn::Authenticated(token) => {
                self.session.set_token(token.clone()).await;
                tracing::info!(expires_at = ?token.expires_at(), "Signed in to BCA API");
            }
            SignIn::UnexpectedResponse(_) => {
                tracing::warn!("Token endpoint answered without an access_token");
            }
        }

        Ok(outcome)
    }

    /// Handle an API response.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            Ok(serde_json::from_slice(&body)?)
        } else {
            let err = Error::from_api_response(status.as_u16(), &body);
            tracing::debug!(status = status.as_u16(), error = %err, "BCA API returned an error");
            Err(err)
        }
    }
}

fn header_value(value: &str, what: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| Error::Config(format!("invalid {} header value", what)))
}

impl Clone for BcaClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for BcaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BcaClient")
            .field("base_url", &self.inner.base_url)
            .field("session", &self.inner.session)
            .field("config", &self.inner.config)
            .finish()
    }
}
