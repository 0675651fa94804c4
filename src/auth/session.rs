//! Session state for BCA API authentication.

use std::sync::Arc;

use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, TimeDelta, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tokio::sync::RwLock;

use super::signature::Signer;

/// API key pair issued to a registered application.
///
/// The key is sent with every request as `X-BCA-Key`. The secret only
/// keys the request signature and never leaves the process.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: SecretString,
}

impl Credentials {
    /// Create credentials from an API key and secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// The public API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// A bearer token obtained from one sign-in.
///
/// Tokens are immutable; signing in again produces a new one.
#[derive(Clone)]
pub struct AccessToken {
    secret: SecretString,
    token_type: String,
    scope: Option<String>,
    expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Create a token from a raw bearer value, e.g. one cached by the caller.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            secret: SecretString::from(token.into()),
            token_type: "Bearer".to_string(),
            scope: None,
            expires_at: None,
        }
    }

    /// The raw bearer value.
    pub fn secret(&self) -> &SecretString {
        &self.secret
    }

    /// Token type reported by the bank, normally `Bearer`.
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Granted scope, if reported.
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// When the token expires, if the bank reported a lifetime.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Returns `true` once the reported lifetime has elapsed.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Utc::now() >= at)
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("secret", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Outcome of a sign-in that the bank answered with a 2xx status.
#[derive(Debug, Clone)]
pub enum SignIn {
    /// The bank issued a token; the session now uses it.
    Authenticated(AccessToken),
    /// The body had no string `access_token`. The payload is returned untouched
    /// and the session keeps its previous token.
    UnexpectedResponse(Value),
}

impl SignIn {
    /// Returns `true` if a token was issued.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SignIn::Authenticated(_))
    }

    /// Classify a parsed token endpoint response.
    ///
    /// A string `access_token` is all that is needed. `token_type`,
    /// `scope` and `expires_in` are read when present and well-formed,
    /// and ignored otherwise.
    pub(crate) fn from_token_response(body: Value) -> Self {
        let Some(access_token) = body.get("access_token").and_then(Value::as_str) else {
            return SignIn::UnexpectedResponse(body);
        };

        let token_type = body
            .get("token_type")
            .and_then(Value::as_str)
            .unwrap_or("Bearer")
            .to_string();
        let scope = body.get("scope").and_then(Value::as_str).map(String::from);
        let expires_at = body
            .get("expires_in")
            .and_then(|v| v.as_i64().or_else(|| v.as_str()?.trim().parse().ok()))
            .and_then(expiry_from_now);

        SignIn::Authenticated(AccessToken {
            secret: SecretString::from(access_token.to_string()),
            token_type,
            scope,
            expires_at,
        })
    }
}

/// `None` when the lifetime does not fit in a `DateTime`.
fn expiry_from_now(secs: i64) -> Option<DateTime<Utc>> {
    TimeDelta::try_seconds(secs).and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
}

/// `Basic` authorization value for the OAuth token endpoint.
pub(crate) fn basic_authorization(client_id: &str, client_secret: &SecretString) -> String {
    let pair = format!("{}:{}", client_id, client_secret.expose_secret());
    format!("Basic {}", general_purpose::STANDARD.encode(pair))
}

/// Authentication state shared by a client and its services.
///
/// Holds the API key, the signer keyed by the API secret, and the current
/// access token. Cloning a session shares the token slot.
#[derive(Clone)]
pub struct Session {
    api_key: String,
    signer: Signer,
    token: Arc<RwLock<Option<AccessToken>>>,
}

impl Session {
    /// Create an unauthenticated session.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            api_key: credentials.api_key,
            signer: Signer::new(credentials.api_secret),
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// The public API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The request signer.
    pub fn signer(&self) -> &Signer {
        &self.signer
    }

    /// The current access token, if signed in.
    pub async fn access_token(&self) -> Option<AccessToken> {
        self.token.read().await.clone()
    }

    /// Returns `true` once a sign-in has succeeded.
    pub async fn is_authenticated(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// When the current token expires, if known.
    pub async fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.token
            .read()
            .await
            .as_ref()
            .and_then(AccessToken::expires_at)
    }

    /// Returns `true` if the current token has expired.
    pub async fn is_expired(&self) -> bool {
        self.token
            .read()
            .await
            .as_ref()
            .is_some_and(AccessToken::is_expired)
    }

    /// Replace the current token.
    pub async fn set_token(&self, token: AccessToken) {
        *self.token.write().await = Some(token);
    }

    /// Forget the current token.
    pub async fn clear(&self) {
        *self.token.write().await = None;
    }

    /// The bearer value to sign and send with one request.
    ///
    /// Empty before sign-in; the bank rejects such requests.
    pub(crate) async fn bearer(&self) -> SecretString {
        match self.token.read().await.as_ref() {
            Some(token) => token.secret.clone(),
            None => {
                tracing::warn!("Issuing a signed request without an access token");
                SecretString::from(String::new())
            }
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}
