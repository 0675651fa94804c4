//! Primitive types and newtypes for type-safe API interactions.
//!
//! Identifiers are inserted into request paths verbatim, so these wrappers
//! do no escaping of their own. See [`RelativeUrl`](crate::client::RelativeUrl).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A bank-assigned corporate identifier.
///
/// # Example
///
/// ```
/// use bca_rs::CorporateId;
///
/// let corporate = CorporateId::new("BCAAPI2016");
/// assert_eq!(corporate.as_str(), "BCAAPI2016");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorporateId(String);

impl CorporateId {
    /// Create a new corporate ID.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the corporate ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorporateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CorporateId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for CorporateId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CorporateId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A strongly-typed bank account number.
///
/// # Example
///
/// ```
/// use bca_rs::AccountNumber;
///
/// let account = AccountNumber::new("0201245680");
/// println!("Account: {}", account);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Create a new account number from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the account number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AccountNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for AccountNumber {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AccountNumber {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// BCA API environment.
///
/// Determines which host requests go to. Any other host can be set with
/// [`ClientConfig::with_base_url`](crate::ClientConfig::with_base_url).
///
/// # Example
///
/// ```
/// use bca_rs::Environment;
///
/// let env = Environment::Sandbox;
/// println!("API URL: {}", env.api_base_url());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Sandbox environment with dummy accounts.
    #[default]
    Sandbox,
    /// Production environment - real accounts, real money.
    Production,
}

impl Environment {
    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => "https://sandbox.bca.co.id",
            Environment::Production => "https://api.klikbca.com",
        }
    }

    /// Returns `true` if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Sandbox => write!(f, "sandbox"),
            Environment::Production => write!(f, "production"),
        }
    }
}
