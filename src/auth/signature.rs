//! Request signing.
//!
//! Every authenticated request carries an `X-BCA-Signature` header holding
//! the lowercase hex HMAC-SHA256 of a canonical string:
//!
//! ```text
//! METHOD:relative_url:access_token:hex(sha256(body without whitespace)):timestamp
//! ```
//!
//! The HMAC key is the raw bytes of the API secret.

use std::fmt;

use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};
use hmac::{Hmac, Mac};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

use crate::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

/// Timestamp format: milliseconds, offset with a colon.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// A request timestamp in the form `YYYY-MM-DDTHH:MM:SS.mmm+HH:MM`.
///
/// # Example
///
/// ```
/// use bca_rs::auth::Timestamp;
/// use chrono::{FixedOffset, TimeZone};
///
/// let wib = FixedOffset::east_opt(7 * 3600).unwrap();
/// let dt = wib.with_ymd_and_hms(2016, 2, 3, 10, 0, 0).unwrap();
/// assert_eq!(
///     Timestamp::from_datetime(&dt).as_str(),
///     "2016-02-03T10:00:00.000+07:00"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp(String);

impl Timestamp {
    /// Current time in the local timezone.
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    /// Current time expressed in a fixed UTC offset.
    pub fn now_in(offset: FixedOffset) -> Self {
        Self::from_datetime(&Utc::now().with_timezone(&offset))
    }

    /// Format an arbitrary datetime.
    pub fn from_datetime<Tz>(dt: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self(dt.format(TIMESTAMP_FORMAT).to_string())
    }

    /// Get the timestamp as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lowercase hex SHA-256 of `body` with ASCII whitespace removed.
///
/// `{"A": "B"}` and `{"A":"B"}` hash identically. An empty body hashes to
/// the digest of the empty string.
pub fn body_digest(body: &[u8]) -> String {
    let mut hasher = Sha256::new();
    for chunk in body.split(u8::is_ascii_whitespace) {
        hasher.update(chunk);
    }
    hex::encode(hasher.finalize())
}

/// Build the colon-delimited string that gets signed.
pub fn canonical_string(
    method: &Method,
    relative_url: &str,
    access_token: &str,
    body: &[u8],
    timestamp: &Timestamp,
) -> String {
    format!(
        "{}:{}:{}:{}:{}",
        method.as_str(),
        relative_url,
        access_token,
        body_digest(body),
        timestamp
    )
}

/// HMAC-SHA256 signer keyed by the API secret.
#[derive(Clone)]
pub struct Signer {
    secret: SecretString,
}

impl Signer {
    /// Create a signer from the API secret.
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Sign an already-built canonical string, returning lowercase hex.
    pub fn sign_canonical(&self, canonical: &str) -> Result<String> {
        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .map_err(|e| Error::Config(format!("invalid API secret: {}", e)))?;
        mac.update(canonical.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Sign a request.
    pub fn sign(
        &self,
        method: &Method,
        relative_url: &str,
        access_token: &str,
        body: &[u8],
        timestamp: &Timestamp,
    ) -> Result<String> {
        let canonical = canonical_string(method, relative_url, access_token, body, timestamp);
        self.sign_canonical(&canonical)
    }
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "22a2d25e-765d-41e1-8d29-da68dcb5698b";
    const TOKEN: &str = "lIWOt2p29grUo59bedBUrBY3pnzqQX544LzYPohcGHOuwn8AUEdUKS";

    fn timestamp() -> Timestamp {
        let wib = FixedOffset::east_opt(7 * 3600).unwrap();
        Timestamp::from_datetime(&wib.with_ymd_and_hms(2016, 2, 3, 10, 0, 0).unwrap())
    }

    fn signer() -> Signer {
        Signer::new(SecretString::from(SECRET.to_string()))
    }

    #[test]
    fn test_empty_body_digest() {
        assert_eq!(
            body_digest(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_whitespace_does_not_change_digest() {
        let compact = body_digest(br#"{"A":"B"}"#);
        assert_eq!(compact, body_digest(br#"{"A": "B"}"#));
        assert_eq!(compact, body_digest(b"{\n\t\"A\" : \"B\"\r\n}"));
        assert_eq!(
            compact,
            "3a626e6971281ff760a11d519f3750b8ddb6f7d450b38fb0e52c7c5d231542f4"
        );
    }

    #[test]
    fn test_canonical_string_layout() {
        let canonical = canonical_string(
            &Method::GET,
            "/banking/v2/corporates/BCAAPI2016/accounts/0201245680",
            TOKEN,
            b"",
            &timestamp(),
        );
        assert_eq!(
            canonical,
            "GET:/banking/v2/corporates/BCAAPI2016/accounts/0201245680:\
             lIWOt2p29grUo59bedBUrBY3pnzqQX544LzYPohcGHOuwn8AUEdUKS:\
             e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855:\
             2016-02-03T10:00:00.000+07:00"
        );
    }

    #[test]
    fn test_get_signature_reference_value() {
        let signature = signer()
            .sign(
                &Method::GET,
                "/banking/v2/corporates/BCAAPI2016/accounts/0201245680",
                TOKEN,
                b"",
                &timestamp(),
            )
            .unwrap();
        assert_eq!(
            signature,
            "5c3233caca067a10df72060bdaf477f4da874103302516d7c46ad6461c6c4307"
        );
    }

    #[test]
    fn test_post_signature_reference_value() {
        let body = br#"{"CorporateID":"BCAAPI2016","SourceAccountNumber":"0201245680","TransactionID":"00000001","TransactionDate":"2016-01-30","ReferenceID":"12345/PO/2016","CurrencyCode":"IDR","Amount":"100000.00","BeneficiaryAccountNumber":"0201245681","Remark1":"Transfer Test","Remark2":"Online Transfer"}"#;
        let signature = signer()
            .sign(
                &Method::POST,
                "/banking/corporates/transfers",
                TOKEN,
                body,
                &timestamp(),
            )
            .unwrap();
        assert_eq!(
            signature,
            "69ad66589ade078a30922a0848725cf153aecfcca82eba94e3270285b4a9c604"
        );
    }

    #[test]
    fn test_timestamp_format() {
        let utc = Utc.with_ymd_and_hms(2024, 1, 5, 3, 4, 5).unwrap()
            + chrono::Duration::microseconds(123_456);
        assert_eq!(
            Timestamp::from_datetime(&utc).as_str(),
            "2024-01-05T03:04:05.123+00:00"
        );

        let now = Timestamp::now_in(FixedOffset::east_opt(7 * 3600).unwrap());
        assert_eq!(now.as_str().len(), "2016-02-03T10:00:00.000+07:00".len());
        assert!(now.as_str().ends_with("+07:00"));
    }

    #[test]
    fn test_signer_debug_redacts_secret() {
        let debug_str = format!("{:?}", signer());
        assert!(!debug_str.contains(SECRET));
        assert!(debug_str.contains("REDACTED"));
    }
}
