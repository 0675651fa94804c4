//! HTTP client and request plumbing for the BCA API.
//!
//! This module provides the main entry point [`BcaClient`], its
//! configuration, and the [`RelativeUrl`] builder used for every signed
//! request.
//!
//! # Example
//!
//! ```no_run
//! use bca_rs::{BcaClient, ClientConfig, Credentials, Environment};
//!
//! # async fn example() -> bca_rs::Result<()> {
//! let client = BcaClient::new(
//!     Credentials::new("api-key", "api-secret"),
//!     ClientConfig::default().with_environment(Environment::Sandbox),
//! )?;
//! client.sign_in("client-id", "client-secret").await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod relative_url;

pub use config::{ClientConfig, DEFAULT_ORIGIN};
pub use http::{BcaClient, OAUTH_TOKEN_PATH};
pub use relative_url::RelativeUrl;
pub(crate) use http::ClientInner;
