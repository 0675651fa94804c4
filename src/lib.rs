//! # bca-rs
//!
//! An async Rust client for the BCA corporate banking API.
//!
//! ## Features
//!
//! - **Authentication**: OAuth client-credentials sign-in
//! - **Request signing**: HMAC-SHA256 over a canonical string per request
//! - **Balance inquiry**: up to 20 accounts per call, partial failures in-band
//! - **Statements**: account history for a date range
//! - **Transfers**: fund transfer with a deterministic, signed JSON body
//! - **Typed errors**: validation, remote and transport failures are distinct
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bca_rs::{AccountNumber, BcaClient, ClientConfig, CorporateId, Credentials};
//! use bca_rs::auth::SignIn;
//!
//! #[tokio::main]
//! async fn main() -> bca_rs::Result<()> {
//!     let client = BcaClient::new(
//!         Credentials::new("api-key", "api-secret"),
//!         ClientConfig::default(),
//!     )?;
//!
//!     if let SignIn::UnexpectedResponse(body) = client.sign_in("client-id", "client-secret").await? {
//!         eprintln!("Token endpoint returned no token: {}", body);
//!         return Ok(());
//!     }
//!
//!     let corporate = CorporateId::new("BCAAPI2016");
//!     let inquiry = client
//!         .balances()
//!         .get(&corporate, &[AccountNumber::new("0201245680"), AccountNumber::new("0063001004")])
//!         .await?;
//!
//!     for detail in &inquiry.account_detail_data_success {
//!         println!("{}: {:?}", detail.account_number, detail.available_balance);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! ```rust,no_run
//! # async fn example(client: bca_rs::BcaClient) {
//! use bca_rs::Error;
//!
//! match client.sign_in("wrong-id", "wrong-secret").await {
//!     Ok(_) => {}
//!     Err(Error::Remote { message, .. }) => eprintln!("Bank said: {}", message),
//!     Err(Error::Transport { .. }) => eprintln!("Network problem"),
//!     Err(other) => eprintln!("{}", other),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{Error, Result};
pub use models::{AccountNumber, CorporateId, Environment};
pub use client::{BcaClient, ClientConfig, RelativeUrl};
pub use auth::{Credentials, Session, SignIn};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bca_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        AccountNumber, CorporateId, Environment,
        // Enums
        TransactionType, TransferStatus,
        // Responses
        AccountDetail, AccountFailure, BalanceInquiry, Statement, StatementEntry,
        TransferReceipt,
        // Requests
        TransferRequest, TransferRequestBuilder,
    };
    pub use crate::client::{BcaClient, ClientConfig, RelativeUrl};
    pub use crate::auth::{AccessToken, Credentials, Session, SignIn};
}
