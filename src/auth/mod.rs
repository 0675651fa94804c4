//! Authentication and request signing for the BCA API.
//!
//! Two credential pairs are involved:
//!
//! 1. **API key / API secret** - the key is sent with every request, the
//!    secret keys the HMAC signature ([`Signer`]).
//! 2. **OAuth client id / client secret** - exchanged once for a bearer
//!    [`AccessToken`] by [`BcaClient::sign_in`](crate::BcaClient::sign_in).
//!
//! ```no_run
//! use bca_rs::{BcaClient, ClientConfig, Credentials};
//! use bca_rs::auth::SignIn;
//!
//! # async fn example() -> bca_rs::Result<()> {
//! let client = BcaClient::new(
//!     Credentials::new("api-key", "api-secret"),
//!     ClientConfig::default(),
//! )?;
//!
//! match client.sign_in("client-id", "client-secret").await? {
//!     SignIn::Authenticated(token) => println!("expires at {:?}", token.expires_at()),
//!     SignIn::UnexpectedResponse(body) => println!("no token in {}", body),
//! }
//! # Ok(())
//! # }
//! ```

mod session;
mod signature;

pub use session::{AccessToken, Credentials, Session, SignIn};
pub use signature::{body_digest, canonical_string, Signer, Timestamp};

pub(crate) use session::basic_authorization;
