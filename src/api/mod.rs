//! API service modules for BCA endpoints.
//!
//! Each service signs and sends requests for one group of endpoints
//! through the client's shared session.

mod balances;
mod statements;
mod transfers;

pub use balances::{BalancesService, MAX_BALANCE_ACCOUNTS};
pub use statements::StatementsService;
pub use transfers::{TransfersService, TRANSFERS_PATH};

/// Root of the versioned corporate banking paths.
pub(crate) const CORPORATES_V2_PATH: &str = "/banking/v2/corporates";
