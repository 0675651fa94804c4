//! Data models for the BCA API.
//!
//! - [`primitives`] - identifiers and the [`Environment`] selector
//! - [`enums`] - transaction and transfer status codes
//! - [`balance`] - balance inquiry results
//! - [`statement`] - account statements
//! - [`transfer`] - transfer requests and receipts

pub mod primitives;
pub mod enums;
pub mod balance;
pub mod statement;
pub mod transfer;

pub use primitives::*;
pub use enums::*;
pub use balance::*;
pub use statement::*;
pub use transfer::*;
