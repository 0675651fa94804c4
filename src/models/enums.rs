//! Enumeration types for the BCA API.

use serde::{Deserialize, Serialize};

/// Direction of a statement entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransactionType {
    /// Money leaving the account
    #[serde(rename = "D")]
    Debit,
    /// Money entering the account
    #[serde(rename = "C")]
    Credit,
    /// Unknown or missing transaction type
    #[default]
    #[serde(other)]
    Unknown,
}

impl TransactionType {
    /// Returns `true` for debit entries.
    pub fn is_debit(&self) -> bool {
        matches!(self, TransactionType::Debit)
    }
}

/// Outcome reported for a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransferStatus {
    /// Funds were moved
    Success,
    /// Any other status string, or none
    #[default]
    #[serde(other)]
    Unknown,
}
