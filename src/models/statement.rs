//! Account statement models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::enums::TransactionType;

/// Account statement for a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    /// First day of the range, as echoed by the bank
    #[serde(default)]
    pub start_date: Option<String>,
    /// Last day of the range
    #[serde(default)]
    pub end_date: Option<String>,
    /// ISO currency code
    #[serde(default)]
    pub currency: Option<String>,
    /// Balance at the start of the range
    #[serde(default)]
    pub start_balance: Option<Decimal>,
    /// Statement entries
    #[serde(default)]
    pub data: Vec<StatementEntry>,
    /// Fields not modelled above, kept as sent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Statement {
    /// Sum of credit entries minus sum of debit entries.
    pub fn net_movement(&self) -> Decimal {
        self.data.iter().fold(Decimal::ZERO, |acc, entry| {
            let amount = entry.transaction_amount.unwrap_or_default();
            match entry.transaction_type {
                TransactionType::Credit => acc + amount,
                TransactionType::Debit => acc - amount,
                TransactionType::Unknown => acc,
            }
        })
    }
}

/// A single statement line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatementEntry {
    /// Posting date, or `PEND` for pending entries
    #[serde(default)]
    pub transaction_date: Option<String>,
    /// Branch code
    #[serde(default)]
    pub branch_code: Option<String>,
    /// Debit or credit
    #[serde(default)]
    pub transaction_type: TransactionType,
    /// Amount
    #[serde(default)]
    pub transaction_amount: Option<Decimal>,
    /// Short description
    #[serde(default)]
    pub transaction_name: Option<String>,
    /// Free-form trailer text
    #[serde(default)]
    pub trailer: Option<String>,
    /// Fields not modelled above, kept as sent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StatementEntry {
    /// Returns `true` if the entry has not been posted yet.
    pub fn is_pending(&self) -> bool {
        self.transaction_date.as_deref() == Some("PEND")
    }
}
