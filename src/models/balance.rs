//! Balance inquiry models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result of a balance inquiry.
///
/// The bank reports partial failure in-band: accounts it could read are in
/// [`account_detail_data_success`](Self::account_detail_data_success), the
/// rest in [`account_detail_data_failed`](Self::account_detail_data_failed),
/// and the HTTP status is still 2xx.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BalanceInquiry {
    /// Accounts whose balance was returned
    #[serde(default)]
    pub account_detail_data_success: Vec<AccountDetail>,
    /// Accounts the bank rejected
    #[serde(default)]
    pub account_detail_data_failed: Vec<AccountFailure>,
    /// Fields not modelled above, kept as sent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BalanceInquiry {
    /// Returns `true` if at least one account was rejected.
    pub fn has_failures(&self) -> bool {
        !self.account_detail_data_failed.is_empty()
    }

    /// Find the balance record for an account number.
    pub fn find(&self, account_number: &str) -> Option<&AccountDetail> {
        self.account_detail_data_success
            .iter()
            .find(|d| d.account_number == account_number)
    }
}

/// Balance of a single account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountDetail {
    /// Account number
    #[serde(default)]
    pub account_number: String,
    /// ISO currency code
    #[serde(default)]
    pub currency: Option<String>,
    /// Ledger balance
    #[serde(default)]
    pub balance: Option<Decimal>,
    /// Balance available for use
    #[serde(default)]
    pub available_balance: Option<Decimal>,
    /// Float amount
    #[serde(default)]
    pub float_amount: Option<Decimal>,
    /// Amount on hold
    #[serde(default)]
    pub hold_amount: Option<Decimal>,
    /// Credit limit
    #[serde(default)]
    pub plafon: Option<Decimal>,
    /// Fields not modelled above, kept as sent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An account the bank could not report on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountFailure {
    /// Account number as submitted
    #[serde(default)]
    pub account_number: Option<String>,
    /// English reason
    #[serde(default)]
    pub english: Option<String>,
    /// Indonesian reason
    #[serde(default)]
    pub indonesian: Option<String>,
    /// Fields not modelled above, kept as sent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
