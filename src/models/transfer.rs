//! Fund transfer models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::enums::TransferStatus;
use super::primitives::{AccountNumber, CorporateId};

/// Default currency for transfers.
pub const DEFAULT_CURRENCY_CODE: &str = "IDR";

/// A fund transfer request.
///
/// Field order is the wire order. Remarks are left out of the JSON body
/// entirely when absent. Use [`TransferRequestBuilder`] to construct one.
///
/// # Example
///
/// ```
/// use bca_rs::models::TransferRequestBuilder;
/// use rust_decimal_macros::dec;
///
/// let request = TransferRequestBuilder::new()
///     .corporate_id("BCAAPI2016")
///     .source_account("0201245680")
///     .beneficiary_account("0201245681")
///     .transaction_id("00000001")
///     .transaction_date("2016-01-30")
///     .reference_id("12345/PO/2016")
///     .amount(dec!(100000.00))
///     .remark1("Transfer Test")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.currency_code, "IDR");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Corporate performing the transfer
    #[serde(rename = "CorporateID")]
    pub corporate_id: CorporateId,
    /// Account to debit
    #[serde(rename = "SourceAccountNumber")]
    pub source_account_number: AccountNumber,
    /// Caller-assigned transaction ID
    #[serde(rename = "TransactionID")]
    pub transaction_id: String,
    /// Transaction date, passed through as given
    #[serde(rename = "TransactionDate")]
    pub transaction_date: String,
    /// Caller-assigned reference ID
    #[serde(rename = "ReferenceID")]
    pub reference_id: String,
    /// ISO currency code
    #[serde(rename = "CurrencyCode")]
    pub currency_code: String,
    /// Amount, sent as a decimal string
    #[serde(rename = "Amount")]
    pub amount: Decimal,
    /// Account to credit
    #[serde(rename = "BeneficiaryAccountNumber")]
    pub beneficiary_account_number: AccountNumber,
    /// First remark line
    #[serde(rename = "Remark1", default, skip_serializing_if = "is_blank")]
    pub remark1: Option<String>,
    /// Second remark line
    #[serde(rename = "Remark2", default, skip_serializing_if = "is_blank")]
    pub remark2: Option<String>,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

/// Builder for [`TransferRequest`] with validation.
#[derive(Debug, Default, Clone)]
pub struct TransferRequestBuilder {
    corporate_id: Option<CorporateId>,
    source_account_number: Option<AccountNumber>,
    beneficiary_account_number: Option<AccountNumber>,
    transaction_id: Option<String>,
    transaction_date: Option<String>,
    reference_id: Option<String>,
    amount: Option<Decimal>,
    currency_code: Option<String>,
    remark1: Option<String>,
    remark2: Option<String>,
}

impl TransferRequestBuilder {
    /// Create a new transfer builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the corporate ID.
    pub fn corporate_id(mut self, id: impl Into<CorporateId>) -> Self {
        self.corporate_id = Some(id.into());
        self
    }

    /// Set the account to debit.
    pub fn source_account(mut self, account: impl Into<AccountNumber>) -> Self {
        self.source_account_number = Some(account.into());
        self
    }

    /// Set the account to credit.
    pub fn beneficiary_account(mut self, account: impl Into<AccountNumber>) -> Self {
        self.beneficiary_account_number = Some(account.into());
        self
    }

    /// Set the transaction ID.
    pub fn transaction_id(mut self, id: impl Into<String>) -> Self {
        self.transaction_id = Some(id.into());
        self
    }

    /// Set the transaction date. The value is not parsed.
    pub fn transaction_date(mut self, date: impl Into<String>) -> Self {
        self.transaction_date = Some(date.into());
        self
    }

    /// Set the reference ID.
    pub fn reference_id(mut self, id: impl Into<String>) -> Self {
        self.reference_id = Some(id.into());
        self
    }

    /// Set the amount.
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set the currency code. Defaults to `IDR`.
    pub fn currency_code(mut self, code: impl Into<String>) -> Self {
        self.currency_code = Some(code.into());
        self
    }

    /// Set the first remark line.
    pub fn remark1(mut self, remark: impl Into<String>) -> Self {
        self.remark1 = Some(remark.into());
        self
    }

    /// Set the second remark line.
    pub fn remark2(mut self, remark: impl Into<String>) -> Self {
        self.remark2 = Some(remark.into());
        self
    }

    /// Build the request, checking that every required field is set.
    pub fn build(self) -> crate::Result<TransferRequest> {
        fn required<T>(value: Option<T>, name: &str) -> crate::Result<T> {
            value.ok_or_else(|| crate::Error::Validation(format!("{} is required", name)))
        }

        Ok(TransferRequest {
            corporate_id: required(self.corporate_id, "corporate_id")?,
            source_account_number: required(self.source_account_number, "source_account")?,
            transaction_id: required(self.transaction_id, "transaction_id")?,
            transaction_date: required(self.transaction_date, "transaction_date")?,
            reference_id: required(self.reference_id, "reference_id")?,
            currency_code: self
                .currency_code
                .unwrap_or_else(|| DEFAULT_CURRENCY_CODE.to_string()),
            amount: required(self.amount, "amount")?,
            beneficiary_account_number: required(
                self.beneficiary_account_number,
                "beneficiary_account",
            )?,
            remark1: self.remark1.filter(|r| !r.is_empty()),
            remark2: self.remark2.filter(|r| !r.is_empty()),
        })
    }
}

/// Bank acknowledgement of a transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferReceipt {
    /// Transaction ID echoed back
    #[serde(rename = "TransactionID", default)]
    pub transaction_id: Option<String>,
    /// Transaction date echoed back
    #[serde(rename = "TransactionDate", default)]
    pub transaction_date: Option<String>,
    /// Reference ID echoed back
    #[serde(rename = "ReferenceID", default)]
    pub reference_id: Option<String>,
    /// Transfer status
    #[serde(rename = "Status", default)]
    pub status: TransferStatus,
    /// Fields not modelled above, kept as sent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TransferReceipt {
    /// Returns `true` if the bank reported success.
    pub fn is_success(&self) -> bool {
        matches!(self.status, TransferStatus::Success)
    }
}
