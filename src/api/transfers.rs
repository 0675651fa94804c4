//! Fund transfer service.

use std::sync::Arc;

use crate::client::{ClientInner, RelativeUrl};
use crate::models::{TransferReceipt, TransferRequest};
use crate::Result;

/// Transfer endpoint.
pub const TRANSFERS_PATH: &str = "/banking/corporates/transfers";

/// Service for fund transfers.
///
/// The client performs no retry or de-duplication; uniqueness of
/// `TransactionID` and `ReferenceID` is enforced by the bank only.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: bca_rs::BcaClient) -> bca_rs::Result<()> {
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
///     .build()?;
///
/// let receipt = client.transfers().transfer(&request).await?;
/// println!("{:?}", receipt.status);
/// # Ok(())
/// # }
/// ```
pub struct TransfersService {
    inner: Arc<ClientInner>,
}

impl TransfersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Transfer funds between accounts.
    ///
    /// The body is serialized once in compact form; the same bytes are
    /// hashed into the signature and sent.
    pub async fn transfer(&self, request: &TransferRequest) -> Result<TransferReceipt> {
        tracing::info!(
            transaction_id = %request.transaction_id,
            reference_id = %request.reference_id,
            "Submitting transfer"
        );
        self.inner
            .post(&RelativeUrl::new(TRANSFERS_PATH), request)
            .await
    }
}
