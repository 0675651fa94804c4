//! Balance inquiry service.

use std::sync::Arc;

use crate::client::{ClientInner, RelativeUrl};
use crate::error::MAX_ACCOUNTS_MESSAGE;
use crate::models::{AccountNumber, BalanceInquiry, CorporateId};
use crate::{Error, Result};

use super::CORPORATES_V2_PATH;

/// Most accounts one inquiry may cover.
pub const MAX_BALANCE_ACCOUNTS: usize = 20;

/// Service for balance inquiries.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: bca_rs::BcaClient) -> bca_rs::Result<()> {
/// use bca_rs::{AccountNumber, CorporateId};
///
/// let corporate = CorporateId::new("BCAAPI2016");
/// let accounts = [
///     AccountNumber::new("0201245680"),
///     AccountNumber::new("0063001004"),
/// ];
///
/// let inquiry = client.balances().get(&corporate, &accounts).await?;
/// for detail in &inquiry.account_detail_data_success {
///     println!("{}: {:?}", detail.account_number, detail.balance);
/// }
/// for failed in &inquiry.account_detail_data_failed {
///     println!("{:?}: {:?}", failed.account_number, failed.english);
/// }
/// # Ok(())
/// # }
/// ```
pub struct BalancesService {
    inner: Arc<ClientInner>,
}

impl BalancesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get balances for up to 20 accounts in one call.
    ///
    /// Accounts the bank cannot read are reported in
    /// [`BalanceInquiry::account_detail_data_failed`], not as an error.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] before any request is sent if `accounts` is
    /// empty or longer than [`MAX_BALANCE_ACCOUNTS`].
    pub async fn get(
        &self,
        corporate_id: &CorporateId,
        accounts: &[AccountNumber],
    ) -> Result<BalanceInquiry> {
        let url = balance_url(corporate_id, accounts)?;
        self.inner.get(&url).await
    }

    /// Get the balance of a single account.
    pub async fn get_one(
        &self,
        corporate_id: &CorporateId,
        account: &AccountNumber,
    ) -> Result<BalanceInquiry> {
        self.get(corporate_id, std::slice::from_ref(account)).await
    }
}

/// `/banking/v2/corporates/{corporate_id}/accounts/{a1%2Ca2...}`
pub(crate) fn balance_url(
    corporate_id: &CorporateId,
    accounts: &[AccountNumber],
) -> Result<RelativeUrl> {
    if accounts.len() > MAX_BALANCE_ACCOUNTS {
        return Err(Error::Validation(MAX_ACCOUNTS_MESSAGE.to_string()));
    }
    if accounts.is_empty() {
        return Err(Error::Validation(
            "At least one account number is required".to_string(),
        ));
    }

    Ok(RelativeUrl::new(CORPORATES_V2_PATH)
        .segment(corporate_id)
        .segment("accounts")
        .list_segment(accounts))
}
