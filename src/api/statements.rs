//! Account statement service.

use std::sync::Arc;

use crate::client::{ClientInner, RelativeUrl};
use crate::models::{AccountNumber, CorporateId, Statement};
use crate::Result;

use super::CORPORATES_V2_PATH;

/// Service for account statements.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: bca_rs::BcaClient) -> bca_rs::Result<()> {
/// use bca_rs::{AccountNumber, CorporateId};
///
/// let statement = client
///     .statements()
///     .get(
///         &CorporateId::new("BCAAPI2016"),
///         &AccountNumber::new("0201245680"),
///         "2016-08-29",
///         Some("2016-09-01"),
///     )
///     .await?;
/// for entry in &statement.data {
///     println!("{:?} {:?}", entry.transaction_type, entry.transaction_amount);
/// }
/// # Ok(())
/// # }
/// ```
pub struct StatementsService {
    inner: Arc<ClientInner>,
}

impl StatementsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the statement of an account for a date range.
    ///
    /// # Arguments
    ///
    /// * `corporate_id` - The corporate owning the account
    /// * `account` - The account to query
    /// * `start_date` - First day, formatted as the bank expects (`YYYY-MM-DD`)
    /// * `end_date` - Last day; defaults to `start_date`
    ///
    /// Dates are passed through unparsed.
    pub async fn get(
        &self,
        corporate_id: &CorporateId,
        account: &AccountNumber,
        start_date: &str,
        end_date: Option<&str>,
    ) -> Result<Statement> {
        let url = statement_url(corporate_id, account, start_date, end_date);
        self.inner.get(&url).await
    }
}

/// `/banking/v2/corporates/{c}/accounts/{a}/statements?EndDate={e}&StartDate={s}`
pub(crate) fn statement_url(
    corporate_id: &CorporateId,
    account: &AccountNumber,
    start_date: &str,
    end_date: Option<&str>,
) -> RelativeUrl {
    RelativeUrl::new(CORPORATES_V2_PATH)
        .segment(corporate_id)
        .segment("accounts")
        .segment(account)
        .segment("statements")
        .query("EndDate", end_date.unwrap_or(start_date))
        .query("StartDate", start_date)
}
