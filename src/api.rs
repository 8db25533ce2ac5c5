//! The response envelope the transactions API wraps its list in.

use serde::{Deserialize, Serialize};

use crate::{Error, transaction::TransactionRecord};

/// The message used when the API reports a failure without one.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to fetch dashboard data";

/// Pagination details for a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// The number of transactions across all pages.
    pub total: u64,
    /// The page size used for the request.
    pub limit: u64,
    /// The offset of the first transaction in `data`.
    pub offset: u64,
}

/// The body of the API's transaction list response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionsResponse {
    /// Whether the API could produce the list.
    pub success: bool,
    /// The transactions, absent on failure.
    #[serde(default)]
    pub data: Vec<TransactionRecord>,
    /// A human readable explanation, usually only set on failure.
    #[serde(default)]
    pub message: Option<String>,
    /// Pagination details.
    #[serde(default)]
    pub meta: Option<ResponseMeta>,
    /// When the API produced the response.
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl TransactionsResponse {
    /// Unwraps the transactions from a successful response.
    ///
    /// # Errors
    /// Returns [Error::ApiFailure] with the API's message if `success` is false.
    pub fn into_transactions(self) -> Result<Vec<TransactionRecord>, Error> {
        if self.success {
            return Ok(self.data);
        }

        let message = self
            .message
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_owned());

        Err(Error::ApiFailure(message))
    }
}
