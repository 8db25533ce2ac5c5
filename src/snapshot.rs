//! Loads a snapshot of the transactions API's list response from disk.

use std::{fs, path::Path};

use crate::{
    Error,
    api::{ResponseMeta, TransactionsResponse},
    pagination::PageInfo,
    transaction::TransactionRecord,
};

/// The transactions read from one snapshot file.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// The transactions in the order the API listed them.
    pub transactions: Vec<TransactionRecord>,
    /// The pagination details, if the snapshot was a full API response.
    pub meta: Option<ResponseMeta>,
}

impl Snapshot {
    /// The page details of the snapshot, if known.
    pub fn page_info(&self) -> Option<PageInfo> {
        self.meta.as_ref().map(PageInfo::from_meta)
    }
}

/// Parses a snapshot from JSON text.
///
/// The text may be the API's response envelope or a bare array of transactions.
/// Text starting with `[` is parsed as an array, anything else as an envelope,
/// so a parse error names the field and position that failed.
///
/// # Errors
/// Returns [Error::InvalidSnapshot] if the text is neither, or
/// [Error::ApiFailure] if the envelope reports a failed request.
pub fn parse_snapshot(text: &str) -> Result<Snapshot, Error> {
    let invalid_snapshot = |error: serde_json::Error| Error::InvalidSnapshot(error.to_string());

    if text.trim_start().starts_with('[') {
        let transactions: Vec<TransactionRecord> =
            serde_json::from_str(text).map_err(invalid_snapshot)?;

        return Ok(Snapshot {
            transactions,
            meta: None,
        });
    }

    let response: TransactionsResponse = serde_json::from_str(text).map_err(invalid_snapshot)?;
    let meta = response.meta;
    let transactions = response.into_transactions()?;

    Ok(Snapshot { transactions, meta })
}

/// Reads and parses the snapshot at `path`.
///
/// # Errors
/// Returns [Error::SnapshotReadError] if the file cannot be read, otherwise
/// the errors of [parse_snapshot].
pub fn load_snapshot(path: &Path) -> Result<Snapshot, Error> {
    let text = fs::read_to_string(path)
        .map_err(|error| Error::SnapshotReadError(path.display().to_string(), error.to_string()))?;

    let snapshot = parse_snapshot(&text).inspect_err(|error| {
        tracing::error!("Could not load snapshot {}: {error}", path.display());
    })?;

    tracing::info!(
        "Loaded {} transactions from {}",
        snapshot.transactions.len(),
        path.display()
    );

    Ok(snapshot)
}
