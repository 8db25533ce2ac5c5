//! Defines the crate level error type.
//!
//! The aggregation functions in [crate::dashboard] are total and never return
//! an error. Everything here comes from the edges: reading snapshots, the API
//! envelope, timezone lookup and serializing reports.

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The snapshot file could not be read.
    ///
    /// Callers should pass in the path of the snapshot and the original error
    /// as a string.
    #[error("could not read the snapshot \"{0}\": {1}")]
    SnapshotReadError(String, String),

    /// The snapshot was read but is neither an API response envelope nor a
    /// list of transactions.
    #[error("could not parse the snapshot: {0}")]
    InvalidSnapshot(String),

    /// The API response envelope reported a failure.
    ///
    /// The string is the message sent by the API, which is meant to be shown
    /// to the operator.
    #[error("the API reported a failure: {0}")]
    ApiFailure(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The refresh period was zero.
    #[error("the refresh period must be positive, got {0:?}")]
    InvalidRefreshPeriod(std::time::Duration),

    /// An error occurred while serializing a struct as JSON
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn api_failure_message_includes_api_text() {
        let error = Error::ApiFailure("rate limited".to_owned());

        assert_eq!(
            error.to_string(),
            "the API reported a failure: rate limited"
        );
    }

    #[test]
    fn invalid_refresh_period_shows_the_period() {
        let error = Error::InvalidRefreshPeriod(std::time::Duration::ZERO);

        assert_eq!(
            error.to_string(),
            "the refresh period must be positive, got 0ns"
        );
    }

    #[test]
    fn snapshot_read_error_names_the_path() {
        let error = Error::SnapshotReadError(
            "snapshots/today.json".to_owned(),
            "No such file or directory".to_owned(),
        );

        assert!(error.to_string().contains("\"snapshots/today.json\""));
    }
}
