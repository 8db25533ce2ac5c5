//! Sets up `tracing` for the dashboard binary.
//!
//! Logs go to stderr so that stdout only carries the JSON report.

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Creates the log filter: `RUST_LOG` if it is set and valid, otherwise `default_level`.
pub fn log_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Installs the global subscriber.
///
/// Call this once at the start of `main`.
pub fn setup_logging(default_level: &str) {
    let stderr_log = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(log_filter(default_level)))
        .init();
}

#[cfg(test)]
mod tests {
    use crate::logging::log_filter;

    #[test]
    fn falls_back_to_default_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }

        let filter = log_filter("debug");

        assert_eq!(filter.to_string(), "debug");
    }
}
