//! Command line configuration for the dashboard.

use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::{Error, dashboard::ReportOptions, timezone::get_timezone};

/// Summarises a snapshot of the transactions API as a JSON dashboard report.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// File path to a JSON snapshot of the transactions API's list response.
    #[arg(long)]
    pub snapshot: PathBuf,

    /// The canonical timezone name, e.g. "Pacific/Auckland", used to decide
    /// which day a transaction falls on.
    #[arg(long, default_value = "UTC")]
    pub timezone: String,

    /// The ISO 4217 code of the currency amounts are shown in.
    #[arg(long, default_value = "USD")]
    pub currency: String,

    /// The number of recipients in the leaderboard.
    #[arg(long, default_value_t = 10)]
    pub leaderboard_size: usize,

    /// The number of top recipients shown in the daily recipient rollup.
    #[arg(long, default_value_t = 5)]
    pub rollup_recipients: usize,

    /// The number of transactions in the recent transactions list.
    #[arg(long, default_value_t = 10)]
    pub recent: usize,

    /// Seconds between refreshes in watch mode.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub refresh_secs: u64,

    /// Keep running and print a new report every refresh.
    #[arg(long)]
    pub watch: bool,

    /// The log level used when `RUST_LOG` is not set.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// The time between refreshes in watch mode.
    pub fn refresh_period(&self) -> Duration {
        Duration::from_secs(self.refresh_secs)
    }

    /// The settings for building reports.
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `timezone` is not a known
    /// canonical timezone name.
    pub fn report_options(&self) -> Result<ReportOptions, Error> {
        Ok(ReportOptions {
            currency_code: self.currency.to_uppercase(),
            leaderboard_size: self.leaderboard_size,
            rollup_recipients: self.rollup_recipients,
            recent_count: self.recent,
            timezone: get_timezone(&self.timezone)?,
        })
    }
}
