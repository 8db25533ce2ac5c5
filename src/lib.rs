//! Transaction Dashboard turns a snapshot of a transactions API into the
//! figures a dashboard shows.
//!
//! The core is a set of pure aggregation functions: headline metrics, counts
//! per transaction type, a recipient leaderboard and daily rollups per series.
//! Around it sit a snapshot loader, a report builder and a refresh scheduler
//! used by the `dashboard` binary.

#![warn(missing_docs)]

mod api;
mod config;
mod dashboard;
mod error;
mod format;
mod logging;
mod pagination;
mod refresh;
mod snapshot;
mod timezone;
mod transaction;

pub use api::{DEFAULT_FAILURE_MESSAGE, ResponseMeta, TransactionsResponse};
pub use config::Config;
pub use dashboard::{
    AmountTimeline, CHART_PALETTE, ChartDatum, DashboardReport, LeaderboardTotals, MetricsSummary,
    RECIPIENT_LABEL_LENGTH, RecipientAggregate, RecipientRanking, ReportOptions, RollupRow,
    SeriesAmounts, SeriesStyle, SummaryCards, TimelinePoint, TimelineSummary, TypeCounts,
    amounts_by_recipient_over_time, amounts_by_type_over_time, amount_timeline, build_report,
    calculate_metrics, capitalize_first, distinct_types, palette_color, percentage_of,
    prepare_chart_data, rank_recipients, recent_transactions, rollup_by_day, series_styles,
    series_total,
};
pub use error::Error;
pub use format::{
    currency_symbol, format_currency, format_day_label, format_percentage,
    format_timestamp_label, shorten_name,
};
pub use logging::{log_filter, setup_logging};
pub use pagination::PageInfo;
pub use refresh::{RefreshScheduler, RefreshTrigger, shutdown_signal};
pub use snapshot::{Snapshot, load_snapshot, parse_snapshot};
pub use timezone::{get_timezone, local_date};
pub use transaction::{TransactionBuilder, TransactionRecord, UNKNOWN_RECIPIENT};
