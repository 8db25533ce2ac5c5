//! Dashboard module
//!
//! Derives the dashboard's summaries, chart data, recipient rankings and daily
//! rollups from a snapshot of transactions. Everything here is a pure function
//! of its inputs.

mod aggregation;
mod cards;
mod charts;
mod recipients;
mod report;
mod rollup;
mod timeline;

pub use aggregation::{
    ChartDatum, MetricsSummary, TypeCounts, calculate_metrics, capitalize_first, percentage_of,
    prepare_chart_data,
};
pub use cards::SummaryCards;
pub use charts::{CHART_PALETTE, SeriesStyle, palette_color, series_styles};
pub use recipients::{
    RECIPIENT_LABEL_LENGTH, RecipientAggregate, RecipientRanking, rank_recipients,
};
pub use report::{DashboardReport, LeaderboardTotals, ReportOptions, build_report};
pub use rollup::{
    RollupRow, SeriesAmounts, amounts_by_recipient_over_time, amounts_by_type_over_time,
    distinct_types, rollup_by_day, series_total,
};
pub use timeline::{
    AmountTimeline, TimelinePoint, TimelineSummary, amount_timeline, recent_transactions,
};
