//! Builds every view-model the dashboard shows from one snapshot of transactions.

use rust_decimal::Decimal;
use serde::Serialize;
use time_tz::Tz;

use crate::{
    Error,
    dashboard::{
        aggregation::{
            ChartDatum, MetricsSummary, calculate_metrics, capitalize_first, prepare_chart_data,
        },
        cards::SummaryCards,
        charts::{SeriesStyle, series_styles},
        recipients::{RECIPIENT_LABEL_LENGTH, RecipientAggregate, rank_recipients},
        rollup::{
            RollupRow, amounts_by_recipient_over_time, amounts_by_type_over_time, series_total,
        },
        timeline::{AmountTimeline, amount_timeline, recent_transactions},
    },
    format::shorten_name,
    pagination::PageInfo,
    transaction::TransactionRecord,
};

/// The settings that shape a [DashboardReport].
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// The currency the summary cards are formatted in.
    pub currency_code: String,
    /// The number of recipients in the leaderboard.
    pub leaderboard_size: usize,
    /// The number of top recipients in the recipient rollup.
    pub rollup_recipients: usize,
    /// The number of transactions in the recent transactions list.
    pub recent_count: usize,
    /// The timezone that decides which day a transaction falls on.
    pub timezone: &'static Tz,
}

/// The summed amount and transaction count of the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardTotals {
    /// The summed total amounts of the listed recipients.
    pub amount: Decimal,
    /// The number of transactions sent to the listed recipients.
    pub transaction_count: usize,
}

/// Everything the dashboard displays, derived from one list of transactions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    /// Headline figures.
    pub summary: MetricsSummary,
    /// The headline figures formatted for the summary cards.
    pub cards: SummaryCards,
    /// Counts and shares per transaction type.
    pub chart_data: Vec<ChartDatum>,
    /// Labels and colours for the transaction type series.
    pub type_series: Vec<SeriesStyle>,
    /// The top recipients by total amount.
    pub recipient_leaderboard: Vec<RecipientAggregate>,
    /// The totals over [DashboardReport::recipient_leaderboard].
    pub leaderboard_totals: LeaderboardTotals,
    /// Labels and colours for the recipient rollup series.
    pub recipient_series: Vec<SeriesStyle>,
    /// Daily amounts per transaction type.
    pub amounts_by_type: Vec<RollupRow>,
    /// Daily amounts for the top recipients.
    pub amounts_by_recipient: Vec<RollupRow>,
    /// The total amount included in [DashboardReport::amounts_by_recipient].
    pub recipient_rollup_total: Decimal,
    /// Every transaction as a point in time, with total, average and largest amount.
    pub timeline: AmountTimeline,
    /// The most recent transactions, newest first.
    pub recent_transactions: Vec<TransactionRecord>,
    /// Where the snapshot sits in the API's paginated list, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageInfo>,
}

impl DashboardReport {
    /// Attach the pagination details of the snapshot the report was built from.
    pub fn with_page(mut self, page: Option<PageInfo>) -> Self {
        self.page = page;
        self
    }

    /// Serialize the report as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [Error::JSONSerializationError] if serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
            .map_err(|error| Error::JSONSerializationError(error.to_string()))
    }
}

/// Derives every dashboard view-model from `transactions`.
///
/// This is a pure function of its inputs: call it again with a new snapshot
/// instead of updating an old report.
pub fn build_report(
    transactions: &[TransactionRecord],
    options: &ReportOptions,
) -> DashboardReport {
    let summary = calculate_metrics(transactions);
    let chart_data = prepare_chart_data(&summary.counts_by_type, summary.total_count);
    let type_series = series_styles(summary.counts_by_type.types(), capitalize_first);

    let ranking = rank_recipients(transactions);
    let (leaderboard_amount, leaderboard_count) = ranking.totals(options.leaderboard_size);
    let top_recipients = ranking.top_names(options.rollup_recipients);
    let recipient_series = series_styles(top_recipients.iter().map(String::as_str), |name| {
        shorten_name(name, RECIPIENT_LABEL_LENGTH)
    });

    let amounts_by_type = amounts_by_type_over_time(transactions, options.timezone);
    let amounts_by_recipient =
        amounts_by_recipient_over_time(transactions, &top_recipients, options.timezone);
    let recipient_rollup_total = series_total(transactions, &top_recipients, |transaction| {
        transaction.recipient_label().to_owned()
    });

    tracing::debug!(
        "Built dashboard report: {} transactions, {} types, {} recipients, {} days",
        summary.total_count,
        summary.counts_by_type.len(),
        ranking.len(),
        amounts_by_type.len()
    );

    DashboardReport {
        cards: SummaryCards::new(&summary, &options.currency_code),
        summary,
        chart_data,
        type_series,
        recipient_leaderboard: ranking.top(options.leaderboard_size).to_vec(),
        leaderboard_totals: LeaderboardTotals {
            amount: leaderboard_amount,
            transaction_count: leaderboard_count,
        },
        recipient_series,
        amounts_by_type,
        amounts_by_recipient,
        recipient_rollup_total,
        timeline: amount_timeline(transactions, options.timezone),
        recent_transactions: recent_transactions(transactions, options.recent_count)
            .into_iter()
            .cloned()
            .collect(),
        page: None,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use time::{OffsetDateTime, macros::datetime};

    use crate::{
        dashboard::report::{ReportOptions, build_report},
        timezone::get_timezone,
        transaction::TransactionRecord,
    };

    fn options() -> ReportOptions {
        ReportOptions {
            currency_code: "USD".to_owned(),
            leaderboard_size: 2,
            rollup_recipients: 1,
            recent_count: 2,
            timezone: get_timezone("UTC").unwrap(),
        }
    }

    fn create_test_transaction(
        transaction_type: &str,
        recipient: &str,
        total: Decimal,
        occurred_at: OffsetDateTime,
    ) -> TransactionRecord {
        TransactionRecord::build("ref", transaction_type, total, occurred_at)
            .recipient(recipient, "Bank", "000")
            .finalise()
    }

    fn transactions() -> Vec<TransactionRecord> {
        vec![
            create_test_transaction("transfer", "Alice", dec!(100), datetime!(2024-01-15 09:00 UTC)),
            create_test_transaction("transfer", "Bob", dec!(200), datetime!(2024-01-16 09:00 UTC)),
            create_test_transaction("payment", "Carol", dec!(50), datetime!(2024-01-16 10:00 UTC)),
        ]
    }

    #[test]
    fn builds_every_section() {
        let report = build_report(&transactions(), &options());

        assert_eq!(report.summary.total_volume, dec!(350));
        assert_eq!(report.cards.total_volume, "$350.00");
        assert_eq!(report.chart_data.len(), 2);
        assert_eq!(report.type_series[0].label, "Transfer");

        let leaders: Vec<_> = report
            .recipient_leaderboard
            .iter()
            .map(|recipient| recipient.name.as_str())
            .collect();
        assert_eq!(leaders, vec!["Bob", "Alice"]);
        assert_eq!(report.leaderboard_totals.amount, dec!(300));
        assert_eq!(report.leaderboard_totals.transaction_count, 2);

        assert_eq!(report.recipient_series.len(), 1);
        assert_eq!(report.recipient_series[0].key, "Bob");
        assert_eq!(report.recipient_series[0].label, "Bob");
        assert_eq!(report.amounts_by_recipient.len(), 1);
        assert_eq!(report.recipient_rollup_total, dec!(200));

        assert_eq!(report.amounts_by_type.len(), 2);
        assert_eq!(report.timeline.points.len(), 3);
        assert_eq!(report.timeline.summary.total, dec!(350));
        assert_eq!(report.timeline.summary.max, Some(dec!(200)));
        assert_eq!(report.recent_transactions.len(), 2);
        assert!(report.page.is_none());
    }

    #[test]
    fn long_recipient_names_are_shortened_in_series_labels() {
        let transactions = vec![create_test_transaction(
            "transfer",
            "International Widgets Incorporated",
            dec!(10),
            datetime!(2024-01-15 09:00 UTC),
        )];

        let report = build_report(&transactions, &options());

        assert_eq!(
            report.recipient_series[0].key,
            "International Widgets Incorporated"
        );
        assert_eq!(report.recipient_series[0].label, "International Wid...");
    }

    #[test]
    fn empty_snapshot_builds_empty_report() {
        let report = build_report(&[], &options());

        assert_eq!(report.summary.total_count, 0);
        assert!(report.chart_data.is_empty());
        assert!(report.recipient_leaderboard.is_empty());
        assert!(report.amounts_by_type.is_empty());
        assert!(report.amounts_by_recipient.is_empty());
        assert_eq!(report.recipient_rollup_total, Decimal::ZERO);
    }

    #[test]
    fn report_serializes_to_json() {
        let report = build_report(&transactions(), &options());

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["summary"]["totalCount"], 3);
        assert_eq!(json["summary"]["countsByType"]["transfer"], 2);
        assert_eq!(json["chartData"][0]["type"], "Transfer");
        assert_eq!(json["chartData"][0]["percentage"], "66.7");
        assert!(json.get("page").is_none());
    }
}
