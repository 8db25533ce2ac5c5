//! Per-transaction views: the amount timeline and the recent transactions list.

use rust_decimal::Decimal;
use serde::Serialize;
use time::OffsetDateTime;
use time_tz::{OffsetDateTimeExt, Tz};

use crate::{format::format_timestamp_label, transaction::TransactionRecord};

/// One transaction on the amount timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    /// When the transaction happened.
    #[serde(with = "time::serde::rfc3339")]
    pub occurred_at: OffsetDateTime,
    /// The local time formatted for chart axes, e.g. "Jan 15, 10:30 AM".
    pub label: String,
    /// The total amount of the transaction.
    pub amount: Decimal,
    /// The transaction type as sent by the API.
    #[serde(rename = "type")]
    pub transaction_type: String,
    /// The recipient's name, or "Unknown".
    pub recipient: String,
    /// The transaction reference.
    pub reference: String,
}

/// The figures shown alongside the amount timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineSummary {
    /// The sum of the amounts.
    pub total: Decimal,
    /// `total` divided by the number of points, zero when there are none.
    pub average: Decimal,
    /// The largest amount, `None` when there are no points.
    pub max: Option<Decimal>,
}

impl TimelineSummary {
    fn new(points: &[TimelinePoint]) -> Self {
        let total: Decimal = points.iter().map(|point| point.amount).sum();
        let average = if points.is_empty() {
            Decimal::ZERO
        } else {
            total / Decimal::from(points.len())
        };

        Self {
            total,
            average,
            max: points.iter().map(|point| point.amount).max(),
        }
    }
}

/// The amount of every transaction over time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmountTimeline {
    /// One point per transaction, oldest first.
    pub points: Vec<TimelinePoint>,
    /// Total, average and largest amount over `points`.
    pub summary: TimelineSummary,
}

/// Lists every transaction as a point in time, oldest first, with a summary
/// of the amounts.
///
/// Transactions with the same timestamp keep their input order.
pub fn amount_timeline(transactions: &[TransactionRecord], timezone: &Tz) -> AmountTimeline {
    let mut points: Vec<TimelinePoint> = transactions
        .iter()
        .map(|transaction| TimelinePoint {
            occurred_at: transaction.occurred_at,
            label: format_timestamp_label(transaction.occurred_at.to_timezone(timezone)),
            amount: transaction.total_amount,
            transaction_type: transaction.transaction_type.clone(),
            recipient: transaction.recipient_label().to_owned(),
            reference: transaction.reference.clone(),
        })
        .collect();

    points.sort_by_key(|point| point.occurred_at);

    AmountTimeline {
        summary: TimelineSummary::new(&points),
        points,
    }
}

/// The `count` most recent transactions, newest first.
pub fn recent_transactions(
    transactions: &[TransactionRecord],
    count: usize,
) -> Vec<&TransactionRecord> {
    let mut recent: Vec<&TransactionRecord> = transactions.iter().collect();
    recent.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
    recent.truncate(count);
    recent
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use time::macros::datetime;

    use crate::{
        dashboard::timeline::{amount_timeline, recent_transactions},
        timezone::get_timezone,
        transaction::TransactionRecord,
    };

    fn transactions() -> Vec<TransactionRecord> {
        vec![
            TransactionRecord::build("second", "Transfer", dec!(20), datetime!(2024-01-15 22:15 UTC))
                .recipient("Bob", "Bank", "1")
                .finalise(),
            TransactionRecord::build("first", "payment", dec!(10), datetime!(2024-01-14 09:00 UTC))
                .finalise(),
            TransactionRecord::build("third", "refund", dec!(5), datetime!(2024-01-16 12:00 UTC))
                .finalise(),
        ]
    }

    #[test]
    fn timeline_is_sorted_oldest_first() {
        let utc = get_timezone("UTC").unwrap();

        let points = amount_timeline(&transactions(), utc).points;

        let references: Vec<_> = points.iter().map(|point| point.reference.as_str()).collect();
        assert_eq!(references, vec!["first", "second", "third"]);
        assert_eq!(points[0].recipient, "Unknown");
        assert_eq!(points[1].amount, dec!(20));
        assert_eq!(points[1].transaction_type, "Transfer");
    }

    #[test]
    fn timeline_labels_use_local_time() {
        let auckland = get_timezone("Pacific/Auckland").unwrap();

        let points = amount_timeline(&transactions(), auckland).points;

        // 2024-01-15 22:15 UTC is 2024-01-16 11:15 in Auckland (UTC+13).
        assert_eq!(points[1].label, "Jan 16, 11:15 AM");
    }

    #[test]
    fn summarises_timeline_amounts() {
        let utc = get_timezone("UTC").unwrap();

        let summary = amount_timeline(&transactions(), utc).summary;

        assert_eq!(summary.total, dec!(35));
        assert_eq!(summary.average, dec!(35) / Decimal::from(3));
        assert_eq!(summary.max, Some(dec!(20)));
    }

    #[test]
    fn empty_timeline_has_zero_average_and_no_max() {
        let utc = get_timezone("UTC").unwrap();

        let timeline = amount_timeline(&[], utc);

        assert!(timeline.points.is_empty());
        assert_eq!(timeline.summary.total, Decimal::ZERO);
        assert_eq!(timeline.summary.average, Decimal::ZERO);
        assert_eq!(timeline.summary.max, None);
    }

    #[test]
    fn recent_transactions_are_newest_first() {
        let transactions = transactions();

        let recent = recent_transactions(&transactions, 2);

        let references: Vec<_> = recent.iter().map(|t| t.reference.as_str()).collect();
        assert_eq!(references, vec!["third", "second"]);
    }

    #[test]
    fn recent_transactions_handles_short_lists() {
        let transactions = transactions();

        assert_eq!(recent_transactions(&transactions, 10).len(), 3);
        assert!(recent_transactions(&[], 5).is_empty());
    }
}
