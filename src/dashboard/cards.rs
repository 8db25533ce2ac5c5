//! Values for the summary cards at the top of the dashboard.

use serde::Serialize;

use crate::{dashboard::aggregation::MetricsSummary, format::format_currency};

/// The formatted text for each summary card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCards {
    /// "Total Transaction Volume"
    pub total_volume: String,
    /// "Total Transactions"
    pub total_transactions: String,
    /// "Average Transaction"
    pub average_transaction: String,
    /// "Total Fees Collected"
    pub total_fees: String,
    /// "Active Transactions"
    pub active_transactions: String,
}

impl SummaryCards {
    /// Formats `metrics` with amounts shown in `currency_code`.
    pub fn new(metrics: &MetricsSummary, currency_code: &str) -> Self {
        Self {
            total_volume: format_currency(metrics.total_volume, currency_code),
            total_transactions: metrics.total_count.to_string(),
            average_transaction: format_currency(metrics.average_value, currency_code),
            total_fees: format_currency(metrics.total_fees, currency_code),
            active_transactions: format!("{} of {}", metrics.active_count, metrics.total_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use time::macros::datetime;

    use crate::{
        dashboard::{aggregation::calculate_metrics, cards::SummaryCards},
        transaction::TransactionRecord,
    };

    #[test]
    fn formats_metrics_in_currency() {
        let transactions = vec![
            TransactionRecord::build("a", "transfer", dec!(1000), datetime!(2024-01-15 10:00 UTC))
                .external_fee(dec!(10))
                .finalise(),
            TransactionRecord::build("b", "payment", dec!(490), datetime!(2024-01-15 11:00 UTC))
                .is_active(false)
                .finalise(),
        ];
        let metrics = calculate_metrics(&transactions);

        let cards = SummaryCards::new(&metrics, "EUR");

        assert_eq!(cards.total_volume, "€1,500.00");
        assert_eq!(cards.total_transactions, "2");
        assert_eq!(cards.average_transaction, "€750.00");
        assert_eq!(cards.total_fees, "€10.00");
        assert_eq!(cards.active_transactions, "1 of 2");
    }

    #[test]
    fn empty_metrics_show_zeros() {
        let cards = SummaryCards::new(&calculate_metrics(&[]), "USD");

        assert_eq!(cards.total_volume, "$0.00");
        assert_eq!(cards.average_transaction, "$0.00");
        assert_eq!(cards.total_transactions, "0");
    }
}
