//! Summary metrics and per-type chart data.
//!
//! Provides the numbers behind the dashboard's summary cards and the
//! transaction type bar, pie and area charts.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};

use crate::transaction::TransactionRecord;

/// Number of transactions per normalized transaction type.
///
/// Iterates in the order the types were first seen, which keeps chart output
/// deterministic without re-sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeCounts {
    entries: Vec<(String, usize)>,
}

impl TypeCounts {
    /// Create an empty set of counts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` transactions to `transaction_type`.
    ///
    /// New types are appended after the types already present.
    pub fn add(&mut self, transaction_type: &str, count: usize) {
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing == transaction_type)
        {
            Some((_, existing_count)) => *existing_count += count,
            None => self.entries.push((transaction_type.to_owned(), count)),
        }
    }

    /// The count for `transaction_type`, zero if it was never seen.
    pub fn get(&self, transaction_type: &str) -> usize {
        self.entries
            .iter()
            .find(|(existing, _)| existing == transaction_type)
            .map_or(0, |(_, count)| *count)
    }

    /// The types and their counts in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(transaction_type, count)| (transaction_type.as_str(), *count))
    }

    /// The types in first-seen order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .map(|(transaction_type, _)| transaction_type.as_str())
    }

    /// The number of distinct types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no types have been counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}

impl Serialize for TypeCounts {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

/// Headline figures for a list of transactions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    /// The number of transactions.
    pub total_count: usize,
    /// The sum of the total amounts (amount plus fees).
    pub total_volume: Decimal,
    /// The sum of the external fees.
    pub total_fees: Decimal,
    /// The number of active transactions.
    pub active_count: usize,
    /// `total_volume / total_count`, or zero when there are no transactions.
    pub average_value: Decimal,
    /// Transactions per lower-cased type.
    pub counts_by_type: TypeCounts,
}

/// Calculates the summary metrics for `transactions`.
///
/// Amounts are summed as given, negative values included. An empty slice
/// produces all zeros.
pub fn calculate_metrics(transactions: &[TransactionRecord]) -> MetricsSummary {
    let mut total_volume = Decimal::ZERO;
    let mut total_fees = Decimal::ZERO;
    let mut active_count = 0;
    let mut counts_by_type = TypeCounts::new();

    for transaction in transactions {
        total_volume += transaction.total_amount;
        total_fees += transaction.external_fee;

        if transaction.is_active {
            active_count += 1;
        }

        counts_by_type.add(&transaction.normalized_type(), 1);
    }

    let total_count = transactions.len();
    let average_value = if total_count > 0 {
        total_volume / Decimal::from(total_count)
    } else {
        Decimal::ZERO
    };

    MetricsSummary {
        total_count,
        total_volume,
        total_fees,
        active_count,
        average_value,
        counts_by_type,
    }
}

/// One bar or slice in the transaction type charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDatum {
    /// The transaction type with its first character in upper case.
    #[serde(rename = "type")]
    pub label: String,
    /// The number of transactions of this type.
    pub count: usize,
    /// The share of all transactions, rounded to one decimal place.
    pub percentage: Decimal,
}

/// Converts type counts into chart data, preserving the order of `counts_by_type`.
///
/// # Arguments
/// * `counts_by_type` - Transactions per lower-cased type
/// * `total_count` - The number of transactions the percentages are relative to
pub fn prepare_chart_data(counts_by_type: &TypeCounts, total_count: usize) -> Vec<ChartDatum> {
    counts_by_type
        .iter()
        .map(|(transaction_type, count)| ChartDatum {
            label: capitalize_first(transaction_type),
            count,
            percentage: percentage_of(count, total_count),
        })
        .collect()
}

/// `count / total` as a percentage rounded half away from zero to one decimal place.
///
/// Returns zero when `total` is zero.
pub fn percentage_of(count: usize, total: usize) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }

    (Decimal::from(count) * Decimal::ONE_HUNDRED / Decimal::from(total))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
