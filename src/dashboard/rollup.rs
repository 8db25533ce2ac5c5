//! Daily rollups of transaction amounts.
//!
//! A rollup has one row per calendar day and one amount per series member,
//! where a series member is a value of the discriminator (a transaction type
//! or a recipient name). This backs both the "amounts by type over time" and
//! the "amounts by top recipient over time" charts.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use time::{Date, OffsetDateTime};
use time_tz::Tz;

use crate::{format::format_day_label, timezone::local_date, transaction::TransactionRecord};

/// The accumulated amount per series member for one row, in series order.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesAmounts(Vec<(String, Decimal)>);

impl SeriesAmounts {
    fn zeroed(series: &[String]) -> Self {
        Self(
            series
                .iter()
                .map(|member| (member.clone(), Decimal::ZERO))
                .collect(),
        )
    }

    /// The amount for `member`, or `None` if `member` is not part of the series.
    pub fn get(&self, member: &str) -> Option<Decimal> {
        self.0
            .iter()
            .find(|(existing, _)| existing == member)
            .map(|(_, amount)| *amount)
    }

    /// The members and their amounts in series order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.0.iter().map(|(member, amount)| (member.as_str(), *amount))
    }
}

impl Serialize for SeriesAmounts {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

/// One day in a rollup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollupRow {
    /// The calendar day in the dashboard's timezone.
    #[serde(skip)]
    pub date: Date,
    /// The day formatted for chart axes, e.g. "Jan 15".
    #[serde(rename = "date")]
    pub label: String,
    /// The timestamp of the transaction that created this row.
    #[serde(rename = "fullDate", with = "time::serde::rfc3339")]
    pub first_seen: OffsetDateTime,
    /// The summed total amounts per series member.
    pub amounts: SeriesAmounts,
}

/// Sums transaction amounts per day and per series member.
///
/// Transactions whose discriminator is not in `series` are ignored: they do
/// not create rows and do not add to existing ones. Every row starts with a
/// zero for each member of `series`.
///
/// # Arguments
/// * `transactions` - The transactions to roll up
/// * `series` - The discriminator values to keep, in output order
/// * `discriminator` - Extracts the discriminator value from a transaction
/// * `timezone` - The timezone that decides which day a transaction falls on
///
/// # Returns
/// Rows sorted by the timestamp that created them, oldest first.
pub fn rollup_by_day<F>(
    transactions: &[TransactionRecord],
    series: &[String],
    discriminator: F,
    timezone: &Tz,
) -> Vec<RollupRow>
where
    F: Fn(&TransactionRecord) -> String,
{
    let mut rows: Vec<RollupRow> = Vec::new();
    let mut index_by_date: HashMap<Date, usize> = HashMap::new();

    for transaction in transactions {
        let key = discriminator(transaction);
        let Some(position) = series.iter().position(|member| *member == key) else {
            continue;
        };

        let date = local_date(transaction.occurred_at, timezone);
        let index = *index_by_date.entry(date).or_insert_with(|| {
            rows.push(RollupRow {
                date,
                label: format_day_label(date),
                first_seen: transaction.occurred_at,
                amounts: SeriesAmounts::zeroed(series),
            });
            rows.len() - 1
        });

        rows[index].amounts.0[position].1 += transaction.total_amount;
    }

    // Sort on the timestamp, not the label, so that "Jan 2" comes after "Dec 31".
    rows.sort_by_key(|row| row.first_seen);
    rows
}

/// The distinct lower-cased transaction types in first-seen order.
pub fn distinct_types(transactions: &[TransactionRecord]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();

    for transaction in transactions {
        let transaction_type = transaction.normalized_type();
        if !types.contains(&transaction_type) {
            types.push(transaction_type);
        }
    }

    types
}

/// Daily amounts for every transaction type.
///
/// The series are the distinct lower-cased types in first-seen order.
pub fn amounts_by_type_over_time(
    transactions: &[TransactionRecord],
    timezone: &Tz,
) -> Vec<RollupRow> {
    let series = distinct_types(transactions);
    rollup_by_day(
        transactions,
        &series,
        TransactionRecord::normalized_type,
        timezone,
    )
}

/// Daily amounts for the given recipients, usually the top N from
/// [crate::dashboard::RecipientRanking::top_names].
pub fn amounts_by_recipient_over_time(
    transactions: &[TransactionRecord],
    recipients: &[String],
    timezone: &Tz,
) -> Vec<RollupRow> {
    rollup_by_day(
        transactions,
        recipients,
        |transaction| transaction.recipient_label().to_owned(),
        timezone,
    )
}

/// The sum of the total amounts of the transactions a rollup over `series` includes.
pub fn series_total<F>(
    transactions: &[TransactionRecord],
    series: &[String],
    discriminator: F,
) -> Decimal
where
    F: Fn(&TransactionRecord) -> String,
{
    transactions
        .iter()
        .filter(|transaction| series.contains(&discriminator(transaction)))
        .map(|transaction| transaction.total_amount)
        .sum()
}
