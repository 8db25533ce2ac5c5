//! Recipient leaderboards.
//!
//! Aggregates transactions per recipient and ranks recipients by the total
//! amount they received. The same ranking feeds the recipient bar charts and
//! picks the series for the recipient rollups in [crate::dashboard::rollup].

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{format::shorten_name, transaction::TransactionRecord};

/// The longest recipient name shown in leaderboards and chart legends before
/// it is shortened.
pub const RECIPIENT_LABEL_LENGTH: usize = 20;

/// The totals for one recipient.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientAggregate {
    /// The recipient's name, or "Unknown" for transactions without one.
    pub name: String,
    /// The name shortened to [RECIPIENT_LABEL_LENGTH] graphemes for display.
    pub display_name: String,
    /// The sum of the total amounts sent to the recipient.
    pub total_amount: Decimal,
    /// The number of transactions sent to the recipient.
    pub transaction_count: usize,
    /// The recipient's bank, taken from the last transaction in input order.
    pub bank_name: String,
    /// The recipient's account number, taken from the last transaction in input order.
    pub account_number: String,
}

/// Every recipient sorted by total amount, largest first.
///
/// Recipients with equal totals keep the order in which they first appeared in
/// the transactions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecipientRanking {
    recipients: Vec<RecipientAggregate>,
}

impl RecipientRanking {
    /// All recipients in rank order.
    pub fn all(&self) -> &[RecipientAggregate] {
        &self.recipients
    }

    /// The first `n` recipients, or all of them if there are fewer than `n`.
    pub fn top(&self, n: usize) -> &[RecipientAggregate] {
        &self.recipients[..n.min(self.recipients.len())]
    }

    /// The names of the first `n` recipients in rank order.
    pub fn top_names(&self, n: usize) -> Vec<String> {
        self.top(n)
            .iter()
            .map(|recipient| recipient.name.clone())
            .collect()
    }

    /// The summed amount and transaction count of the first `n` recipients.
    pub fn totals(&self, n: usize) -> (Decimal, usize) {
        self.top(n)
            .iter()
            .fold((Decimal::ZERO, 0), |(amount, count), recipient| {
                (
                    amount + recipient.total_amount,
                    count + recipient.transaction_count,
                )
            })
    }

    /// The number of distinct recipients.
    pub fn len(&self) -> usize {
        self.recipients.len()
    }

    /// Whether there are no recipients.
    pub fn is_empty(&self) -> bool {
        self.recipients.is_empty()
    }
}

/// Aggregates `transactions` by recipient name and ranks them by total amount.
///
/// Transactions with a missing or blank recipient name are grouped under
/// [crate::transaction::UNKNOWN_RECIPIENT].
pub fn rank_recipients(transactions: &[TransactionRecord]) -> RecipientRanking {
    let mut recipients: Vec<RecipientAggregate> = Vec::new();
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();

    for transaction in transactions {
        let name = transaction.recipient_label();

        let index = *index_by_name.entry(name).or_insert_with(|| {
            recipients.push(RecipientAggregate {
                name: name.to_owned(),
                display_name: shorten_name(name, RECIPIENT_LABEL_LENGTH),
                total_amount: Decimal::ZERO,
                transaction_count: 0,
                bank_name: String::new(),
                account_number: String::new(),
            });
            recipients.len() - 1
        });

        let recipient = &mut recipients[index];
        recipient.total_amount += transaction.total_amount;
        recipient.transaction_count += 1;
        recipient.bank_name = transaction.recipient_bank().to_owned();
        recipient.account_number = transaction.recipient_account().to_owned();
    }

    // `sort_by` is stable, so ties stay in first-seen order.
    recipients.sort_by(|a, b| b.total_amount.cmp(&a.total_amount));

    RecipientRanking { recipients }
}
