//! The transaction record as returned by the transactions API.
//!
//! Records are owned by the API and are never mutated after they are received.
//! Defaults for missing or blank fields live on the record itself (see
//! [TransactionRecord::recipient_label]) so the aggregation code never has to
//! repeat fallback logic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The label used for transactions without a recipient name.
pub const UNKNOWN_RECIPIENT: &str = "Unknown";

/// A financial movement between a payer and a recipient.
///
/// Field names follow the Rust side of things; the `serde` renames map them to
/// the names used by the transactions API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// The API's ID for the transaction.
    pub id: i64,

    /// The business key of the transaction, unique per record.
    #[serde(rename = "transaction_reference")]
    pub reference: String,

    /// The kind of transaction, e.g. "transfer" or "payment".
    ///
    /// Different producers use different casing, use
    /// [TransactionRecord::normalized_type] when grouping.
    pub transaction_type: String,

    /// The three letter ISO 4217 currency code.
    pub currency_code: String,

    /// The amount sent, excluding fees.
    pub amount: Decimal,

    /// Fees charged by a third party.
    pub external_fee: Decimal,

    /// The amount including fees.
    ///
    /// This should equal `amount + external_fee`. The value is taken as given
    /// by the API and is not checked.
    pub total_amount: Decimal,

    /// When the money moved.
    #[serde(rename = "transaction_datetime", with = "time::serde::rfc3339")]
    pub occurred_at: OffsetDateTime,

    /// Free text entered by the operator.
    #[serde(default)]
    pub description: Option<String>,

    /// Path of an uploaded receipt, if any.
    #[serde(default)]
    pub image_path: Option<String>,

    /// The user that created the transaction.
    #[serde(default)]
    pub initiated_by_user_id: Option<i64>,

    /// The name on the paying account.
    #[serde(rename = "payer_account_name", default)]
    pub payer_name: Option<String>,

    /// The paying account's number.
    #[serde(default)]
    pub payer_account_number: Option<String>,

    /// The paying account's bank.
    #[serde(default)]
    pub payer_bank_name: Option<String>,

    /// The name on the receiving account.
    #[serde(rename = "recipient_account_name", default)]
    pub recipient_name: Option<String>,

    /// The receiving account's number.
    #[serde(default)]
    pub recipient_account_number: Option<String>,

    /// The receiving account's bank.
    #[serde(default)]
    pub recipient_bank_name: Option<String>,

    /// The ID of the request that created the transaction.
    #[serde(default)]
    pub request_id: Option<String>,

    /// The correlation ID shared by related requests.
    #[serde(default)]
    pub correlation_id: Option<String>,

    /// Whether the transaction is active (i.e., not soft deleted).
    pub is_active: bool,

    /// When the API first stored the transaction.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,

    /// When the API last changed the transaction.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl TransactionRecord {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        reference: &str,
        transaction_type: &str,
        amount: Decimal,
        occurred_at: OffsetDateTime,
    ) -> TransactionBuilder {
        TransactionBuilder {
            id: 0,
            reference: reference.to_owned(),
            transaction_type: transaction_type.to_owned(),
            currency_code: "USD".to_owned(),
            amount,
            external_fee: Decimal::ZERO,
            total_amount: None,
            occurred_at,
            description: None,
            payer_name: None,
            payer_account_number: None,
            payer_bank_name: None,
            recipient_name: None,
            recipient_account_number: None,
            recipient_bank_name: None,
            is_active: true,
        }
    }

    /// The transaction type in lower case, the key used for grouping by type.
    pub fn normalized_type(&self) -> String {
        self.transaction_type.to_lowercase()
    }

    /// The recipient's name, or [UNKNOWN_RECIPIENT] if it is missing or blank.
    pub fn recipient_label(&self) -> &str {
        non_blank(self.recipient_name.as_deref()).unwrap_or(UNKNOWN_RECIPIENT)
    }

    /// The recipient's bank, or an empty string if it is missing.
    pub fn recipient_bank(&self) -> &str {
        self.recipient_bank_name.as_deref().unwrap_or_default()
    }

    /// The recipient's account number, or an empty string if it is missing.
    pub fn recipient_account(&self) -> &str {
        self.recipient_account_number.as_deref().unwrap_or_default()
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.trim().is_empty())
}

/// A builder for creating [TransactionRecord] instances.
///
/// Fields the API assigns (ID, creation and update times) get placeholder
/// values: the ID defaults to zero and both timestamps copy `occurred_at`.
/// Unless set explicitly, the total amount is `amount + external_fee`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    id: i64,
    reference: String,
    transaction_type: String,
    currency_code: String,
    amount: Decimal,
    external_fee: Decimal,
    total_amount: Option<Decimal>,
    occurred_at: OffsetDateTime,
    description: Option<String>,
    payer_name: Option<String>,
    payer_account_number: Option<String>,
    payer_bank_name: Option<String>,
    recipient_name: Option<String>,
    recipient_account_number: Option<String>,
    recipient_bank_name: Option<String>,
    is_active: bool,
}

impl TransactionBuilder {
    /// Set the API ID of the transaction.
    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Set the currency code.
    pub fn currency_code(mut self, currency_code: &str) -> Self {
        self.currency_code = currency_code.to_owned();
        self
    }

    /// Set the external fee.
    pub fn external_fee(mut self, external_fee: Decimal) -> Self {
        self.external_fee = external_fee;
        self
    }

    /// Override the total amount instead of deriving it from the amount and fee.
    pub fn total_amount(mut self, total_amount: Decimal) -> Self {
        self.total_amount = Some(total_amount);
        self
    }

    /// Set the description.
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }

    /// Set the payer's name, bank and account number.
    pub fn payer(mut self, name: &str, bank_name: &str, account_number: &str) -> Self {
        self.payer_name = Some(name.to_owned());
        self.payer_bank_name = Some(bank_name.to_owned());
        self.payer_account_number = Some(account_number.to_owned());
        self
    }

    /// Set the recipient's name, bank and account number.
    pub fn recipient(mut self, name: &str, bank_name: &str, account_number: &str) -> Self {
        self.recipient_name = Some(name.to_owned());
        self.recipient_bank_name = Some(bank_name.to_owned());
        self.recipient_account_number = Some(account_number.to_owned());
        self
    }

    /// Set whether the transaction is active.
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Build the final [TransactionRecord] instance.
    pub fn finalise(self) -> TransactionRecord {
        TransactionRecord {
            id: self.id,
            reference: self.reference,
            transaction_type: self.transaction_type,
            currency_code: self.currency_code,
            amount: self.amount,
            external_fee: self.external_fee,
            total_amount: self
                .total_amount
                .unwrap_or(self.amount + self.external_fee),
            occurred_at: self.occurred_at,
            description: self.description,
            image_path: None,
            initiated_by_user_id: None,
            payer_name: self.payer_name,
            payer_account_number: self.payer_account_number,
            payer_bank_name: self.payer_bank_name,
            recipient_name: self.recipient_name,
            recipient_account_number: self.recipient_account_number,
            recipient_bank_name: self.recipient_bank_name,
            request_id: None,
            correlation_id: None,
            is_active: self.is_active,
            created_at: self.occurred_at,
            updated_at: self.occurred_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use time::macros::datetime;

    use super::{TransactionRecord, UNKNOWN_RECIPIENT};

    #[test]
    fn deserializes_api_record() {
        let json = r#"{
            "id": 42,
            "transaction_reference": "TXN-0042",
            "transaction_type": "TRANSFER",
            "currency_code": "NGN",
            "amount": 1500.5,
            "external_fee": 25,
            "total_amount": 1525.5,
            "transaction_datetime": "2024-03-05T14:30:00Z",
            "description": "Invoice 7",
            "image_path": "",
            "initiated_by_user_id": 3,
            "payer_account_number": "0123456789",
            "payer_account_name": "Acme Ltd",
            "payer_bank_name": "First Bank",
            "recipient_account_number": "9876543210",
            "recipient_account_name": "Jane Doe",
            "recipient_bank_name": "GTBank",
            "request_id": "req-1",
            "correlation_id": "corr-1",
            "is_active": true,
            "created_at": "2024-03-05T14:31:00Z",
            "updated_at": "2024-03-05T14:31:00Z"
        }"#;

        let record: TransactionRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, 42);
        assert_eq!(record.reference, "TXN-0042");
        assert_eq!(record.amount, dec!(1500.5));
        assert_eq!(record.external_fee, dec!(25));
        assert_eq!(record.total_amount, dec!(1525.5));
        assert_eq!(record.occurred_at, datetime!(2024-03-05 14:30 UTC));
        assert_eq!(record.recipient_label(), "Jane Doe");
        assert_eq!(record.payer_name.as_deref(), Some("Acme Ltd"));
    }

    #[test]
    fn deserializes_record_with_missing_optional_fields() {
        let json = r#"{
            "id": 1,
            "transaction_reference": "TXN-1",
            "transaction_type": "payment",
            "currency_code": "USD",
            "amount": "10.00",
            "external_fee": "0.00",
            "total_amount": "10.00",
            "transaction_datetime": "2024-03-05T14:30:00+01:00",
            "recipient_account_name": null,
            "is_active": false,
            "created_at": "2024-03-05T14:31:00Z",
            "updated_at": "2024-03-05T14:31:00Z"
        }"#;

        let record: TransactionRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.recipient_label(), UNKNOWN_RECIPIENT);
        assert_eq!(record.recipient_bank(), "");
        assert_eq!(record.recipient_account(), "");
        assert_eq!(record.description, None);
    }

    #[test]
    fn normalized_type_is_lower_case() {
        let record =
            TransactionRecord::build("ref", "Cross_Border", dec!(1), datetime!(2024-01-01 0:00 UTC))
                .finalise();

        assert_eq!(record.normalized_type(), "cross_border");
    }

    #[test]
    fn blank_recipient_name_is_unknown() {
        let record = TransactionRecord::build("ref", "transfer", dec!(1), datetime!(2024-01-01 0:00 UTC))
            .recipient("   ", "Bank", "123")
            .finalise();

        assert_eq!(record.recipient_label(), UNKNOWN_RECIPIENT);
    }

    #[test]
    fn builder_derives_total_from_amount_and_fee() {
        let record = TransactionRecord::build("ref", "transfer", dec!(100), datetime!(2024-01-01 0:00 UTC))
            .external_fee(dec!(2.50))
            .finalise();

        assert_eq!(record.total_amount, dec!(102.50));
    }

    #[test]
    fn builder_total_override_is_trusted() {
        let record = TransactionRecord::build("ref", "transfer", dec!(100), datetime!(2024-01-01 0:00 UTC))
            .external_fee(dec!(2.50))
            .total_amount(dec!(90))
            .finalise();

        assert_eq!(record.total_amount, dec!(90));
    }
}
