use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A candidate receipt exactly as submitted by a client.
///
/// Every field is kept as raw text; absent fields deserialize to empty values
/// so that the validator, not the JSON layer, reports what is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReceiptPayload {
    /// Name of the retailer or store.
    pub retailer: String,
    /// Purchase date, `YYYY-MM-DD`.
    pub purchase_date: String,
    /// Purchase time, 24-hour `HH:MM`.
    pub purchase_time: String,
    /// Total amount paid, e.g. `"35.35"`.
    pub total: String,
    /// Line items in the order they were printed.
    pub items: Vec<ItemPayload>,
}

/// A candidate line item as submitted by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemPayload {
    /// Short product description for the item.
    pub short_description: String,
    /// Price paid for this item, e.g. `"6.49"`.
    pub price: String,
}

/// A money value parsed from its submitted decimal text.
#[derive(Debug, Clone, PartialEq)]
pub struct Amount {
    text: String,
    value: f64,
}

impl Amount {
    pub(crate) fn new(text: &str, value: f64) -> Self {
        Self { text: text.to_owned(), value }
    }

    /// The decimal text as submitted.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The parsed floating-point value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// A receipt that has passed validation.
///
/// Only [`validate`](crate::validate::validate) builds these, so holding one means every field is
/// well-formed. Receipts are never modified after they are stored.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Receipt {
    /// Retailer name, restricted to `[A-Za-z0-9_ -]`.
    pub retailer: String,
    /// Calendar date of purchase.
    pub purchase_date: NaiveDate,
    /// Time of purchase, minute precision.
    pub purchase_time: NaiveTime,
    /// Total amount paid, always `digits.two-digits`.
    pub total: Amount,
    /// At least one line item.
    pub items: Vec<Item>,
}

/// A validated line item.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Item {
    /// Description as submitted, untrimmed.
    pub short_description: String,
    /// Finite, non-negative price.
    pub price: Amount,
}
