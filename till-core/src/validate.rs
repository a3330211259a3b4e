//! Field-by-field validation of candidate receipts.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::error::ValidationError;
use crate::receipt::{Amount, Item, ItemPayload, Receipt, ReceiptPayload};

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_ \-]+$").expect("name pattern compiles"));

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static MONEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("money pattern compiles"));

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern compiles"));

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static TIME_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("time pattern compiles"));

/// Validate a candidate receipt and return its typed form.
///
/// Fields are checked in the order retailer, purchase date, purchase time,
/// total, items; the first violation is returned.
///
/// # Errors
/// Returns the [`ValidationError`] for the first rule the payload breaks.
pub fn validate(payload: &ReceiptPayload) -> Result<Receipt, ValidationError> {
    let retailer = check_retailer(&payload.retailer)?;
    let purchase_date = check_purchase_date(&payload.purchase_date)?;
    let purchase_time = check_purchase_time(&payload.purchase_time)?;
    let total = check_total(&payload.total)?;
    let items = check_items(&payload.items)?;

    Ok(Receipt {
        retailer,
        purchase_date,
        purchase_time,
        total,
        items,
    })
}

fn check_retailer(retailer: &str) -> Result<String, ValidationError> {
    if retailer.is_empty() {
        return Err(ValidationError::EmptyRetailer);
    }
    if !NAME_PATTERN.is_match(retailer) {
        return Err(ValidationError::InvalidRetailer);
    }
    Ok(retailer.to_owned())
}

fn check_purchase_date(date: &str) -> Result<NaiveDate, ValidationError> {
    if !DATE_SHAPE.is_match(date) {
        return Err(ValidationError::InvalidPurchaseDate);
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| ValidationError::InvalidPurchaseDate)
}

fn check_purchase_time(time: &str) -> Result<NaiveTime, ValidationError> {
    if !TIME_SHAPE.is_match(time) {
        return Err(ValidationError::InvalidPurchaseTime);
    }
    NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| ValidationError::InvalidPurchaseTime)
}

fn check_total(total: &str) -> Result<Amount, ValidationError> {
    let value: f64 = total.parse().map_err(|_| ValidationError::UnparseableTotal)?;
    if !MONEY_PATTERN.is_match(total) {
        return Err(ValidationError::InvalidTotalFormat);
    }
    Ok(Amount::new(total, value))
}

fn check_items(items: &[ItemPayload]) -> Result<Vec<Item>, ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::NoItems);
    }
    items
        .iter()
        .enumerate()
        .map(|(index, item)| check_item(index, item))
        .collect()
}

fn check_item(index: usize, item: &ItemPayload) -> Result<Item, ValidationError> {
    // Negative or non-finite prices would make the description bonus negative.
    let price = match item.price.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => return Err(ValidationError::InvalidItemPrice { index }),
    };
    if !NAME_PATTERN.is_match(&item.short_description) {
        return Err(ValidationError::InvalidItemDescription { index });
    }
    Ok(Item {
        short_description: item.short_description.clone(),
        price: Amount::new(&item.price, price),
    })
}
