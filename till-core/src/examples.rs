//! Sample receipts with known point totals.
//!
//! Used by tests across the workspace and handy for manual requests against
//! a running gateway.

use crate::receipt::{ItemPayload, ReceiptPayload};

/// A sample payload together with the score it must earn.
#[derive(Debug, Clone)]
pub struct SampleReceipt {
    /// Short label for test output.
    pub name: &'static str,
    /// The payload as a client would submit it.
    pub payload: ReceiptPayload,
    /// Points the payload earns once accepted.
    pub expected_points: u64,
}

fn item(short_description: &str, price: &str) -> ItemPayload {
    ItemPayload {
        short_description: short_description.to_owned(),
        price: price.to_owned(),
    }
}

/// Returns the canonical sample receipts.
///
/// - `target`: 6 (retailer) + 10 (two pairs) + 3 + 3 (descriptions) + 6 (odd day) = 28
/// - `corner-market`: 12 (retailer) + 50 + 25 (total) + 10 (two pairs) + 10 (14:33) = 107
/// - `pepsi`: 6 (retailer) + 25 (quarter) + 6 (odd day) = 37
#[must_use]
pub fn sample_receipts() -> Vec<SampleReceipt> {
    vec![
        SampleReceipt {
            name: "target",
            payload: ReceiptPayload {
                retailer: "Target".to_owned(),
                purchase_date: "2022-01-01".to_owned(),
                purchase_time: "13:01".to_owned(),
                total: "35.35".to_owned(),
                items: vec![
                    item("Mountain Dew 12PK", "6.49"),
                    item("Emils Cheese Pizza", "12.25"),
                    item("Knorr Creamy Chicken", "1.26"),
                    item("Doritos Nacho Cheese", "3.35"),
                    item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
                ],
            },
            expected_points: 28,
        },
        SampleReceipt {
            name: "corner-market",
            payload: ReceiptPayload {
                retailer: "Corner Market".to_owned(),
                purchase_date: "2022-03-20".to_owned(),
                purchase_time: "14:33".to_owned(),
                total: "9.00".to_owned(),
                items: vec![item("Gatorade", "2.25"); 4],
            },
            expected_points: 107,
        },
        SampleReceipt {
            name: "pepsi",
            payload: ReceiptPayload {
                retailer: "Target".to_owned(),
                purchase_date: "2022-01-01".to_owned(),
                purchase_time: "13:01".to_owned(),
                total: "1.25".to_owned(),
                items: vec![item("Pepsi - 12-oz", "1.25")],
            },
            expected_points: 37,
        },
    ]
}
