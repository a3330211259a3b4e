//! Fuzz target: arbitrary text in every receipt field.
//!
//! Splits the input on NUL bytes into the six string fields so the fuzzer
//! can steer each one independently.
#![no_main]

use libfuzzer_sys::fuzz_target;
use till_core::{validate, ItemPayload, ReceiptPayload};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let mut parts = text.split('\0').map(str::to_owned);
    let mut next = || parts.next().unwrap_or_default();

    let payload = ReceiptPayload {
        retailer: next(),
        purchase_date: next(),
        purchase_time: next(),
        total: next(),
        items: vec![ItemPayload {
            short_description: next(),
            price: next(),
        }],
    };

    if let Ok(receipt) = validate(&payload) {
        // Validated receipts carry exactly what was submitted.
        assert_eq!(receipt.retailer, payload.retailer);
        assert_eq!(receipt.total.as_str(), payload.total);
        let _ = till_core::score(&receipt);
    }
});
