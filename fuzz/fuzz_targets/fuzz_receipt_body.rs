//! Fuzz target: JSON submission body through validation and scoring.
//!
//! Arbitrary bytes are parsed as a receipt payload; anything that parses is
//! validated, and anything that validates is scored. None of it may panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use till_core::{score, validate, ReceiptPayload};

fuzz_target!(|data: &[u8]| {
    let Ok(payload) = serde_json::from_slice::<ReceiptPayload>(data) else {
        return;
    };
    if let Ok(receipt) = validate(&payload) {
        let points = score(&receipt);
        assert_eq!(points, score(&receipt), "scoring must be deterministic");
    }
});
