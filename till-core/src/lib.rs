//! Core engine for the till receipt points service.
//!
//! Validates submitted receipts, keeps accepted ones in an in-memory store,
//! and scores them against the fixed loyalty rule table.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod examples;
pub mod id;
pub mod points;
pub mod processor;
pub mod receipt;
pub mod store;
pub mod validate;

pub use error::{ReceiptError, ValidationError};
pub use id::ReceiptId;
pub use points::{breakdown, score, PointsBreakdown};
pub use processor::ReceiptProcessor;
pub use receipt::{Amount, Item, ItemPayload, Receipt, ReceiptPayload};
pub use store::ReceiptStore;
pub use validate::validate;
