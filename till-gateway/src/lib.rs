//! HTTP front end for the till receipt points engine.
//!
//! Accepts receipts over JSON, hands them to a shared
//! [`till_core::ReceiptProcessor`], and maps its errors to HTTP responses.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
