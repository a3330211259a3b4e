//! In-memory receipt store.
//!
//! Insertion-only: a receipt is recorded once, after validation, and is never
//! updated or removed. Contents live for the lifetime of the process.
//!
//! # Locking
//! A single `RwLock` guards the map. [`ReceiptStore::put`] takes the write
//! lock; [`ReceiptStore::get`] and [`ReceiptStore::len`] take the read lock.
//! `get` clones the receipt out, so no lock is held while a caller scores it.

use std::{collections::HashMap, sync::RwLock};

use crate::{id::ReceiptId, receipt::Receipt};

/// Thread-safe map from receipt ID to validated receipt.
#[derive(Debug, Default)]
pub struct ReceiptStore {
    entries: RwLock<HashMap<ReceiptId, Receipt>>,
}

impl ReceiptStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `receipt` under `id`.
    ///
    /// IDs come from a unique generator, so an existing entry is never
    /// expected; if one is present it is left untouched.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned (a previous thread panicked
    /// while holding the write lock).
    pub fn put(&self, id: ReceiptId, receipt: Receipt) {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.entries
            .write()
            .expect("receipt store write lock poisoned")
            .entry(id)
            .or_insert(receipt);
    }

    /// Look up the receipt stored under `id`.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn get(&self, id: ReceiptId) -> Option<Receipt> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.entries
            .read()
            .expect("receipt store read lock poisoned")
            .get(&id)
            .cloned()
    }

    /// Number of receipts on file.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.entries
            .read()
            .expect("receipt store read lock poisoned")
            .len()
    }

    /// Return `true` if no receipt has been stored yet.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
