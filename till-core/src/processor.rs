//! Submission and scoring entry points over a [`ReceiptStore`].

use tracing::{debug, info};

use crate::{
    error::ReceiptError,
    id::ReceiptId,
    points::{self, PointsBreakdown},
    receipt::{Receipt, ReceiptPayload},
    store::ReceiptStore,
    validate::validate,
};

/// Validates, stores and scores receipts.
///
/// Shareable across threads; all synchronisation lives in the owned store.
#[derive(Debug, Default)]
pub struct ReceiptProcessor {
    store: ReceiptStore,
}

impl ReceiptProcessor {
    /// Create a processor with an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `payload` and store it under a fresh identifier.
    ///
    /// # Errors
    /// Returns [`ReceiptError::Validation`] with the first rule the payload
    /// breaks. Nothing is stored in that case.
    pub fn process(&self, payload: &ReceiptPayload) -> Result<ReceiptId, ReceiptError> {
        let receipt = validate(payload).inspect_err(|e| {
            debug!(field = e.field(), reason = %e, "receipt rejected");
        })?;
        let id = ReceiptId::new();
        self.store.put(id, receipt);
        info!(id = %id, on_file = self.store.len(), "receipt processed");
        Ok(id)
    }

    /// Total points for the receipt stored under `id`.
    ///
    /// # Errors
    /// Returns [`ReceiptError::NotFound`] if no receipt has that identifier.
    pub fn points(&self, id: ReceiptId) -> Result<u64, ReceiptError> {
        let points = points::score(&self.receipt(id)?);
        info!(id = %id, points, "points awarded");
        Ok(points)
    }

    /// Per-rule breakdown for the receipt stored under `id`.
    ///
    /// # Errors
    /// Returns [`ReceiptError::NotFound`] if no receipt has that identifier.
    pub fn breakdown(&self, id: ReceiptId) -> Result<PointsBreakdown, ReceiptError> {
        Ok(points::breakdown(&self.receipt(id)?))
    }

    /// Number of receipts accepted so far.
    #[must_use]
    pub fn receipts_on_file(&self) -> usize {
        self.store.len()
    }

    fn receipt(&self, id: ReceiptId) -> Result<Receipt, ReceiptError> {
        self.store.get(id).ok_or(ReceiptError::NotFound(id))
    }
}
