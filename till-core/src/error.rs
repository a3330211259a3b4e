use crate::id::ReceiptId;

/// The first rule a candidate receipt failed.
///
/// Validation stops at the first violation; errors are never aggregated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// The retailer name was empty.
    #[error("retailer name should not be empty")]
    EmptyRetailer,

    /// The retailer name contained characters outside `[A-Za-z0-9_ -]`.
    #[error("retailer name is not in correct format")]
    InvalidRetailer,

    /// The purchase date was not a calendar date in `YYYY-MM-DD` form.
    #[error("purchase date should be YYYY-MM-DD")]
    InvalidPurchaseDate,

    /// The purchase time was not a 24-hour `HH:MM` time.
    #[error("purchase time should be HH:MM")]
    InvalidPurchaseTime,

    /// The total did not parse as a decimal number.
    #[error("total should be entered as string in valid float format")]
    UnparseableTotal,

    /// The total parsed but was not `digits.two-digits`.
    #[error("invalid total format: expected digits, a dot and exactly two digits")]
    InvalidTotalFormat,

    /// The receipt listed no items.
    #[error("please enter at least 1 item")]
    NoItems,

    /// An item's price was not a finite, non-negative decimal.
    #[error("item {index} does not have a valid price entry: price must be a finite, non-negative decimal")]
    InvalidItemPrice { index: usize },

    /// An item's short description contained disallowed characters.
    #[error("item {index} does not have a valid short description")]
    InvalidItemDescription { index: usize },
}

impl ValidationError {
    /// JSON name of the payload field the failed rule applies to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyRetailer | Self::InvalidRetailer => "retailer",
            Self::InvalidPurchaseDate => "purchaseDate",
            Self::InvalidPurchaseTime => "purchaseTime",
            Self::UnparseableTotal | Self::InvalidTotalFormat => "total",
            Self::NoItems => "items",
            Self::InvalidItemPrice { .. } => "price",
            Self::InvalidItemDescription { .. } => "shortDescription",
        }
    }
}

/// Errors produced by the `till-core` crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ReceiptError {
    /// The candidate receipt was rejected by the validator.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No receipt is stored under the given identifier.
    #[error("receipt not found: {0}")]
    NotFound(ReceiptId),
}
