use thiserror::Error;

/// Everything that can go wrong while working with a [`Backpack`](crate::Backpack).
///
/// None of these are fatal. A failed operation leaves the backpack exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackpackError {
    #[error("Backpack is full ({capacity} items)")]
    Full { capacity: usize },

    #[error("Item '{0}' not found")]
    NotFound(String),

    #[error("Backpack must be sorted by name before a binary search")]
    PreconditionViolation,

    #[error("Invalid item: {0}")]
    InvalidItem(String),
}

pub type Result<T> = std::result::Result<T, BackpackError>;
