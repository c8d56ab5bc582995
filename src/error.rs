//! Error type for heap operations

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap has no elements to extract
    Empty,
    /// The id does not refer to a live element (never issued or already extracted)
    InvalidId,
    /// The new key is not less than the current key
    PriorityNotDecreased,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "cannot extract from an empty heap"),
            HeapError::InvalidId => {
                write!(f, "id does not refer to a live element")
            }
            HeapError::PriorityNotDecreased => {
                write!(f, "new key is not less than current key")
            }
        }
    }
}

impl std::error::Error for HeapError {}
