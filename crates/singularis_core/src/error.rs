//! Error types for the core library

use core::fmt;

/// Reasons a handle lookup fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleError {
    /// Handle is null
    Null,
    /// Referent was removed (generation mismatch)
    Stale,
    /// Index was never issued by this map
    OutOfBounds,
}

impl fmt::Display for HandleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandleError::Null => write!(f, "handle is null"),
            HandleError::Stale => write!(f, "handle is stale (referent removed)"),
            HandleError::OutOfBounds => write!(f, "handle index out of bounds"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HandleError {}
