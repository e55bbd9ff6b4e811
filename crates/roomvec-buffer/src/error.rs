//! Buffer error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while reallocating a [`Buffer`](crate::Buffer).
///
/// Every operation that returns a `BufferError` leaves the buffer exactly
/// as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// The backing allocation could not be obtained.
    ///
    /// Raised when the element count overflows a valid layout, when the
    /// request exceeds the configured
    /// [`max_bytes`](crate::BufferConfig::max_bytes) budget, or when the
    /// global allocator returns null.
    AllocationFailed {
        /// Number of bytes requested (saturated at `usize::MAX` on overflow).
        requested_bytes: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested_bytes } => {
                write!(f, "allocation failed: requested {requested_bytes} bytes")
            }
        }
    }
}

impl Error for BufferError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_requested_bytes() {
        let err = BufferError::AllocationFailed {
            requested_bytes: 96,
        };
        assert_eq!(err.to_string(), "allocation failed: requested 96 bytes");
    }
}
