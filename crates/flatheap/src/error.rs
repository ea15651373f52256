//! Heap error types.

use std::error::Error;
use std::fmt;

/// Errors returned by the fallible capacity operations of [`FlatHeap`].
///
/// Empty-heap access is not represented here: the trusting accessors
/// panic and the `try_*` accessors return `None`.
///
/// [`FlatHeap`]: crate::FlatHeap
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeapError {
    /// The allocator refused the request, or the new capacity overflowed.
    ReserveFailed {
        /// Number of additional entries requested.
        additional: usize,
        /// Number of live entries at the time of the request.
        len: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReserveFailed { additional, len } => {
                write!(
                    f,
                    "failed to reserve {additional} additional heap slots with {len} live"
                )
            }
        }
    }
}

impl Error for HeapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_request_and_len() {
        let err = HeapError::ReserveFailed {
            additional: 8,
            len: 3,
        };
        assert_eq!(
            err.to_string(),
            "failed to reserve 8 additional heap slots with 3 live"
        );
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn Error> = Box::new(HeapError::ReserveFailed {
            additional: usize::MAX,
            len: 0,
        });
        assert!(err.source().is_none());
    }
}
