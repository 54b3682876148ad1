//! Error types for rangecache

use std::fmt;

use crate::RangeKey;

/// Result type alias for rangecache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the cache and array boundaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Cache constructed with a capacity of zero
    ZeroCapacity,

    /// Range whose start lies past its end
    InvalidRange {
        /// Requested first index
        start: usize,
        /// Requested last index
        end: usize,
    },

    /// Index past the end of the array
    OutOfBounds {
        /// Offending index
        index: usize,
        /// Array length
        len: usize,
    },

    /// Range sum does not fit in an `i64`
    Overflow(RangeKey),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroCapacity => write!(f, "Cache capacity must be at least 1"),
            Error::InvalidRange { start, end } => {
                write!(f, "Invalid range: start {} is past end {}", start, end)
            }
            Error::OutOfBounds { index, len } => {
                write!(f, "Index {} out of bounds for array of length {}", index, len)
            }
            Error::Overflow(key) => write!(f, "Sum over {} overflows i64", key),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::OutOfBounds { index: 7, len: 5 }.to_string(),
            "Index 7 out of bounds for array of length 5"
        );
        assert_eq!(
            Error::InvalidRange { start: 4, end: 2 }.to_string(),
            "Invalid range: start 4 is past end 2"
        );
    }
}
