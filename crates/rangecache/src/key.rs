//! Inclusive range keys

use std::fmt;

use crate::error::{Error, Result};

/// Inclusive index range `[start, end]` identifying a cached sum.
///
/// Keys are compared by both endpoints; overlapping ranges are distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeKey {
    start: usize,
    end: usize,
}

impl RangeKey {
    /// Create a key, rejecting `start > end`
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Key covering a single index
    pub fn single(index: usize) -> Self {
        Self { start: index, end: index }
    }

    /// First index in the range
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last index in the range
    pub fn end(&self) -> usize {
        self.end
    }

    /// Whether `index` lies inside the range
    pub fn covers(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }
}

impl TryFrom<(usize, usize)> for RangeKey {
    type Error = Error;

    fn try_from((start, end): (usize, usize)) -> Result<Self> {
        Self::new(start, end)
    }
}

impl fmt::Display for RangeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
