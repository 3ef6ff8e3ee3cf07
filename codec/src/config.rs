//! Types for use as [crate::Read::Cfg].

use core::ops::{Bound, RangeBounds};

/// Bounds the length of a decoded collection.
///
/// Every length-prefixed value read from an untrusted buffer is checked against a [RangeCfg]
/// before anything is allocated for it.
///
/// ```
/// use blockscan_codec::RangeCfg;
///
/// let cfg: RangeCfg = (..=32).into();
/// assert!(cfg.contains(&20));
/// assert!(!cfg.contains(&33));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct RangeCfg {
    start: Bound<usize>,
    end: Bound<usize>,
}

impl RangeCfg {
    /// Creates a [RangeCfg] from any range of `usize`.
    pub fn new(r: impl RangeBounds<usize>) -> Self {
        Self {
            start: r.start_bound().cloned(),
            end: r.end_bound().cloned(),
        }
    }

    /// Creates a [RangeCfg] accepting exactly `len`.
    pub fn exact(len: usize) -> Self {
        Self {
            start: Bound::Included(len),
            end: Bound::Included(len),
        }
    }

    /// Returns true if `value` lies within the range.
    pub fn contains(&self, value: &usize) -> bool {
        match self.start {
            Bound::Included(s) if *value < s => return false,
            Bound::Excluded(s) if *value <= s => return false,
            _ => {}
        }
        match self.end {
            Bound::Included(e) if *value > e => return false,
            Bound::Excluded(e) if *value >= e => return false,
            _ => {}
        }
        true
    }
}

impl From<core::ops::Range<usize>> for RangeCfg {
    fn from(r: core::ops::Range<usize>) -> Self {
        Self::new(r)
    }
}

impl From<core::ops::RangeInclusive<usize>> for RangeCfg {
    fn from(r: core::ops::RangeInclusive<usize>) -> Self {
        Self::new(r)
    }
}

impl From<core::ops::RangeFrom<usize>> for RangeCfg {
    fn from(r: core::ops::RangeFrom<usize>) -> Self {
        Self::new(r)
    }
}

impl From<core::ops::RangeToInclusive<usize>> for RangeCfg {
    fn from(r: core::ops::RangeToInclusive<usize>) -> Self {
        Self::new(r)
    }
}

impl From<core::ops::RangeFull> for RangeCfg {
    fn from(_: core::ops::RangeFull) -> Self {
        Self::new(..)
    }
}

impl RangeBounds<usize> for RangeCfg {
    fn start_bound(&self) -> Bound<&usize> {
        self.start.as_ref()
    }

    fn end_bound(&self) -> Bound<&usize> {
        self.end.as_ref()
    }
}
