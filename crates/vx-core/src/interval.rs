//! Age brackets: `AgeInterval` and the exhaustive partition `AgeIntervals`.
//!
//! # Partition model
//!
//! A set of breaks `b0 < b1 < … < bn` (all positive) defines `n + 2`
//! half-open brackets:
//!
//! ```text
//! [0, b0)  [b0, b1)  …  [bn-1, bn)  [bn, +)
//! ```
//!
//! The brackets are stored sorted by `start`, never overlap, and cover every
//! non-negative age, so `classify` is total.  Nothing here caches which
//! bracket a person belongs to: callers classify the current age against the
//! current set every time, so redefining the breaks can never leave a stale
//! membership behind.

use std::fmt;

use crate::{CampaignError, CampaignResult};

// ── AgeInterval ──────────────────────────────────────────────────────────────

/// A half-open age range `[start, end)`.  `end == None` means unbounded.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgeInterval {
    pub start: u32,
    pub end:   Option<u32>,
}

impl AgeInterval {
    pub const fn new(start: u32, end: Option<u32>) -> Self {
        Self { start, end }
    }

    /// `true` if `age` falls inside `[start, end)`.
    #[inline]
    pub fn contains(&self, age: u32) -> bool {
        age >= self.start && self.end.is_none_or(|end| age < end)
    }

    /// `true` for the last bracket, which has no upper bound.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.end.is_none()
    }

    /// Stable label used as a map key in reports, e.g. `"[40,60)"` or `"[60,+)"`.
    ///
    /// The upper bound is printed with at least two digits (`"[0,05)"`).
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AgeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "[{},{:02})", self.start, end),
            None      => write!(f, "[{},+)", self.start),
        }
    }
}

// ── AgeIntervals ─────────────────────────────────────────────────────────────

/// An ordered, gap-free, non-overlapping partition of `[0, +inf)`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgeIntervals {
    /// Sorted ascending by `start`; first starts at 0, last is unbounded.
    intervals: Vec<AgeInterval>,
}

impl AgeIntervals {
    /// Build the partition from its breaks.
    ///
    /// Fails with [`CampaignError::Config`] if `breaks` is empty, contains 0,
    /// or is not strictly ascending.
    pub fn from_breaks(breaks: &[u32]) -> CampaignResult<Self> {
        let Some(&last) = breaks.last() else {
            return Err(CampaignError::Config(
                "age intervals need at least one break".into(),
            ));
        };
        if breaks.contains(&0) {
            return Err(CampaignError::Config(
                "age interval breaks must be positive".into(),
            ));
        }
        if let Some(pair) = breaks.windows(2).find(|w| w[0] >= w[1]) {
            return Err(CampaignError::Config(format!(
                "age interval breaks must be strictly ascending ({} then {})",
                pair[0], pair[1]
            )));
        }

        let mut intervals = Vec::with_capacity(breaks.len() + 1);
        let mut start = 0;
        for &b in breaks {
            intervals.push(AgeInterval::new(start, Some(b)));
            start = b;
        }
        intervals.push(AgeInterval::new(last, None));

        Ok(Self { intervals })
    }

    /// The unique bracket containing `age`.
    pub fn classify(&self, age: u32) -> AgeInterval {
        // Index of the last interval whose start is <= age.  The first start
        // is 0, so the partition point is always >= 1.
        let idx = self.intervals.partition_point(|i| i.start <= age);
        self.intervals[idx.saturating_sub(1)]
    }

    /// Brackets in ascending `start` order.
    pub fn ascending(&self) -> &[AgeInterval] {
        &self.intervals
    }

    /// Brackets oldest-first.  This order drives allocation priority.
    pub fn by_descending_start(&self) -> impl Iterator<Item = AgeInterval> + '_ {
        self.intervals.iter().rev().copied()
    }

    /// The bracket with the highest `start` (the unbounded one).
    pub fn oldest(&self) -> AgeInterval {
        self.intervals[self.intervals.len() - 1]
    }

    /// Labels in ascending order.
    pub fn labels(&self) -> Vec<String> {
        self.intervals.iter().map(AgeInterval::label).collect()
    }

    /// Look a bracket up by its label.
    pub fn find_label(&self, label: &str) -> Option<AgeInterval> {
        self.intervals.iter().copied().find(|i| i.label() == label)
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Always `false`: a built partition has at least two brackets.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}
