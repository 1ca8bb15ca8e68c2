//! # Coverage Status: Ranked Per-Clause State
//!
//! Defines [`CoverageStatus`], the externally computed coverage state of a
//! clause, with an explicit total order:
//!
//! ```text
//! Ordering (worst → best): Gap < Partial < Covered
//!
//! best(a, b) = max(a, b)   (equivalence-class readiness)
//! ```
//!
//! Every aggregation that picks a "best" status goes through
//! [`CoverageStatus::rank`]. Statuses are never compared by their string
//! form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coverage state of a single clause, as reported by the gap analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoverageStatus {
    /// The requirement is fully evidenced.
    Covered,
    /// Some evidence exists but the requirement is not fully met.
    Partial,
    /// No evidence exists for the requirement.
    Gap,
}

impl CoverageStatus {
    /// All statuses from best to worst.
    pub const ALL: [CoverageStatus; 3] = [Self::Covered, Self::Partial, Self::Gap];

    /// Rank value. Higher is better.
    pub fn rank(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Partial => 1,
            Self::Covered => 2,
        }
    }

    /// The better of two statuses.
    pub fn best(self, other: Self) -> Self {
        if self.rank() >= other.rank() {
            self
        } else {
            other
        }
    }

    /// Best status across a set, or `None` for an empty set.
    pub fn best_of(statuses: impl IntoIterator<Item = Self>) -> Option<Self> {
        statuses.into_iter().reduce(Self::best)
    }

    /// Whether the clause is fully covered.
    pub fn is_covered(self) -> bool {
        matches!(self, Self::Covered)
    }

    /// Wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Covered => "COVERED",
            Self::Partial => "PARTIAL",
            Self::Gap => "GAP",
        }
    }
}

impl PartialOrd for CoverageStatus {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CoverageStatus {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clause counts broken down by coverage status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    /// Number of `COVERED` entries.
    pub covered: usize,
    /// Number of `PARTIAL` entries.
    pub partial: usize,
    /// Number of `GAP` entries.
    pub gap: usize,
}

impl StatusCounts {
    /// Count one entry with the given status.
    pub fn record(&mut self, status: CoverageStatus) {
        match status {
            CoverageStatus::Covered => self.covered += 1,
            CoverageStatus::Partial => self.partial += 1,
            CoverageStatus::Gap => self.gap += 1,
        }
    }

    /// Total number of counted entries.
    pub fn total(&self) -> usize {
        self.covered + self.partial + self.gap
    }
}

impl FromIterator<CoverageStatus> for StatusCounts {
    fn from_iter<I: IntoIterator<Item = CoverageStatus>>(iter: I) -> Self {
        let mut counts = Self::default();
        for status in iter {
            counts.record(status);
        }
        counts
    }
}
