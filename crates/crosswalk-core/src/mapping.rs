//! # Cross-References
//!
//! A [`ClauseCrossReference`] declares a relationship between two clauses,
//! in practice always in different standards. Edges are stored with a
//! source/target distinction but carry no direction semantics: a clause is
//! matched whether it appears as source or target.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identity::ClauseId;

/// Strength of a cross-reference.
///
/// Ordered strongest first: `Equivalent < Related < Supporting` under
/// [`Ord`], so an ascending sort lists the strongest links first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MappingType {
    /// Same requirement. The only mapping that merges clauses.
    Equivalent,
    /// Thematically linked. Drives suggestions and cascades, never merged.
    Related,
    /// Weak linkage, informational only.
    Supporting,
}

impl MappingType {
    /// Sort tier. Lower is stronger.
    pub fn tier(self) -> u8 {
        match self {
            Self::Equivalent => 0,
            Self::Related => 1,
            Self::Supporting => 2,
        }
    }

    /// Whether this mapping merges clauses into one requirement.
    pub fn is_equivalent(self) -> bool {
        matches!(self, Self::Equivalent)
    }

    /// The stronger of two mapping types.
    pub fn strongest(self, other: Self) -> Self {
        if self.tier() <= other.tier() {
            self
        } else {
            other
        }
    }

    /// Wire name of the mapping type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equivalent => "EQUIVALENT",
            Self::Related => "RELATED",
            Self::Supporting => "SUPPORTING",
        }
    }
}

impl PartialOrd for MappingType {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MappingType {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.tier().cmp(&other.tier())
    }
}

impl fmt::Display for MappingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An edge between two catalog clauses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClauseCrossReference {
    /// Clause on the declared source side.
    pub source_clause_id: ClauseId,
    /// Clause on the declared target side.
    pub target_clause_id: ClauseId,
    /// Strength of the relationship.
    pub mapping_type: MappingType,
}

impl ClauseCrossReference {
    /// Build an edge.
    pub fn new(source: ClauseId, target: ClauseId, mapping_type: MappingType) -> Self {
        Self {
            source_clause_id: source,
            target_clause_id: target,
            mapping_type,
        }
    }
}
