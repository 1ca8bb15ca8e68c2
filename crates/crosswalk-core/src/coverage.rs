//! # Coverage Tree
//!
//! The snapshot delivered by the external gap analysis: for each active
//! standard, its top-level (HLS) clauses, each holding the leaf clauses
//! with their [`CoverageStatus`].
//!
//! ```text
//! CoverageTree
//!   └─ StandardCoverage   (code, name, coveragePercent)
//!        └─ TopLevelClause   ("4", "Context of the organization")
//!             └─ ClauseCoverage   (clauseId, "4.1", title, status)
//! ```
//!
//! The leaf clauses across all standards form the clause universe the
//! engine deduplicates.

use serde::{Deserialize, Serialize};

use crate::clause::StandardClause;
use crate::identity::{ClauseId, StandardCode};
use crate::status::{CoverageStatus, StatusCounts};

/// Per-standard coverage snapshot for one organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageTree {
    /// Naive coverage percentage across every clause of every standard.
    #[serde(default)]
    pub overall_coverage_percent: u32,
    /// Active standards, in the order the gap analysis returned them.
    #[serde(default)]
    pub standards: Vec<StandardCoverage>,
}

/// Coverage of a single standard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardCoverage {
    /// Standard code.
    pub code: StandardCode,
    /// Standard display name.
    pub name: String,
    /// Coverage percentage of this standard alone.
    #[serde(default)]
    pub coverage_percent: u32,
    /// Top-level clauses with their children.
    #[serde(default)]
    pub clauses: Vec<TopLevelClause>,
}

/// A top-level clause grouping leaf requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopLevelClause {
    /// Top-level number, e.g. `"4"` or `"4."`.
    pub clause_number: String,
    /// Top-level title.
    pub title: String,
    /// Leaf clauses under this heading.
    #[serde(default)]
    pub children: Vec<ClauseCoverage>,
}

/// A leaf clause with its coverage status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClauseCoverage {
    /// Catalog identifier.
    pub clause_id: ClauseId,
    /// Dotted clause number.
    pub clause_number: String,
    /// Clause title.
    pub title: String,
    /// Coverage status from the gap analysis.
    pub status: CoverageStatus,
}

impl CoverageTree {
    /// Number of active standards.
    pub fn standard_count(&self) -> usize {
        self.standards.len()
    }

    /// Iterate every leaf clause together with its owning standard.
    pub fn leaves(&self) -> impl Iterator<Item = (&StandardCoverage, &ClauseCoverage)> {
        self.standards
            .iter()
            .flat_map(|standard| standard.leaves().map(move |leaf| (standard, leaf)))
    }

    /// Number of leaf clauses across all standards.
    pub fn leaf_count(&self) -> usize {
        self.standards.iter().map(|s| s.leaves().count()).sum()
    }

    /// Restrict the tree to one standard. Returns a tree with no standards
    /// when the code is not present.
    ///
    /// `overall_coverage_percent` is recomputed from the kept standards so
    /// the baseline never describes standards outside the tree.
    pub fn retain_standard(&mut self, code: &StandardCode) {
        self.standards.retain(|s| &s.code == code);
        self.overall_coverage_percent = match self.standards.len() {
            0 => 0,
            n => {
                let sum: u64 = self.standards.iter().map(|s| u64::from(s.coverage_percent)).sum();
                ((sum as f64 / n as f64).round() as u32).min(100)
            }
        };
    }

    /// Catalog view of every leaf clause.
    pub fn catalog(&self) -> Vec<StandardClause> {
        self.leaves()
            .map(|(standard, leaf)| StandardClause {
                id: leaf.clause_id.clone(),
                clause_number: leaf.clause_number.clone(),
                title: leaf.title.clone(),
                standard_code: standard.code.clone(),
                standard_name: standard.name.clone(),
            })
            .collect()
    }
}

impl StandardCoverage {
    /// Iterate the leaf clauses of this standard.
    pub fn leaves(&self) -> impl Iterator<Item = &ClauseCoverage> {
        self.clauses.iter().flat_map(|c| c.children.iter())
    }

    /// Leaf clause counts by status.
    pub fn status_counts(&self) -> StatusCounts {
        self.leaves().map(|leaf| leaf.status).collect()
    }
}
