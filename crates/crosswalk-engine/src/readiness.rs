//! # Consolidated Readiness
//!
//! Recomputes readiness over deduplicated requirements. Each equivalence
//! class counts once, with the best status among its members: evidence that
//! covers a clause in one standard covers the equivalent clause in every
//! other standard.
//!
//! ```text
//! deduplicatedCoverage = round(covered / classes × 100)
//! weightedScore        = round((covered + partial × 0.5) / classes × 100)
//! ```
//!
//! `rawCoverage` is the gap analysis's own naive average across all clauses,
//! passed through as a baseline.

use serde::{Deserialize, Serialize};

use crosswalk_core::{CoverageTree, StandardCode, StatusCounts};

use crate::score::round_percent;
use crate::universe::{ClauseUniverse, EquivalenceClass};

/// Credit given to a requirement whose best status is `PARTIAL`.
pub const PARTIAL_CREDIT: f64 = 0.5;

/// Readiness metrics over deduplicated requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedReadiness {
    /// Number of equivalence classes scored.
    pub total_classes: usize,
    /// Classes whose best status is `COVERED`.
    pub deduplicated_covered: usize,
    /// Classes whose best status is `PARTIAL`.
    pub deduplicated_partial: usize,
    /// Classes whose best status is `GAP`.
    pub deduplicated_gap: usize,
    /// Percentage of classes fully covered.
    pub deduplicated_coverage: u32,
    /// Coverage with half credit for partial classes.
    pub weighted_score: u32,
    /// Naive coverage across all clauses, as reported upstream.
    pub raw_coverage: u32,
    /// Per-standard breakdown, in coverage-tree order.
    pub per_standard: Vec<StandardReadiness>,
}

/// Readiness of one standard on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardReadiness {
    /// Standard code.
    pub code: StandardCode,
    /// Standard display name.
    pub name: String,
    /// Number of leaf clauses.
    pub total_clauses: usize,
    /// Leaf clause counts by status.
    #[serde(flatten)]
    pub counts: StatusCounts,
    /// Coverage percentage reported upstream for this standard.
    pub coverage_percent: u32,
}

/// Compute consolidated readiness.
pub fn consolidate_readiness(
    tree: &CoverageTree,
    universe: &ClauseUniverse,
    classes: &[EquivalenceClass],
) -> ConsolidatedReadiness {
    let tally: StatusCounts = classes
        .iter()
        .filter_map(|class| class.best_status(universe))
        .collect();
    let total_classes = classes.len();

    let deduplicated_coverage = round_percent(tally.covered as f64, total_classes);
    let weighted_score = round_percent(
        tally.covered as f64 + tally.partial as f64 * PARTIAL_CREDIT,
        total_classes,
    );

    let per_standard = tree
        .standards
        .iter()
        .map(|standard| {
            let counts = standard.status_counts();
            StandardReadiness {
                code: standard.code.clone(),
                name: standard.name.clone(),
                total_clauses: counts.total(),
                counts,
                coverage_percent: standard.coverage_percent,
            }
        })
        .collect();

    tracing::debug!(
        total_classes,
        covered = tally.covered,
        partial = tally.partial,
        gap = tally.gap,
        deduplicated_coverage,
        weighted_score,
        "consolidated readiness"
    );

    ConsolidatedReadiness {
        total_classes,
        deduplicated_covered: tally.covered,
        deduplicated_partial: tally.partial,
        deduplicated_gap: tally.gap,
        deduplicated_coverage,
        weighted_score,
        raw_coverage: tree.overall_coverage_percent,
        per_standard,
    }
}
