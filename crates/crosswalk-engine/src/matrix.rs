//! # Shared Requirements Matrix
//!
//! Projects each standard's top-level clauses onto the HLS groups for a
//! side-by-side comparison. Standards built on the high-level structure put
//! logically identical requirements under the same top-level number, so a
//! group whose aggregate status differs between standards means the
//! organization contradicts itself about one requirement across two
//! certifications.
//!
//! ## Aggregation policy
//!
//! A top-level clause aggregates its children as:
//!
//! - `COVERED` when every child is `COVERED` (including when it has none),
//! - otherwise `PARTIAL` when any child is `COVERED` or `PARTIAL`,
//! - otherwise `GAP`.
//!
//! So a single `GAP` among covered siblings yields `PARTIAL`, not `GAP`.
//! This is a reporting policy, not something derived from the standards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crosswalk_core::{
    is_top_level_match, CoverageStatus, CoverageTree, HlsTaxonomy, StandardCode, TopLevelClause,
};

/// One HLS group compared across the standards that implement it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedRequirementRow {
    /// Group number.
    pub hls_group: String,
    /// Group title.
    pub hls_title: String,
    /// One cell per standard implementing the group, in coverage-tree order.
    pub cells: Vec<MatrixCell>,
    /// Whether the cells disagree on status.
    pub has_inconsistency: bool,
}

/// A standard's aggregate status for one HLS group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixCell {
    /// Standard code.
    pub standard_code: StandardCode,
    /// Standard display name.
    pub standard_name: String,
    /// Matched top-level clause number, as written by the standard.
    pub clause_number: String,
    /// Matched top-level clause title.
    pub clause_title: String,
    /// Aggregate status of the top-level clause.
    pub status: CoverageStatus,
    /// Number of leaf clauses aggregated.
    pub child_count: usize,
}

/// Aggregate the children of a top-level clause.
pub fn aggregate_status(clause: &TopLevelClause) -> CoverageStatus {
    let children = &clause.children;
    if children.iter().all(|c| c.status.is_covered()) {
        CoverageStatus::Covered
    } else if children
        .iter()
        .any(|c| matches!(c.status, CoverageStatus::Covered | CoverageStatus::Partial))
    {
        CoverageStatus::Partial
    } else {
        CoverageStatus::Gap
    }
}

/// Build the shared requirements matrix.
///
/// Only groups implemented by two or more standards produce a row.
pub fn build_shared_requirements(
    tree: &CoverageTree,
    taxonomy: &HlsTaxonomy,
) -> Vec<SharedRequirementRow> {
    let rows: Vec<SharedRequirementRow> = taxonomy
        .groups()
        .iter()
        .filter_map(|group| {
            let cells: Vec<MatrixCell> = tree
                .standards
                .iter()
                .filter_map(|standard| {
                    let top = standard
                        .clauses
                        .iter()
                        .find(|c| is_top_level_match(&c.clause_number, &group.number))?;
                    Some(MatrixCell {
                        standard_code: standard.code.clone(),
                        standard_name: standard.name.clone(),
                        clause_number: top.clause_number.clone(),
                        clause_title: top.title.clone(),
                        status: aggregate_status(top),
                        child_count: top.children.len(),
                    })
                })
                .collect();
            if cells.len() < 2 {
                return None;
            }
            let distinct: HashSet<CoverageStatus> = cells.iter().map(|c| c.status).collect();
            Some(SharedRequirementRow {
                hls_group: group.number.clone(),
                hls_title: group.title.clone(),
                has_inconsistency: distinct.len() > 1,
                cells,
            })
        })
        .collect();

    tracing::debug!(
        rows = rows.len(),
        inconsistent = rows.iter().filter(|r| r.has_inconsistency).count(),
        "built shared requirements matrix"
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::universe::fixtures::*;
    use crosswalk_core::HlsGroup;

    #[test]
    fn aggregate_all_covered() {
        let t = top(
            "4",
            vec![
                leaf("a", "4.1", CoverageStatus::Covered),
                leaf("b", "4.2", CoverageStatus::Covered),
            ],
        );
        assert_eq!(aggregate_status(&t), CoverageStatus::Covered);
    }

    #[test]
    fn aggregate_single_gap_among_covered_is_partial() {
        let t = top(
            "4",
            vec![
                leaf("a", "4.1", CoverageStatus::Covered),
                leaf("b", "4.2", CoverageStatus::Gap),
            ],
        );
        assert_eq!(aggregate_status(&t), CoverageStatus::Partial);
    }

    #[test]
    fn aggregate_partial_and_gap_is_partial() {
        let t = top(
            "4",
            vec![
                leaf("a", "4.1", CoverageStatus::Partial),
                leaf("b", "4.2", CoverageStatus::Gap),
            ],
        );
        assert_eq!(aggregate_status(&t), CoverageStatus::Partial);
    }

    #[test]
    fn aggregate_all_gap() {
        let t = top("4", vec![leaf("a", "4.1", CoverageStatus::Gap)]);
        assert_eq!(aggregate_status(&t), CoverageStatus::Gap);
    }

    #[test]
    fn aggregate_without_children_is_covered() {
        assert_eq!(aggregate_status(&top("4", vec![])), CoverageStatus::Covered);
    }

    #[test]
    fn rows_require_two_standards() {
        let t = tree(vec![
            standard(
                "A",
                vec![
                    top("4", vec![leaf("a4", "4.1", CoverageStatus::Covered)]),
                    top("5", vec![leaf("a5", "5.1", CoverageStatus::Covered)]),
                ],
            ),
            standard("B", vec![top("4.", vec![leaf("b4", "4.1", CoverageStatus::Gap)])]),
        ]);
        let rows = build_shared_requirements(&t, &HlsTaxonomy::default());
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.hls_group, "4");
        assert_eq!(row.hls_title, "Context of the organization");
        assert_eq!(row.cells.len(), 2);
        assert_eq!(row.cells[1].clause_number, "4.");
        assert!(row.has_inconsistency);
    }

    #[test]
    fn consistent_rows_are_not_flagged() {
        let t = tree(vec![
            standard("A", vec![top("7", vec![leaf("a", "7.1", CoverageStatus::Partial)])]),
            standard("B", vec![top("7", vec![leaf("b", "7.1", CoverageStatus::Partial)])]),
            standard("C", vec![top("7", vec![leaf("c", "7.1", CoverageStatus::Partial)])]),
        ]);
        let rows = build_shared_requirements(&t, &HlsTaxonomy::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells.len(), 3);
        assert!(!rows[0].has_inconsistency);
    }

    #[test]
    fn rows_follow_taxonomy_order() {
        let t = tree(vec![
            standard(
                "A",
                vec![
                    top("10", vec![leaf("a10", "10.1", CoverageStatus::Gap)]),
                    top("6", vec![leaf("a6", "6.1", CoverageStatus::Gap)]),
                ],
            ),
            standard(
                "B",
                vec![
                    top("6", vec![leaf("b6", "6.1", CoverageStatus::Gap)]),
                    top("10", vec![leaf("b10", "10.1", CoverageStatus::Gap)]),
                ],
            ),
        ]);
        let groups: Vec<String> = build_shared_requirements(&t, &HlsTaxonomy::default())
            .into_iter()
            .map(|r| r.hls_group)
            .collect();
        assert_eq!(groups, vec!["6", "10"]);
    }

    #[test]
    fn alternate_taxonomy_is_honored() {
        let t = tree(vec![
            standard("A", vec![top("A", vec![leaf("a", "A.1", CoverageStatus::Gap)])]),
            standard("B", vec![top("A", vec![leaf("b", "A.1", CoverageStatus::Covered)])]),
        ]);
        let taxonomy = HlsTaxonomy::new(vec![HlsGroup::new("A", "Annex controls")]);
        let rows = build_shared_requirements(&t, &taxonomy);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].hls_title, "Annex controls");
        assert!(build_shared_requirements(&t, &HlsTaxonomy::default()).is_empty());
    }
}
