//! # Integration Scorer
//!
//! Measures how much duplication exists across the active standards and
//! where it sits.
//!
//! ```text
//! efficiencyPercent = round((1 − uniqueRequirements / totalClauses) × 100)
//! ```
//!
//! A "saving" is an equivalence class with more than one member spanning
//! more than one standard: one piece of evidence satisfies several
//! certifications at once. Classes confined to a single standard represent
//! no cross-standard duplication and are never reported.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crosswalk_core::{compare_clause_numbers, top_level_segment, ClauseId, HlsTaxonomy, StandardCode};

use crate::universe::{ClauseUniverse, EquivalenceClass};

/// Duplication metrics across the clause universe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationScore {
    /// Number of tracked clauses.
    pub total_clauses: usize,
    /// Number of equivalence classes.
    pub unique_requirements: usize,
    /// Share of clauses absorbed by deduplication, in percent.
    pub efficiency_percent: u32,
    /// Cross-standard duplicated requirements, largest first.
    pub savings: Vec<RequirementSaving>,
}

/// One requirement shared across standards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementSaving {
    /// Top-level group number the requirement sits under.
    pub hls_group: String,
    /// Title of that group, when the taxonomy knows it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls_title: Option<String>,
    /// Number of clauses collapsed into this requirement.
    pub raw_count: usize,
    /// Distinct standards involved, sorted.
    pub standards: Vec<StandardCode>,
    /// Member clause ids, sorted.
    pub clause_ids: Vec<ClauseId>,
}

/// `round(numerator / denominator × 100)`, or 0 for an empty denominator.
pub(crate) fn round_percent(numerator: f64, denominator: usize) -> u32 {
    if denominator == 0 {
        return 0;
    }
    let pct = (numerator / denominator as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u32
}

/// Score the duplication present in `classes`.
pub fn score_integration(
    universe: &ClauseUniverse,
    classes: &[EquivalenceClass],
    taxonomy: &HlsTaxonomy,
) -> IntegrationScore {
    let total_clauses = universe.len();
    let unique_requirements = classes.len();
    let efficiency_percent = if total_clauses > 0 {
        round_percent((total_clauses - unique_requirements.min(total_clauses)) as f64, total_clauses)
    } else {
        0
    };

    let mut savings: Vec<RequirementSaving> = classes
        .iter()
        .filter(|class| class.len() > 1)
        .filter_map(|class| saving_for(class, universe, taxonomy))
        .collect();
    savings.sort_by(|a, b| {
        b.raw_count
            .cmp(&a.raw_count)
            .then_with(|| compare_clause_numbers(&a.hls_group, &b.hls_group))
            .then_with(|| a.standards.cmp(&b.standards))
            .then_with(|| a.clause_ids.cmp(&b.clause_ids))
    });

    tracing::debug!(
        total_clauses,
        unique_requirements,
        efficiency_percent,
        savings = savings.len(),
        "scored integration"
    );

    IntegrationScore {
        total_clauses,
        unique_requirements,
        efficiency_percent,
        savings,
    }
}

fn saving_for(
    class: &EquivalenceClass,
    universe: &ClauseUniverse,
    taxonomy: &HlsTaxonomy,
) -> Option<RequirementSaving> {
    let standards = class.standards(universe);
    if standards.len() < 2 {
        return None;
    }
    let anchor = class
        .resolve(universe)
        .min_by(|a, b| match compare_clause_numbers(&a.clause_number, &b.clause_number) {
            Ordering::Equal => a.clause_id.cmp(&b.clause_id),
            ord => ord,
        })?;
    let hls_group = top_level_segment(&anchor.clause_number).to_string();
    Some(RequirementSaving {
        hls_title: taxonomy.title_of(&hls_group).map(str::to_string),
        hls_group,
        raw_count: class.len(),
        standards,
        clause_ids: class.members.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CrossReferenceGraph;
    use crate::universe::build_equivalence_classes;
    use crate::universe::fixtures::*;
    use crosswalk_core::{CoverageStatus, MappingType};

    fn score(
        t: &crosswalk_core::CoverageTree,
        edges: &[crosswalk_core::ClauseCrossReference],
    ) -> IntegrationScore {
        let u = ClauseUniverse::from_tree(t);
        let g = CrossReferenceGraph::from_edges(edges);
        let classes = build_equivalence_classes(&u, &g);
        score_integration(&u, &classes, &HlsTaxonomy::default())
    }

    #[test]
    fn empty_universe_scores_zero() {
        let s = score(&tree(vec![]), &[]);
        assert_eq!(s.total_clauses, 0);
        assert_eq!(s.unique_requirements, 0);
        assert_eq!(s.efficiency_percent, 0);
        assert!(s.savings.is_empty());
    }

    #[test]
    fn no_duplication_scores_zero_efficiency() {
        let t = tree(vec![
            standard("A", vec![top("4", vec![leaf("a1", "4.1", CoverageStatus::Gap)])]),
            standard("B", vec![top("4", vec![leaf("b1", "4.1", CoverageStatus::Gap)])]),
        ]);
        let s = score(&t, &[edge("a1", "b1", MappingType::Related)]);
        assert_eq!(s.unique_requirements, 2);
        assert_eq!(s.efficiency_percent, 0);
        assert!(s.savings.is_empty());
    }

    #[test]
    fn cross_standard_class_produces_saving() {
        let t = tree(vec![
            standard("A", vec![top("4", vec![leaf("a1", "4.1", CoverageStatus::Gap)])]),
            standard("B", vec![top("4", vec![leaf("b1", "4.1", CoverageStatus::Covered)])]),
        ]);
        let s = score(&t, &[edge("a1", "b1", MappingType::Equivalent)]);
        assert_eq!(s.total_clauses, 2);
        assert_eq!(s.unique_requirements, 1);
        assert_eq!(s.efficiency_percent, 50);
        assert_eq!(s.savings.len(), 1);
        let saving = &s.savings[0];
        assert_eq!(saving.hls_group, "4");
        assert_eq!(saving.hls_title.as_deref(), Some("Context of the organization"));
        assert_eq!(saving.raw_count, 2);
        assert_eq!(saving.standards, vec![code("A"), code("B")]);
    }

    #[test]
    fn single_standard_class_is_not_a_saving() {
        let t = tree(vec![standard(
            "A",
            vec![top(
                "7",
                vec![
                    leaf("a1", "7.1", CoverageStatus::Gap),
                    leaf("a2", "7.2", CoverageStatus::Gap),
                ],
            )],
        )]);
        let s = score(&t, &[edge("a1", "a2", MappingType::Equivalent)]);
        assert_eq!(s.unique_requirements, 1);
        assert_eq!(s.efficiency_percent, 50);
        assert!(s.savings.is_empty());
    }

    #[test]
    fn savings_sorted_by_raw_count_descending() {
        let t = tree(vec![
            standard(
                "A",
                vec![
                    top("5", vec![leaf("a5", "5.1", CoverageStatus::Gap)]),
                    top("9", vec![leaf("a9", "9.1", CoverageStatus::Gap)]),
                ],
            ),
            standard(
                "B",
                vec![
                    top("5", vec![leaf("b5", "5.1", CoverageStatus::Gap)]),
                    top("9", vec![leaf("b9", "9.1", CoverageStatus::Gap)]),
                ],
            ),
            standard("C", vec![top("9", vec![leaf("c9", "9.1", CoverageStatus::Gap)])]),
        ]);
        let s = score(
            &t,
            &[
                edge("a5", "b5", MappingType::Equivalent),
                edge("a9", "b9", MappingType::Equivalent),
                edge("c9", "b9", MappingType::Equivalent),
            ],
        );
        assert_eq!(s.savings.len(), 2);
        assert_eq!(s.savings[0].hls_group, "9");
        assert_eq!(s.savings[0].raw_count, 3);
        assert_eq!(s.savings[1].hls_group, "5");
        // 5 clauses, 2 classes: round(60.0) = 60
        assert_eq!(s.efficiency_percent, 60);
    }

    #[test]
    fn round_percent_handles_edges() {
        assert_eq!(round_percent(1.0, 3), 33);
        assert_eq!(round_percent(2.0, 3), 67);
        assert_eq!(round_percent(1.0, 2), 50);
        assert_eq!(round_percent(5.0, 0), 0);
    }
}
