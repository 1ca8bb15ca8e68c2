//! # Gap Cascade Detection
//!
//! A deficiency in one clause threatens every clause in another standard it
//! is cross-referenced with. For each non-covered clause the detector
//! collects those clauses (single hop, any mapping type) and reports how many
//! standards the deficiency reaches.
//!
//! ## Ordering
//!
//! - Targets: `EQUIVALENT` first, then `RELATED`, then `SUPPORTING`; by
//!   standard code within a tier.
//! - Cascades: largest `impactCount` first, then by source clause number.
//!
//! Each clause is processed at most once as a source. The walk never
//! follows a target's own edges, so fan-out is bounded by the degree of the
//! source.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crosswalk_core::{compare_clause_numbers, ClauseId, CoverageStatus, MappingType, StandardCode};

use crate::graph::CrossReferenceGraph;
use crate::universe::{ClauseUniverse, UniverseClause};

/// Identity and status of a clause inside a cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClauseRef {
    /// Catalog identifier.
    pub clause_id: ClauseId,
    /// Dotted clause number.
    pub clause_number: String,
    /// Clause title.
    pub title: String,
    /// Owning standard code.
    pub standard_code: StandardCode,
    /// Owning standard display name.
    pub standard_name: String,
    /// Coverage status.
    pub status: CoverageStatus,
}

impl From<&UniverseClause> for ClauseRef {
    fn from(c: &UniverseClause) -> Self {
        Self {
            clause_id: c.clause_id.clone(),
            clause_number: c.clause_number.clone(),
            title: c.title.clone(),
            standard_code: c.standard_code.clone(),
            standard_name: c.standard_name.clone(),
            status: c.status,
        }
    }
}

/// A clause put at risk by the cascade source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CascadeTarget {
    /// The affected clause.
    #[serde(flatten)]
    pub clause: ClauseRef,
    /// Strongest mapping connecting it to the source.
    pub mapping_type: MappingType,
}

/// Risk propagated from one non-covered clause into other standards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapCascade {
    /// The deficient clause.
    pub source: ClauseRef,
    /// Clauses in other standards linked to it.
    pub targets: Vec<CascadeTarget>,
    /// Distinct standards touched, the source's own included.
    pub impact_count: usize,
    /// Distinct target standards, sorted.
    pub affected_standards: Vec<StandardCode>,
}

/// Detect every gap cascade in the universe.
pub fn detect_gap_cascades(
    universe: &ClauseUniverse,
    graph: &CrossReferenceGraph,
) -> Vec<GapCascade> {
    let mut processed: HashSet<&ClauseId> = HashSet::new();
    let mut cascades = Vec::new();

    for clause in universe.iter() {
        if clause.status.is_covered() || !processed.insert(&clause.clause_id) {
            continue;
        }
        if let Some(cascade) = cascade_from(clause, universe, graph) {
            cascades.push(cascade);
        }
    }

    cascades.sort_by(|a, b| {
        b.impact_count
            .cmp(&a.impact_count)
            .then_with(|| compare_clause_numbers(&a.source.clause_number, &b.source.clause_number))
            .then_with(|| a.source.standard_code.cmp(&b.source.standard_code))
            .then_with(|| a.source.clause_id.cmp(&b.source.clause_id))
    });

    tracing::debug!(
        cascades = cascades.len(),
        max_impact = cascades.first().map(|c| c.impact_count).unwrap_or(0),
        "detected gap cascades"
    );
    cascades
}

fn cascade_from(
    source: &UniverseClause,
    universe: &ClauseUniverse,
    graph: &CrossReferenceGraph,
) -> Option<GapCascade> {
    let mut targets: Vec<CascadeTarget> = Vec::new();
    let mut positions: HashMap<&ClauseId, usize> = HashMap::new();

    for neighbor in graph.neighbors(&source.clause_id) {
        let Some(other) = universe.get(&neighbor.clause_id) else {
            continue;
        };
        if other.standard_code == source.standard_code {
            continue;
        }
        match positions.get(&other.clause_id) {
            Some(&pos) => {
                let existing = &mut targets[pos].mapping_type;
                *existing = existing.strongest(neighbor.mapping_type);
            }
            None => {
                positions.insert(&other.clause_id, targets.len());
                targets.push(CascadeTarget {
                    clause: ClauseRef::from(other),
                    mapping_type: neighbor.mapping_type,
                });
            }
        }
    }

    if targets.is_empty() {
        return None;
    }

    targets.sort_by(|a, b| {
        a.mapping_type
            .cmp(&b.mapping_type)
            .then_with(|| a.clause.standard_code.cmp(&b.clause.standard_code))
            .then_with(|| compare_clause_numbers(&a.clause.clause_number, &b.clause.clause_number))
            .then_with(|| a.clause.clause_id.cmp(&b.clause.clause_id))
    });

    let affected: BTreeSet<StandardCode> = targets
        .iter()
        .map(|t| t.clause.standard_code.clone())
        .collect();
    // Targets never share the source's standard, so the source adds exactly one.
    let impact_count = affected.len() + 1;

    Some(GapCascade {
        source: ClauseRef::from(source),
        targets,
        impact_count,
        affected_standards: affected.into_iter().collect(),
    })
}
