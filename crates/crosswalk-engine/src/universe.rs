//! # Clause Universe and Equivalence Classes
//!
//! The clause universe is the flat set of leaf clauses across every active
//! standard in a coverage tree, each annotated with its owning standard and
//! status. Equivalence classes partition that universe: two clauses share a
//! class exactly when a chain of `EQUIVALENT` edges connects them.
//!
//! Edges referencing clauses outside the universe are skipped. Catalog and
//! coverage data may briefly disagree, and an absent clause has no status to
//! contribute anyway.

use std::collections::{BTreeSet, HashMap};

use crosswalk_core::{ClauseId, CoverageStatus, CoverageTree, StandardCode};

use crate::equivalence::DisjointSet;
use crate::graph::CrossReferenceGraph;

/// A leaf clause of the universe with its standard and status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniverseClause {
    /// Catalog identifier.
    pub clause_id: ClauseId,
    /// Dotted clause number.
    pub clause_number: String,
    /// Clause title.
    pub title: String,
    /// Coverage status.
    pub status: CoverageStatus,
    /// Owning standard code.
    pub standard_code: StandardCode,
    /// Owning standard display name.
    pub standard_name: String,
}

/// Every tracked clause, in coverage-tree order, indexed by id.
///
/// A clause id appearing more than once in the tree is tracked once, using
/// its first occurrence.
#[derive(Debug, Clone, Default)]
pub struct ClauseUniverse {
    clauses: Vec<UniverseClause>,
    index: HashMap<ClauseId, usize>,
}

impl ClauseUniverse {
    /// Flatten a coverage tree.
    pub fn from_tree(tree: &CoverageTree) -> Self {
        let mut universe = Self::default();
        for (standard, leaf) in tree.leaves() {
            if universe.index.contains_key(&leaf.clause_id) {
                tracing::debug!(clause_id = %leaf.clause_id, "duplicate clause in coverage tree, keeping first");
                continue;
            }
            universe
                .index
                .insert(leaf.clause_id.clone(), universe.clauses.len());
            universe.clauses.push(UniverseClause {
                clause_id: leaf.clause_id.clone(),
                clause_number: leaf.clause_number.clone(),
                title: leaf.title.clone(),
                status: leaf.status,
                standard_code: standard.code.clone(),
                standard_name: standard.name.clone(),
            });
        }
        universe
    }

    /// Look up a clause.
    pub fn get(&self, clause: &ClauseId) -> Option<&UniverseClause> {
        self.index.get(clause).map(|&i| &self.clauses[i])
    }

    /// Whether the clause is tracked.
    pub fn contains(&self, clause: &ClauseId) -> bool {
        self.index.contains_key(clause)
    }

    /// Iterate clauses in coverage-tree order.
    pub fn iter(&self) -> impl Iterator<Item = &UniverseClause> {
        self.clauses.iter()
    }

    /// Number of tracked clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether no clause is tracked.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// One deduplicated requirement: a set of clauses connected by `EQUIVALENT`
/// edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalenceClass {
    /// Representative chosen by the disjoint-set.
    pub representative: ClauseId,
    /// Members in ascending id order. Never empty.
    pub members: Vec<ClauseId>,
}

impl EquivalenceClass {
    /// Number of member clauses.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`; classes hold at least their representative.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member clauses resolved against the universe.
    pub fn resolve<'u>(
        &'u self,
        universe: &'u ClauseUniverse,
    ) -> impl Iterator<Item = &'u UniverseClause> + 'u {
        self.members.iter().filter_map(move |id| universe.get(id))
    }

    /// Distinct standards spanned by the class, sorted.
    pub fn standards(&self, universe: &ClauseUniverse) -> Vec<StandardCode> {
        self.resolve(universe)
            .map(|c| c.standard_code.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Best status among members.
    pub fn best_status(&self, universe: &ClauseUniverse) -> Option<CoverageStatus> {
        CoverageStatus::best_of(self.resolve(universe).map(|c| c.status))
    }
}

/// Partition the universe into equivalence classes.
///
/// Classes are returned ordered by their smallest member id.
pub fn build_equivalence_classes(
    universe: &ClauseUniverse,
    graph: &CrossReferenceGraph,
) -> Vec<EquivalenceClass> {
    let mut sets = DisjointSet::new();
    for clause in universe.iter() {
        sets.add(clause.clause_id.clone());
    }
    let mut merges = 0usize;
    for clause in universe.iter() {
        for other in graph.equivalents(&clause.clause_id) {
            if universe.contains(other) && sets.union(&clause.clause_id, other) {
                merges += 1;
            }
        }
    }

    let mut classes: Vec<EquivalenceClass> = sets
        .groups()
        .into_iter()
        .map(|(representative, members)| EquivalenceClass {
            representative,
            members: members.into_iter().collect(),
        })
        .collect();
    classes.sort_by(|a, b| a.members.first().cmp(&b.members.first()));

    tracing::debug!(
        clauses = universe.len(),
        classes = classes.len(),
        merges,
        "built equivalence classes"
    );
    classes
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Small coverage trees shared by the engine's unit tests.

    use crosswalk_core::{
        ClauseCoverage, ClauseCrossReference, ClauseId, CoverageStatus, CoverageTree,
        MappingType, StandardCode, StandardCoverage, TopLevelClause,
    };

    pub fn id(s: &str) -> ClauseId {
        ClauseId::new(s).unwrap()
    }

    pub fn code(s: &str) -> StandardCode {
        StandardCode::new(s).unwrap()
    }

    pub fn leaf(clause_id: &str, number: &str, status: CoverageStatus) -> ClauseCoverage {
        ClauseCoverage {
            clause_id: id(clause_id),
            clause_number: number.to_string(),
            title: format!("Clause {number}"),
            status,
        }
    }

    pub fn top(number: &str, children: Vec<ClauseCoverage>) -> TopLevelClause {
        TopLevelClause {
            clause_number: number.to_string(),
            title: format!("Section {number}"),
            children,
        }
    }

    pub fn standard(c: &str, clauses: Vec<TopLevelClause>) -> StandardCoverage {
        StandardCoverage {
            code: code(c),
            name: format!("{c} standard"),
            coverage_percent: 0,
            clauses,
        }
    }

    pub fn tree(standards: Vec<StandardCoverage>) -> CoverageTree {
        CoverageTree {
            overall_coverage_percent: 0,
            standards,
        }
    }

    pub fn edge(a: &str, b: &str, t: MappingType) -> ClauseCrossReference {
        ClauseCrossReference::new(id(a), id(b), t)
    }
}
