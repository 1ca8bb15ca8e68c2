//! # Cross-Reference Graph
//!
//! Cross-references arrive as directed `{source, target, mappingType}`
//! records but mean the same thing in both directions. The graph normalizes
//! them once at load time into an adjacency list
//! `clause id → [{otherClauseId, mappingType}]` so no downstream component
//! ever branches on edge direction.
//!
//! Self-referencing edges are dropped. Neighbor lists keep the order of
//! the incoming edge list, which keeps every consumer deterministic.

use std::collections::HashMap;

use crosswalk_core::{ClauseCrossReference, ClauseId, MappingType};

/// The far end of a normalized edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor {
    /// Clause on the other side of the edge.
    pub clause_id: ClauseId,
    /// Strength of the edge.
    pub mapping_type: MappingType,
}

/// Undirected adjacency view over a cross-reference snapshot.
#[derive(Debug, Clone, Default)]
pub struct CrossReferenceGraph {
    adjacency: HashMap<ClauseId, Vec<Neighbor>>,
    edge_count: usize,
}

impl CrossReferenceGraph {
    /// Normalize an edge list.
    pub fn from_edges(edges: &[ClauseCrossReference]) -> Self {
        let mut graph = Self::default();
        for edge in edges {
            graph.insert(edge);
        }
        tracing::trace!(
            edges = graph.edge_count,
            clauses = graph.adjacency.len(),
            "normalized cross-reference graph"
        );
        graph
    }

    fn insert(&mut self, edge: &ClauseCrossReference) {
        if edge.source_clause_id == edge.target_clause_id {
            return;
        }
        self.adjacency
            .entry(edge.source_clause_id.clone())
            .or_default()
            .push(Neighbor {
                clause_id: edge.target_clause_id.clone(),
                mapping_type: edge.mapping_type,
            });
        self.adjacency
            .entry(edge.target_clause_id.clone())
            .or_default()
            .push(Neighbor {
                clause_id: edge.source_clause_id.clone(),
                mapping_type: edge.mapping_type,
            });
        self.edge_count += 1;
    }

    /// Every neighbor of a clause, whichever side of the edge it was on.
    pub fn neighbors(&self, clause: &ClauseId) -> &[Neighbor] {
        self.adjacency
            .get(clause)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Neighbors reached through `EQUIVALENT` edges only.
    pub fn equivalents<'a>(&'a self, clause: &ClauseId) -> impl Iterator<Item = &'a ClauseId> + 'a {
        self.neighbors(clause)
            .iter()
            .filter(|n| n.mapping_type.is_equivalent())
            .map(|n| &n.clause_id)
    }

    /// Number of edges retained (self-loops excluded).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of clauses touched by at least one edge.
    pub fn clause_count(&self) -> usize {
        self.adjacency.len()
    }
}
