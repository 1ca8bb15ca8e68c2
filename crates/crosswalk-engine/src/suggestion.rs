//! # Document Classification Suggestions
//!
//! A document classified against a clause in one standard usually evidences
//! the `EQUIVALENT` clauses in other standards too. The suggester proposes
//! those clauses as additional classifications.
//!
//! Suggestions are advisory. Nothing here writes a classification; callers
//! present the candidates for confirmation.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crosswalk_core::{
    compare_clause_numbers, ClauseId, DocumentClassification, MappingType, StandardClause,
    StandardCode,
};

use crate::graph::CrossReferenceGraph;

/// Clause metadata indexed by id.
#[derive(Debug, Clone, Default)]
pub struct ClauseIndex {
    clauses: HashMap<ClauseId, StandardClause>,
}

impl ClauseIndex {
    /// Index a catalog snapshot. Later duplicates of an id are ignored.
    pub fn new(clauses: Vec<StandardClause>) -> Self {
        let mut index = HashMap::with_capacity(clauses.len());
        for clause in clauses {
            index.entry(clause.id.clone()).or_insert(clause);
        }
        Self { clauses: index }
    }

    /// Look up a clause.
    pub fn get(&self, id: &ClauseId) -> Option<&StandardClause> {
        self.clauses.get(id)
    }

    /// Number of indexed clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// A candidate classification for a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSuggestion {
    /// The existing classification the suggestion derives from.
    pub source_clause_id: ClauseId,
    /// Its clause number.
    pub source_clause_number: String,
    /// Its standard.
    pub source_standard_code: StandardCode,
    /// The clause proposed for classification.
    pub suggested_clause_id: ClauseId,
    /// Its clause number.
    pub suggested_clause_number: String,
    /// Its title.
    pub suggested_clause_title: String,
    /// Its standard code.
    pub suggested_standard_code: StandardCode,
    /// Its standard display name.
    pub suggested_standard_name: String,
    /// Mapping that produced the suggestion.
    pub mapping_type: MappingType,
    /// Confidence of the originating classification.
    pub confidence: f64,
    /// Whether the document already carries the suggested clause.
    pub already_classified: bool,
}

/// Suggest additional classifications for a document.
///
/// Unclassified suggestions come first, then by suggested standard code.
pub fn suggest_classifications(
    classifications: &[DocumentClassification],
    graph: &CrossReferenceGraph,
    catalog: &ClauseIndex,
) -> Vec<DocumentSuggestion> {
    let classified: HashSet<&ClauseId> = classifications
        .iter()
        .map(|c| &c.standard_clause_id)
        .collect();
    let mut seen: HashSet<(&ClauseId, &ClauseId)> = HashSet::new();
    let mut suggestions = Vec::new();

    for classification in classifications {
        let Some(source) = catalog.get(&classification.standard_clause_id) else {
            tracing::debug!(
                clause_id = %classification.standard_clause_id,
                "classified clause missing from catalog"
            );
            continue;
        };
        for other_id in graph.equivalents(&source.id) {
            let Some(suggested) = catalog.get(other_id) else {
                continue;
            };
            if suggested.standard_code == source.standard_code {
                continue;
            }
            if !seen.insert((&source.id, &suggested.id)) {
                continue;
            }
            suggestions.push(DocumentSuggestion {
                source_clause_id: source.id.clone(),
                source_clause_number: source.clause_number.clone(),
                source_standard_code: source.standard_code.clone(),
                suggested_clause_id: suggested.id.clone(),
                suggested_clause_number: suggested.clause_number.clone(),
                suggested_clause_title: suggested.title.clone(),
                suggested_standard_code: suggested.standard_code.clone(),
                suggested_standard_name: suggested.standard_name.clone(),
                mapping_type: MappingType::Equivalent,
                confidence: classification.confidence,
                already_classified: classified.contains(&suggested.id),
            });
        }
    }

    suggestions.sort_by(|a, b| {
        a.already_classified
            .cmp(&b.already_classified)
            .then_with(|| a.suggested_standard_code.cmp(&b.suggested_standard_code))
            .then_with(|| {
                compare_clause_numbers(&a.suggested_clause_number, &b.suggested_clause_number)
            })
            .then_with(|| a.source_clause_id.cmp(&b.source_clause_id))
    });

    tracing::debug!(
        classifications = classifications.len(),
        suggestions = suggestions.len(),
        "computed classification suggestions"
    );
    suggestions
}
