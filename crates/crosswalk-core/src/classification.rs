//! # Document Classifications
//!
//! A classification ties a document to a catalog clause it provides
//! evidence for, with the confidence of whoever (or whatever) classified it.

use serde::{Deserialize, Serialize};

use crate::identity::ClauseId;

/// An existing classification of a document against one clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentClassification {
    /// The clause the document is classified against.
    pub standard_clause_id: ClauseId,
    /// Classification confidence in `[0, 1]`.
    pub confidence: f64,
}

impl DocumentClassification {
    /// Build a classification.
    pub fn new(standard_clause_id: ClauseId, confidence: f64) -> Self {
        Self {
            standard_clause_id,
            confidence,
        }
    }
}
