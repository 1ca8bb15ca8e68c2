//! # Data Sources
//!
//! The engine reads everything it analyzes through four adapter traits:
//! coverage trees, the cross-reference edge list, document classifications,
//! and the clause catalog. Hosts back them with whatever store holds the gap
//! analysis; the in-memory `Static*` adapters serve tests and file-backed
//! tooling.
//!
//! Adapters are `Send + Sync` and return `Send` futures so the engine can be
//! driven from a multi-threaded runtime.

use std::collections::HashMap;
use std::future::Future;

use crosswalk_core::{
    ClauseCrossReference, CoverageTree, DocumentClassification, DocumentId, SourceError,
    StandardClause,
};

use crate::engine::AnalysisScope;

/// Supplies the coverage tree produced by the gap analysis.
pub trait CoverageSource: Send + Sync {
    /// Coverage for the organization in `scope`, optionally narrowed to one
    /// standard and one project.
    fn coverage_tree(
        &self,
        scope: &AnalysisScope,
    ) -> impl Future<Output = Result<CoverageTree, SourceError>> + Send;

    /// Human-readable adapter name, used in logs.
    fn source_name(&self) -> &str;
}

/// Supplies the global clause cross-reference list.
pub trait CrossReferenceSource: Send + Sync {
    /// Every declared cross-reference, in any direction.
    fn cross_references(
        &self,
    ) -> impl Future<Output = Result<Vec<ClauseCrossReference>, SourceError>> + Send;

    /// Human-readable adapter name, used in logs.
    fn source_name(&self) -> &str;
}

/// Supplies the clause classifications recorded for a document.
pub trait ClassificationSource: Send + Sync {
    /// Classifications of `document`. An unknown document has none.
    fn classifications(
        &self,
        document: &DocumentId,
    ) -> impl Future<Output = Result<Vec<DocumentClassification>, SourceError>> + Send;
}

/// Supplies clause metadata across every standard.
pub trait ClauseCatalog: Send + Sync {
    /// Every known clause.
    fn clauses(&self) -> impl Future<Output = Result<Vec<StandardClause>, SourceError>> + Send;
}

/// A fixed coverage tree.
///
/// The scope's standard code narrows the tree; organization and project are
/// ignored because the tree already belongs to one of each.
#[derive(Debug, Clone, Default)]
pub struct StaticCoverage {
    tree: CoverageTree,
}

impl StaticCoverage {
    /// Serve `tree` for every scope.
    pub fn new(tree: CoverageTree) -> Self {
        Self { tree }
    }

    /// The underlying tree.
    pub fn tree(&self) -> &CoverageTree {
        &self.tree
    }
}

impl CoverageSource for StaticCoverage {
    fn coverage_tree(
        &self,
        scope: &AnalysisScope,
    ) -> impl Future<Output = Result<CoverageTree, SourceError>> + Send {
        let mut tree = self.tree.clone();
        if let Some(code) = &scope.standard_code {
            tree.retain_standard(code);
        }
        std::future::ready(Ok(tree))
    }

    fn source_name(&self) -> &str {
        "static-coverage"
    }
}

/// A fixed edge list.
#[derive(Debug, Clone, Default)]
pub struct StaticCrossReferences {
    edges: Vec<ClauseCrossReference>,
}

impl StaticCrossReferences {
    /// Serve `edges`.
    pub fn new(edges: Vec<ClauseCrossReference>) -> Self {
        Self { edges }
    }
}

impl CrossReferenceSource for StaticCrossReferences {
    fn cross_references(
        &self,
    ) -> impl Future<Output = Result<Vec<ClauseCrossReference>, SourceError>> + Send {
        std::future::ready(Ok(self.edges.clone()))
    }

    fn source_name(&self) -> &str {
        "static-cross-references"
    }
}

/// Classifications keyed by document.
#[derive(Debug, Clone, Default)]
pub struct StaticClassifications {
    by_document: HashMap<DocumentId, Vec<DocumentClassification>>,
}

impl StaticClassifications {
    /// Serve the given map.
    pub fn new(by_document: HashMap<DocumentId, Vec<DocumentClassification>>) -> Self {
        Self { by_document }
    }

    /// Record the classifications of one document, replacing any previous ones.
    pub fn insert(&mut self, document: DocumentId, classifications: Vec<DocumentClassification>) {
        self.by_document.insert(document, classifications);
    }
}

impl ClassificationSource for StaticClassifications {
    fn classifications(
        &self,
        document: &DocumentId,
    ) -> impl Future<Output = Result<Vec<DocumentClassification>, SourceError>> + Send {
        let found = self.by_document.get(document).cloned().unwrap_or_default();
        std::future::ready(Ok(found))
    }
}

/// A fixed clause catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    clauses: Vec<StandardClause>,
}

impl StaticCatalog {
    /// Serve `clauses`.
    pub fn new(clauses: Vec<StandardClause>) -> Self {
        Self { clauses }
    }

    /// Derive the catalog from the leaves of a coverage tree.
    pub fn from_tree(tree: &CoverageTree) -> Self {
        Self::new(tree.catalog())
    }
}

impl ClauseCatalog for StaticCatalog {
    fn clauses(&self) -> impl Future<Output = Result<Vec<StandardClause>, SourceError>> + Send {
        std::future::ready(Ok(self.clauses.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::universe::fixtures::*;
    use crosswalk_core::{CoverageStatus, MappingType, OrganizationId};

    fn two_standards() -> CoverageTree {
        tree(vec![
            standard("A", vec![top("4", vec![leaf("a1", "4.1", CoverageStatus::Gap)])]),
            standard("B", vec![top("4", vec![leaf("b1", "4.1", CoverageStatus::Covered)])]),
        ])
    }

    #[tokio::test]
    async fn static_coverage_filters_by_standard() {
        let source = StaticCoverage::new(two_standards());
        let org = OrganizationId::new();

        let all = source.coverage_tree(&AnalysisScope::new(org)).await.unwrap();
        assert_eq!(all.standard_count(), 2);

        let scoped = AnalysisScope::new(org).with_standard(code("B"));
        let only_b = source.coverage_tree(&scoped).await.unwrap();
        assert_eq!(only_b.standard_count(), 1);
        assert_eq!(only_b.standards[0].code, code("B"));
    }

    #[tokio::test]
    async fn static_classifications_default_to_empty() {
        let mut source = StaticClassifications::default();
        let doc = DocumentId::new();
        source.insert(doc, vec![DocumentClassification::new(id("a1"), 0.5)]);

        assert_eq!(source.classifications(&doc).await.unwrap().len(), 1);
        assert!(source
            .classifications(&DocumentId::new())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn catalog_from_tree_lists_leaves() {
        let catalog = StaticCatalog::from_tree(&two_standards());
        let clauses = catalog.clauses().await.unwrap();
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[1].standard_code, code("B"));
    }

    #[tokio::test]
    async fn static_cross_references_serve_edges() {
        let source = StaticCrossReferences::new(vec![edge("a1", "b1", MappingType::Related)]);
        assert_eq!(source.cross_references().await.unwrap().len(), 1);
        assert_eq!(source.source_name(), "static-cross-references");
    }
}
