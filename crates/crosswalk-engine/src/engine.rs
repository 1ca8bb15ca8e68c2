//! # Integration Engine
//!
//! Orchestrates one analysis run. The coverage tree and the cross-reference
//! list are fetched concurrently, then the components run in sequence over
//! the in-memory snapshot:
//!
//! ```text
//! coverage tree ──┐
//!                 ├─► universe ─► equivalence classes ─┬─► integration score
//! cross-refs ─────┘        │                           └─► consolidated readiness
//!                          ├─► gap cascades
//! coverage tree ───────────┴─► shared requirements matrix
//! ```
//!
//! Nothing is cached between runs. Two runs over the same data produce the
//! same report.

use serde::{Deserialize, Serialize};

use crosswalk_core::{
    ClauseCrossReference, CoverageTree, CrosswalkError, DocumentId, HlsTaxonomy, OrganizationId,
    ProjectId, StandardCode,
};

use crate::cascade::{detect_gap_cascades, GapCascade};
use crate::graph::CrossReferenceGraph;
use crate::matrix::{build_shared_requirements, SharedRequirementRow};
use crate::readiness::{consolidate_readiness, ConsolidatedReadiness};
use crate::score::{score_integration, IntegrationScore};
use crate::source::{ClassificationSource, ClauseCatalog, CoverageSource, CrossReferenceSource};
use crate::suggestion::{suggest_classifications, ClauseIndex, DocumentSuggestion};
use crate::universe::{build_equivalence_classes, ClauseUniverse};

/// Which coverage an analysis runs over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisScope {
    /// Organization whose coverage is analyzed.
    pub organization_id: OrganizationId,
    /// Restrict to one standard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_code: Option<StandardCode>,
    /// Restrict to one project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
}

impl AnalysisScope {
    /// Every standard and project of `organization_id`.
    pub fn new(organization_id: OrganizationId) -> Self {
        Self {
            organization_id,
            standard_code: None,
            project_id: None,
        }
    }

    /// Narrow to one standard.
    pub fn with_standard(mut self, code: StandardCode) -> Self {
        self.standard_code = Some(code);
        self
    }

    /// Narrow to one project.
    pub fn with_project(mut self, project: ProjectId) -> Self {
        self.project_id = Some(project);
        self
    }
}

/// The aggregate result of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationReport {
    /// Number of standards present in the coverage tree.
    pub active_standard_count: usize,
    /// Duplication metrics.
    pub integration_score: IntegrationScore,
    /// Readiness over deduplicated requirements.
    pub consolidated_readiness: ConsolidatedReadiness,
    /// HLS groups shared by two or more standards.
    pub shared_requirements: Vec<SharedRequirementRow>,
    /// Deficiencies reaching into other standards.
    pub gap_cascades: Vec<GapCascade>,
}

/// Compute the full report from data already in memory.
pub fn build_report(
    tree: &CoverageTree,
    edges: &[ClauseCrossReference],
    taxonomy: &HlsTaxonomy,
) -> IntegrationReport {
    let universe = ClauseUniverse::from_tree(tree);
    let graph = CrossReferenceGraph::from_edges(edges);
    let classes = build_equivalence_classes(&universe, &graph);

    IntegrationReport {
        active_standard_count: tree.standard_count(),
        integration_score: score_integration(&universe, &classes, taxonomy),
        consolidated_readiness: consolidate_readiness(tree, &universe, &classes),
        shared_requirements: build_shared_requirements(tree, taxonomy),
        gap_cascades: detect_gap_cascades(&universe, &graph),
    }
}

/// Runs analyses against injected data sources.
#[derive(Debug)]
pub struct IntegrationEngine<C, X> {
    coverage: C,
    cross_refs: X,
    taxonomy: HlsTaxonomy,
}

impl<C, X> IntegrationEngine<C, X>
where
    C: CoverageSource,
    X: CrossReferenceSource,
{
    /// Engine over the standard HLS taxonomy.
    pub fn new(coverage: C, cross_refs: X) -> Self {
        Self::with_taxonomy(coverage, cross_refs, HlsTaxonomy::default())
    }

    /// Engine over a custom taxonomy.
    pub fn with_taxonomy(coverage: C, cross_refs: X, taxonomy: HlsTaxonomy) -> Self {
        Self {
            coverage,
            cross_refs,
            taxonomy,
        }
    }

    /// The taxonomy rows are projected onto.
    pub fn taxonomy(&self) -> &HlsTaxonomy {
        &self.taxonomy
    }

    /// Fetch both snapshots and compute the report.
    ///
    /// Either fetch failing aborts the run; no partial report is produced.
    pub async fn analyze(&self, scope: &AnalysisScope) -> Result<IntegrationReport, CrosswalkError> {
        tracing::info!(
            organization = %scope.organization_id,
            standard = scope.standard_code.as_ref().map(StandardCode::as_str),
            project = ?scope.project_id,
            coverage_source = self.coverage.source_name(),
            cross_reference_source = self.cross_refs.source_name(),
            "starting integration analysis"
        );

        let (tree, edges) = tokio::join!(
            self.coverage.coverage_tree(scope),
            self.cross_refs.cross_references(),
        );
        let tree = tree?;
        let edges = edges?;

        tracing::debug!(
            standards = tree.standard_count(),
            clauses = tree.leaf_count(),
            edges = edges.len(),
            "fetched analysis inputs"
        );

        let report = build_report(&tree, &edges, &self.taxonomy);

        tracing::info!(
            active_standards = report.active_standard_count,
            unique_requirements = report.integration_score.unique_requirements,
            efficiency_percent = report.integration_score.efficiency_percent,
            cascades = report.gap_cascades.len(),
            "integration analysis complete"
        );
        Ok(report)
    }
}

/// Suggests classifications for documents against injected data sources.
#[derive(Debug)]
pub struct DocumentSuggester<K, X, Cat> {
    classifications: K,
    cross_refs: X,
    catalog: Cat,
}

impl<K, X, Cat> DocumentSuggester<K, X, Cat>
where
    K: ClassificationSource,
    X: CrossReferenceSource,
    Cat: ClauseCatalog,
{
    /// Build a suggester.
    pub fn new(classifications: K, cross_refs: X, catalog: Cat) -> Self {
        Self {
            classifications,
            cross_refs,
            catalog,
        }
    }

    /// Suggested additional classifications for `document`.
    pub async fn suggestions(
        &self,
        document: &DocumentId,
    ) -> Result<Vec<DocumentSuggestion>, CrosswalkError> {
        let (classifications, edges, clauses) = tokio::join!(
            self.classifications.classifications(document),
            self.cross_refs.cross_references(),
            self.catalog.clauses(),
        );
        let classifications = classifications?;
        let edges = edges?;
        let clauses = clauses?;

        tracing::debug!(
            document = %document,
            classifications = classifications.len(),
            edges = edges.len(),
            clauses = clauses.len(),
            "fetched suggestion inputs"
        );

        let graph = CrossReferenceGraph::from_edges(&edges);
        let index = ClauseIndex::new(clauses);
        Ok(suggest_classifications(&classifications, &graph, &index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{StaticCoverage, StaticCrossReferences};
    use crate::universe::fixtures::*;
    use crosswalk_core::{CoverageStatus, MappingType};

    fn sample() -> (CoverageTree, Vec<ClauseCrossReference>) {
        let t = tree(vec![
            standard(
                "A",
                vec![top(
                    "4",
                    vec![
                        leaf("a1", "4.1", CoverageStatus::Gap),
                        leaf("a2", "4.2", CoverageStatus::Partial),
                    ],
                )],
            ),
            standard(
                "B",
                vec![top(
                    "4",
                    vec![
                        leaf("b1", "4.1", CoverageStatus::Covered),
                        leaf("b2", "4.2", CoverageStatus::Covered),
                    ],
                )],
            ),
        ]);
        let edges = vec![
            edge("a1", "b1", MappingType::Equivalent),
            edge("a2", "b2", MappingType::Related),
        ];
        (t, edges)
    }

    #[test]
    fn report_combines_components() {
        let (t, edges) = sample();
        let report = build_report(&t, &edges, &HlsTaxonomy::default());
        assert_eq!(report.active_standard_count, 2);
        assert_eq!(report.integration_score.unique_requirements, 3);
        assert_eq!(report.consolidated_readiness.total_classes, 3);
        assert_eq!(report.shared_requirements.len(), 1);
        // a1 (GAP) and a2 (PARTIAL) each reach standard B.
        assert_eq!(report.gap_cascades.len(), 2);
    }

    #[test]
    fn report_is_idempotent() {
        let (t, edges) = sample();
        let taxonomy = HlsTaxonomy::default();
        assert_eq!(
            build_report(&t, &edges, &taxonomy),
            build_report(&t, &edges, &taxonomy)
        );
    }

    #[tokio::test]
    async fn analyze_respects_standard_scope() {
        let (t, edges) = sample();
        let engine = IntegrationEngine::new(
            StaticCoverage::new(t),
            StaticCrossReferences::new(edges),
        );
        let scope = AnalysisScope::new(OrganizationId::new()).with_standard(code("A"));
        let report = engine.analyze(&scope).await.unwrap();
        assert_eq!(report.active_standard_count, 1);
        assert_eq!(report.integration_score.total_clauses, 2);
        assert!(report.shared_requirements.is_empty());
        assert!(report.gap_cascades.is_empty());
    }

    #[tokio::test]
    async fn scoped_raw_coverage_describes_kept_standard() {
        let (mut t, edges) = sample();
        t.overall_coverage_percent = 50;
        t.standards[0].coverage_percent = 0;
        t.standards[1].coverage_percent = 100;
        let engine = IntegrationEngine::new(
            StaticCoverage::new(t),
            StaticCrossReferences::new(edges),
        );

        let scope = AnalysisScope::new(OrganizationId::new()).with_standard(code("A"));
        let readiness = engine.analyze(&scope).await.unwrap().consolidated_readiness;
        assert_eq!(readiness.per_standard.len(), 1);
        assert_eq!(readiness.per_standard[0].coverage_percent, 0);
        assert_eq!(readiness.raw_coverage, 0);

        let all = engine
            .analyze(&AnalysisScope::new(OrganizationId::new()))
            .await
            .unwrap();
        assert_eq!(all.consolidated_readiness.raw_coverage, 50);
    }

    #[test]
    fn scope_serializes_without_empty_filters() {
        let scope = AnalysisScope::new(OrganizationId::new());
        let json = serde_json::to_value(&scope).unwrap();
        assert!(json.get("standardCode").is_none());
        assert!(json.get("organizationId").is_some());
    }
}
