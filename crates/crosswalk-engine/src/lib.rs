//! # crosswalk-engine: Cross-Standard Integration Engine
//!
//! Organizations certified against several management-system standards
//! (ISO 9001, ISO 14001, ISO 45001, ...) satisfy many logically identical
//! requirements more than once. Given a per-standard coverage tree from an
//! external gap analysis and a global list of clause cross-references, this
//! crate computes:
//!
//! - **Equivalence classes** (`equivalence.rs`, `universe.rs`): clauses
//!   linked by chains of `EQUIVALENT` cross-references collapse into one
//!   deduplicated requirement, via a generic disjoint-set.
//!
//! - **Integration score** (`score.rs`): how much duplication exists and
//!   which requirements are shared across standards.
//!
//! - **Consolidated readiness** (`readiness.rs`): coverage recomputed over
//!   deduplicated requirements, with half credit for partial coverage.
//!
//! - **Shared requirements matrix** (`matrix.rs`): per-HLS-group status of
//!   each standard, flagging groups where standards disagree.
//!
//! - **Gap cascades** (`cascade.rs`): deficient clauses and the clauses in
//!   other standards they put at risk.
//!
//! - **Document suggestions** (`suggestion.rs`): additional classifications
//!   for a document, derived from `EQUIVALENT` mappings.
//!
//! All algorithms are synchronous, pure functions over in-memory snapshots.
//! [`IntegrationEngine`] and [`DocumentSuggester`] fetch those snapshots
//! through the traits in `source.rs` and run the algorithms.

#![deny(missing_docs)]

pub mod cascade;
pub mod engine;
pub mod equivalence;
pub mod graph;
pub mod matrix;
pub mod readiness;
pub mod score;
pub mod source;
pub mod suggestion;
pub mod universe;

pub use cascade::{detect_gap_cascades, CascadeTarget, ClauseRef, GapCascade};
pub use engine::{
    build_report, AnalysisScope, DocumentSuggester, IntegrationEngine, IntegrationReport,
};
pub use equivalence::DisjointSet;
pub use graph::{CrossReferenceGraph, Neighbor};
pub use matrix::{aggregate_status, build_shared_requirements, MatrixCell, SharedRequirementRow};
pub use readiness::{consolidate_readiness, ConsolidatedReadiness, StandardReadiness};
pub use score::{score_integration, IntegrationScore, RequirementSaving};
pub use source::{
    ClassificationSource, ClauseCatalog, CoverageSource, CrossReferenceSource, StaticCatalog,
    StaticClassifications, StaticCoverage, StaticCrossReferences,
};
pub use suggestion::{suggest_classifications, ClauseIndex, DocumentSuggestion};
pub use universe::{build_equivalence_classes, ClauseUniverse, EquivalenceClass, UniverseClause};
