#![deny(missing_docs)]

//! # crosswalk-core: Foundational Types for Cross-Standard Integration
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies, only `serde`, `serde_json`,
//! `thiserror`, and `uuid` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** [`ClauseId`], [`StandardCode`],
//!    [`OrganizationId`], [`ProjectId`], and [`DocumentId`] are distinct
//!    types validated at construction.
//!
//! 2. **Ranked enums, not strings.** [`CoverageStatus`] carries an explicit
//!    total order (`Covered > Partial > Gap`) and [`MappingType`] an explicit
//!    strength tier. "Best of" and "strongest" selection never compare
//!    string forms.
//!
//! 3. **Injected reference data.** The HLS group table is a value
//!    ([`HlsTaxonomy`]) handed to consumers, not ambient global state.
//!
//! 4. **[`CrosswalkError`] hierarchy.** Structured errors with `thiserror`.

pub mod classification;
pub mod clause;
pub mod coverage;
pub mod error;
pub mod hls;
pub mod identity;
pub mod mapping;
pub mod status;

// Re-export primary types at crate root for ergonomic imports.
pub use classification::DocumentClassification;
pub use clause::{compare_clause_numbers, is_top_level_match, top_level_segment, StandardClause};
pub use coverage::{ClauseCoverage, CoverageTree, StandardCoverage, TopLevelClause};
pub use error::{CrosswalkError, SourceError, ValidationError};
pub use hls::{HlsGroup, HlsTaxonomy, HLS_GROUPS};
pub use identity::{ClauseId, DocumentId, OrganizationId, ProjectId, StandardCode};
pub use mapping::{ClauseCrossReference, MappingType};
pub use status::{CoverageStatus, StatusCounts};
