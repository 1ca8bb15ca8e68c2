//! # File-Backed Dataset
//!
//! Serves the engine's data sources from a directory of JSON files:
//!
//! ```text
//! data/
//!   coverage.json           CoverageTree
//!   cross_references.json   [ClauseCrossReference]
//!   classifications.json    { "<document uuid>": [DocumentClassification] }   (optional)
//!   clauses.json            [StandardClause]                                  (optional)
//! ```
//!
//! Without `clauses.json` the catalog is derived from the leaves of the
//! coverage tree. Files are re-read on every call.

use std::collections::HashMap;
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use uuid::Uuid;

use crosswalk_core::{
    ClauseCrossReference, CoverageTree, DocumentClassification, DocumentId, SourceError,
    StandardClause,
};
use crosswalk_engine::{
    AnalysisScope, ClassificationSource, ClauseCatalog, CoverageSource, CrossReferenceSource,
};

/// Coverage tree file name.
pub const COVERAGE_FILE: &str = "coverage.json";
/// Cross-reference file name.
pub const CROSS_REFERENCES_FILE: &str = "cross_references.json";
/// Classification file name.
pub const CLASSIFICATIONS_FILE: &str = "classifications.json";
/// Clause catalog file name.
pub const CLAUSES_FILE: &str = "clauses.json";

/// A dataset directory.
#[derive(Debug, Clone)]
pub struct FileDataset {
    dir: PathBuf,
}

impl FileDataset {
    /// Serve files from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The dataset directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }
}

/// Read and decode a required JSON file.
async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SourceError> {
    match read_optional_json(path).await? {
        Some(value) => Ok(value),
        None => Err(SourceError::NotFound {
            what: path.display().to_string(),
        }),
    }
}

/// Read and decode a JSON file that may be absent.
async fn read_optional_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, SourceError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(SourceError::Io(e)),
    };
    tracing::trace!(path = %path.display(), bytes = bytes.len(), "read dataset file");
    Ok(Some(serde_json::from_slice(&bytes)?))
}

impl CoverageSource for FileDataset {
    fn coverage_tree(
        &self,
        scope: &AnalysisScope,
    ) -> impl Future<Output = Result<CoverageTree, SourceError>> + Send {
        let path = self.path(COVERAGE_FILE);
        let standard = scope.standard_code.clone();
        let project = scope.project_id;
        async move {
            let mut tree: CoverageTree = read_json(&path).await?;
            if let Some(code) = &standard {
                tree.retain_standard(code);
            }
            if let Some(project) = project {
                // A dataset directory holds one snapshot; the project is informational.
                tracing::debug!(project = %project, "project scope not applied to file dataset");
            }
            Ok(tree)
        }
    }

    fn source_name(&self) -> &str {
        COVERAGE_FILE
    }
}

impl CrossReferenceSource for FileDataset {
    fn cross_references(
        &self,
    ) -> impl Future<Output = Result<Vec<ClauseCrossReference>, SourceError>> + Send {
        let path = self.path(CROSS_REFERENCES_FILE);
        async move { read_json(&path).await }
    }

    fn source_name(&self) -> &str {
        CROSS_REFERENCES_FILE
    }
}

impl ClassificationSource for FileDataset {
    fn classifications(
        &self,
        document: &DocumentId,
    ) -> impl Future<Output = Result<Vec<DocumentClassification>, SourceError>> + Send {
        let path = self.path(CLASSIFICATIONS_FILE);
        let key = *document.as_uuid();
        async move {
            let mut by_document: HashMap<Uuid, Vec<DocumentClassification>> =
                read_optional_json(&path).await?.unwrap_or_default();
            Ok(by_document.remove(&key).unwrap_or_default())
        }
    }
}

impl ClauseCatalog for FileDataset {
    fn clauses(&self) -> impl Future<Output = Result<Vec<StandardClause>, SourceError>> + Send {
        let clauses_path = self.path(CLAUSES_FILE);
        let coverage_path = self.path(COVERAGE_FILE);
        async move {
            if let Some(clauses) = read_optional_json(&clauses_path).await? {
                return Ok(clauses);
            }
            tracing::debug!("no clause catalog file; deriving catalog from coverage tree");
            let tree: CoverageTree = read_json(&coverage_path).await?;
            Ok(tree.catalog())
        }
    }
}
