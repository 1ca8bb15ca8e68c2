//! # Error Hierarchy
//!
//! Structured error types for the Crosswalk workspace, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! The integration algorithms themselves are total functions and never fail.
//! Errors only arise at the edges: constructing validated identifiers, and
//! fetching coverage, cross-reference, classification, or catalog data from
//! the hosting system.

use thiserror::Error;

/// Top-level error type for the Crosswalk workspace.
#[derive(Error, Debug)]
pub enum CrosswalkError {
    /// An upstream data source failed to deliver its snapshot.
    #[error("source error: {0}")]
    Source(#[from] SourceError),
}

/// Failures reported by the data sources the engine reads from.
///
/// The engine offers no retry or partial-result policy: any of these aborts
/// the invocation and is returned to the caller unchanged.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source could not be reached or refused the request.
    #[error("{source_name} unavailable: {reason}")]
    Unavailable {
        /// Which source failed (e.g. "coverage", "cross_references").
        source_name: String,
        /// Human-readable failure reason.
        reason: String,
    },

    /// The requested record does not exist in the source.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing record.
        what: String,
    },

    /// I/O error while reading a file-backed source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding error while reading a serialized source.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors for domain primitive newtypes.
///
/// Each identifier type enforces its format at construction time. The
/// variants carry the offending input so misconfigured datasets can be
/// diagnosed from the message alone.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Clause identifier is empty or whitespace-only.
    #[error("invalid clause ID: must be non-empty")]
    InvalidClauseId,

    /// Standard code is empty or whitespace-only.
    #[error("invalid standard code: must be non-empty")]
    InvalidStandardCode,

    /// A UUID-backed identifier could not be parsed.
    #[error("invalid {kind} ID: \"{value}\" (expected a UUID)")]
    InvalidUuid {
        /// Which identifier kind was being parsed.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crosswalk_error_source_display() {
        let err = CrosswalkError::Source(SourceError::Unavailable {
            source_name: "coverage".to_string(),
            reason: "connection refused".to_string(),
        });
        let msg = format!("{err}");
        assert!(msg.contains("coverage unavailable"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn source_error_not_found_display() {
        let err = SourceError::NotFound {
            what: "document 42".to_string(),
        };
        assert!(format!("{err}").contains("document 42"));
    }

    #[test]
    fn source_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: SourceError = json_err.into();
        assert!(format!("{err}").starts_with("JSON error"));
    }

    #[test]
    fn validation_error_invalid_uuid() {
        let err = ValidationError::InvalidUuid {
            kind: "document",
            value: "abc".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("document"));
        assert!(msg.contains("abc"));
    }

    #[test]
    fn source_errors_convert_into_top_level() {
        let e: CrosswalkError = SourceError::NotFound {
            what: "x".to_string(),
        }
        .into();
        assert!(matches!(e, CrosswalkError::Source(_)));
    }
}
