//! # Identity Newtypes
//!
//! Newtype wrappers for every identifier the engine handles. These prevent
//! accidental identifier confusion: you cannot pass a [`StandardCode`] where
//! a [`ClauseId`] is expected, or a [`DocumentId`] where an
//! [`OrganizationId`] is expected.
//!
//! Catalog identifiers ([`ClauseId`], [`StandardCode`]) are opaque strings
//! owned by the external clause catalog. Tenant-side identifiers
//! ([`OrganizationId`], [`ProjectId`], [`DocumentId`]) are UUIDs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Stable identifier of a single clause in the shared clause catalog.
///
/// # Validation
///
/// Must be a non-empty string. The catalog decides the format (UUID, cuid,
/// slug), so nothing further is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClauseId(String);

impl ClauseId {
    /// Create a clause identifier, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidClauseId`] if the string is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::InvalidClauseId);
        }
        Ok(Self(s))
    }

    /// Access the clause identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ClauseId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClauseId> for String {
    fn from(id: ClauseId) -> Self {
        id.0
    }
}

impl fmt::Display for ClauseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Short code of a compliance standard (e.g. `"ISO9001"`, `"ISO14001"`).
///
/// # Validation
///
/// Must be a non-empty string. Codes are compared and sorted exactly as
/// given; no case folding is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StandardCode(String);

impl StandardCode {
    /// Create a standard code, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidStandardCode`] if the string is
    /// empty or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::InvalidStandardCode);
        }
        Ok(Self(s))
    }

    /// Access the standard code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StandardCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StandardCode> for String {
    fn from(code: StandardCode) -> Self {
        code.0
    }
}

impl fmt::Display for StandardCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing UUID.
            pub fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Access the underlying UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim())
                    .map(Self)
                    .map_err(|_| ValidationError::InvalidUuid {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, ":{}"), self.0)
            }
        }
    };
}

uuid_id!(
    /// Tenant organization whose coverage is being analyzed.
    OrganizationId,
    "organization",
    "org"
);

uuid_id!(
    /// Project scope within an organization.
    ProjectId,
    "project",
    "project"
);

uuid_id!(
    /// Document that carries clause classifications.
    DocumentId,
    "document",
    "document"
);
