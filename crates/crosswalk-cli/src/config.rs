//! CLI configuration.
//!
//! Defaults come from the environment. Command-line flags override them.

use std::path::PathBuf;

use crosswalk_core::OrganizationId;

/// Default dataset directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Directory holding the JSON dataset.
    pub data_dir: PathBuf,
    /// Raw `CROSSWALK_ORG_ID`. Parsed only when an organization is needed,
    /// so commands that take none are unaffected by a malformed value.
    pub organization_id: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            organization_id: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `CROSSWALK_DATA_DIR` (default: `./data`)
    /// - `CROSSWALK_ORG_ID` (optional UUID)
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup("CROSSWALK_DATA_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let organization_id = lookup("CROSSWALK_ORG_ID").filter(|s| !s.trim().is_empty());

        Self {
            data_dir,
            organization_id,
        }
    }

    /// Apply command-line overrides.
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }

    /// The organization to analyze: the flag if given, else the configured one.
    pub fn resolve_organization(
        &self,
        flag: Option<OrganizationId>,
    ) -> Result<OrganizationId, ConfigError> {
        if let Some(org) = flag {
            return Ok(org);
        }
        let raw = self
            .organization_id
            .as_deref()
            .ok_or(ConfigError::MissingOrganization)?;
        raw.parse()
            .map_err(|_| ConfigError::InvalidOrganizationId(raw.to_string()))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("CROSSWALK_ORG_ID is not a valid UUID: {0}")]
    InvalidOrganizationId(String),
    #[error("no organization given: pass --org or set CROSSWALK_ORG_ID")]
    MissingOrganization,
}
