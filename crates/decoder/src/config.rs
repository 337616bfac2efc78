//! Decoder configuration via `firevalue.toml`
//!
//! Names the database a client is bound to and the server timestamp behavior
//! used when a caller does not pick one.

use crate::behavior::ServerTimestampBehavior;
use firevalue_core::{DatabaseId, Error, Result, DEFAULT_DATABASE_NAME};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Conventional config file name
pub const CONFIG_FILE_NAME: &str = "firevalue.toml";

/// Decoder configuration loaded from `firevalue.toml`.
///
/// # Example
///
/// ```toml
/// project_id = "my-project"
/// database = "(default)"
/// server_timestamps = "estimate"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Project the client belongs to
    pub project_id: String,
    /// Database within the project (default: `"(default)"`)
    #[serde(default = "default_database")]
    pub database: String,
    /// Behavior for pending server timestamps (default: `"none"`)
    #[serde(default)]
    pub server_timestamps: ServerTimestampBehavior,
}

fn default_database() -> String {
    DEFAULT_DATABASE_NAME.to_string()
}

impl DecoderConfig {
    /// Config for the default database of `project_id`
    pub fn new(project_id: impl Into<String>) -> Self {
        DecoderConfig {
            project_id: project_id.into(),
            database: default_database(),
            server_timestamps: ServerTimestampBehavior::default(),
        }
    }

    /// Parse and validate TOML text
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` on syntax errors, unknown behavior names, or an
    /// empty/invalid database identity.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: DecoderConfig = toml::from_str(text)?;
        config.database_id()?;
        Ok(config)
    }

    /// Read and validate a config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(Error::from)?;
        Self::from_toml_str(&text)
    }

    /// Write this config as TOML
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), text).map_err(Error::from)
    }

    /// Validated database identity
    pub fn database_id(&self) -> Result<DatabaseId> {
        let id = DatabaseId::new(self.project_id.clone(), self.database.clone());
        id.validate()?;
        Ok(id)
    }

    /// Behavior for callers that do not pick one
    pub fn server_timestamp_behavior(&self) -> ServerTimestampBehavior {
        self.server_timestamps
    }

    /// Returns a commented template config.
    pub fn default_toml() -> &'static str {
        r#"# firevalue decoder configuration
#
# Project and database every decoded reference is expected to belong to.
# References into other databases are decoded anyway and logged.
project_id = "my-project"
database = "(default)"

# What pending server timestamps decode to when the caller does not say:
#   "none"     = null (default)
#   "estimate" = the local write time
#   "previous" = the value being overwritten, or null
server_timestamps = "none"
"#
    }
}
