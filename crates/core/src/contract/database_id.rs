//! Database identity type
//!
//! Every entity reference is scoped to exactly one database, identified by
//! the pair `{project_id, database}`. Two identities are the same database
//! only if both components are equal.
//!
//! ## Examples
//!
//! - `projects/my-app/databases/(default)` → `{my-app, (default)}`
//! - `projects/my-app/databases/analytics` → `{my-app, analytics}`

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the database every project starts with
pub const DEFAULT_DATABASE_NAME: &str = "(default)";

/// `{project, database}` pair scoping all entity references
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DatabaseId {
    project_id: String,
    database: String,
}

impl DatabaseId {
    /// Create a database identity
    ///
    /// No validation is done here; identities parsed out of resource names
    /// are already known to be non-empty. Use `validate()` for user input.
    pub fn new(project_id: impl Into<String>, database: impl Into<String>) -> Self {
        DatabaseId {
            project_id: project_id.into(),
            database: database.into(),
        }
    }

    /// Identity of the default database of a project
    pub fn with_default_database(project_id: impl Into<String>) -> Self {
        DatabaseId::new(project_id, DEFAULT_DATABASE_NAME)
    }

    /// Check both components are non-empty and contain no `/`
    pub fn validate(&self) -> Result<()> {
        for (what, part) in [("project id", &self.project_id), ("database", &self.database)] {
            if part.is_empty() {
                return Err(Error::invalid_config(format!("{} cannot be empty", what)));
            }
            if part.contains('/') {
                return Err(Error::invalid_config(format!(
                    "{} '{}' cannot contain '/'",
                    what, part
                )));
            }
        }
        Ok(())
    }

    /// Project identifier
    #[inline]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Database identifier within the project
    #[inline]
    pub fn database(&self) -> &str {
        &self.database
    }

    /// True for the `(default)` database
    pub fn is_default_database(&self) -> bool {
        self.database == DEFAULT_DATABASE_NAME
    }

    /// Resource name prefix, `projects/{p}/databases/{d}`
    pub fn resource_name(&self) -> String {
        format!("projects/{}/databases/{}", self.project_id, self.database)
    }
}

impl fmt::Display for DatabaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.project_id, self.database)
    }
}

// ============================================================================
// Tests
// ============================================================================
