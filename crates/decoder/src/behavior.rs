//! Server timestamp behavior
//!
//! A server timestamp written locally has no final value until the backend
//! acknowledges the write. The behavior decides what readers see meanwhile.
//! It is chosen once per top-level decode and applies to every nested value.

use firevalue_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How pending server timestamps decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerTimestampBehavior {
    /// The local estimate of the write time
    Estimate,
    /// The value the pending write replaces, decoded recursively; null if none
    Previous,
    /// Always null
    #[default]
    None,
}

impl ServerTimestampBehavior {
    /// Lowercase name, as used in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerTimestampBehavior::Estimate => "estimate",
            ServerTimestampBehavior::Previous => "previous",
            ServerTimestampBehavior::None => "none",
        }
    }
}

impl fmt::Display for ServerTimestampBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServerTimestampBehavior {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "estimate" => Ok(ServerTimestampBehavior::Estimate),
            "previous" => Ok(ServerTimestampBehavior::Previous),
            "none" => Ok(ServerTimestampBehavior::None),
            other => Err(Error::invalid_config(format!(
                "Invalid server timestamp behavior '{}'. Expected \"estimate\", \"previous\" or \"none\".",
                other
            ))),
        }
    }
}
