//! Parsed manifest documents.

use serde_yaml::Value;
use std::collections::BTreeMap;

use crate::error::{Result, UpdateError};
use crate::record::VersionRecord;

/// The published state of zero or more applications.
///
/// Manifests are fetched fresh for every check and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: BTreeMap<String, VersionRecord>,
}

impl Manifest {
    /// Parse a YAML manifest.
    ///
    /// `location` is only used in error messages. The document must be a
    /// non-empty mapping from application name to record.
    pub fn parse(content: &str, location: &str) -> Result<Self> {
        let invalid = |message: String| UpdateError::SourceInvalid {
            location: location.to_string(),
            message,
        };

        let value: Value = serde_yaml::from_str(content).map_err(|e| invalid(e.to_string()))?;
        let entries: BTreeMap<String, VersionRecord> = match value {
            Value::Null => return Err(invalid("document is empty".to_string())),
            Value::Mapping(_) => {
                serde_yaml::from_value(value).map_err(|e| invalid(e.to_string()))?
            }
            _ => return Err(invalid("expected a mapping of application records".to_string())),
        };

        if entries.is_empty() {
            return Err(invalid("document has no entries".to_string()));
        }

        Ok(Self { entries })
    }

    /// Get the record for an application.
    pub fn get(&self, app: &str) -> Option<&VersionRecord> {
        self.entries.get(app)
    }

    /// Number of applications listed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the manifest lists no applications.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Application names in sorted order.
    pub fn apps(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
