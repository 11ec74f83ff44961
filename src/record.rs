//! The per-application version record shared by cache and manifest.

use serde::{de, Deserialize, Deserializer, Serialize};

/// Default version used when nothing is cached and none is supplied.
pub const DEFAULT_VERSION: &str = "0.0";

/// One application's known state.
///
/// Every field is a string; an empty string means "unknown". Missing
/// fields deserialize as empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VersionRecord {
    /// Application identifier.
    #[serde(default)]
    pub name: String,

    /// Dotted-numeric version string.
    #[serde(default, deserialize_with = "version_string")]
    pub version: String,

    /// Location of the update artifact.
    #[serde(default)]
    pub url: String,

    /// Content hash of the artifact.
    #[serde(default)]
    pub sha256: String,

    /// Free-form release date.
    #[serde(default, rename = "releasedate")]
    pub release_date: String,
}

impl VersionRecord {
    /// Create a record with a name and version and all other fields empty.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            ..Default::default()
        }
    }

    /// Set the artifact URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the artifact hash.
    pub fn with_sha256(mut self, sha256: impl Into<String>) -> Self {
        self.sha256 = sha256.into();
        self
    }

    /// Set the release date.
    pub fn with_release_date(mut self, date: impl Into<String>) -> Self {
        self.release_date = date.into();
        self
    }
}

/// Accept `version: "1.0"` and the bare integer `version: 3`.
///
/// A bare float such as `version: 1.10` is rejected: YAML reads it as 1.1,
/// so the dotted segments cannot be recovered.
fn version_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(u64),
        Float(f64),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Text(s) => Ok(s),
        Raw::Int(n) => Ok(n.to_string()),
        Raw::Float(f) => Err(de::Error::custom(format!(
            "version {} is a YAML number, quote it to keep its segments",
            f
        ))),
    }
}
