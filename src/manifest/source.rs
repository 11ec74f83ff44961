//! Manifest source locations.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Result, UpdateError};

/// Where a manifest is read from.
///
/// The scheme of the location string picks the variant:
/// `file://` and scheme-less strings are local files, `http://` and
/// `https://` are remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    /// Local file.
    File(PathBuf),
    /// HTTP/HTTPS URL.
    Remote(String),
}

impl ManifestSource {
    /// Parse a location string.
    pub fn parse(location: &str) -> Result<Self> {
        let location = location.trim();

        if let Some(path) = location.strip_prefix("file://") {
            if path.is_empty() {
                return Err(UpdateError::UnsupportedSource {
                    location: location.to_string(),
                });
            }
            return Ok(Self::File(PathBuf::from(path)));
        }

        if location.starts_with("http://") || location.starts_with("https://") {
            return Ok(Self::Remote(location.to_string()));
        }

        if location.is_empty() || location.contains("://") {
            return Err(UpdateError::UnsupportedSource {
                location: location.to_string(),
            });
        }

        Ok(Self::File(PathBuf::from(location)))
    }

    /// Get the local path, if this is a file source.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Remote(_) => None,
        }
    }

    /// Check if this source needs the network.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

impl FromStr for ManifestSource {
    type Err = UpdateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file://{}", path.display()),
            Self::Remote(url) => write!(f, "{}", url),
        }
    }
}
