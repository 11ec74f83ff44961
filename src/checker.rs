//! Update check orchestration.
//!
//! A check loads the cache, fetches the manifest, compares the two
//! versions and optionally writes the manifest entry back to the cache.
//! Fetch, lookup and version errors all happen before the cache is
//! written, so a failed check never changes the cache file.

use crate::cache::{CacheStore, VersionCache};
use crate::config::CheckerConfig;
use crate::error::{Result, UpdateError};
use crate::manifest::{ManifestFetcher, ManifestSource};
use crate::record::VersionRecord;
use crate::version::DottedVersion;

/// Result of a successful update check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The manifest has a strictly newer version.
    UpdateAvailable {
        /// Location of the new artifact.
        url: String,
        /// Version the manifest was compared against.
        baseline: String,
        /// The manifest entry.
        latest: VersionRecord,
    },
    /// The baseline is equal to or newer than the manifest version.
    UpToDate {
        /// Version the manifest was compared against.
        baseline: String,
        /// Version listed in the manifest.
        latest: String,
    },
}

impl Outcome {
    /// Check if an update is available.
    pub fn is_update_available(&self) -> bool {
        matches!(self, Self::UpdateAvailable { .. })
    }

    /// Artifact URL, if an update is available.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::UpdateAvailable { url, .. } => Some(url),
            Self::UpToDate { .. } => None,
        }
    }

    /// Version the manifest was compared against.
    pub fn baseline(&self) -> &str {
        match self {
            Self::UpdateAvailable { baseline, .. } | Self::UpToDate { baseline, .. } => baseline,
        }
    }

    /// Version listed in the manifest.
    pub fn latest_version(&self) -> &str {
        match self {
            Self::UpdateAvailable { latest, .. } => &latest.version,
            Self::UpToDate { latest, .. } => latest,
        }
    }
}

/// Checks applications against a manifest, using the cache as baseline.
///
/// # Example
///
/// ```no_run
/// use checkupdate::{CheckerConfig, UpdateChecker};
///
/// let checker = UpdateChecker::new(CheckerConfig::from_env()).unwrap();
/// let outcome = checker.check("myapp", Some("1.2.0"), false).unwrap();
/// if let Some(url) = outcome.url() {
///     println!("update available at {}", url);
/// }
/// ```
pub struct UpdateChecker {
    source: ManifestSource,
    store: CacheStore,
    fetcher: ManifestFetcher,
}

impl UpdateChecker {
    /// Create a checker from a configuration.
    ///
    /// Fails if the source location is not a supported scheme.
    pub fn new(config: CheckerConfig) -> Result<Self> {
        Ok(Self {
            source: ManifestSource::parse(&config.source)?,
            store: CacheStore::new(config.cache_path),
            fetcher: ManifestFetcher::with_timeout(config.timeout)?,
        })
    }

    /// The manifest source this checker reads.
    pub fn source(&self) -> &ManifestSource {
        &self.source
    }

    /// The cache store this checker reads and writes.
    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    /// Check whether `app` has a newer version in the manifest.
    ///
    /// `supplied_version` replaces the cached version as the baseline for
    /// this comparison only. With `persist`, the manifest entry for `app`
    /// replaces its cached record; other cached records are kept.
    pub fn check(
        &self,
        app: &str,
        supplied_version: Option<&str>,
        persist: bool,
    ) -> Result<Outcome> {
        let mut cache = self.store.load();

        let mut baseline = cache.get_or_default(app, supplied_version);
        if let Some(version) = supplied_version {
            baseline.version = version.to_string();
        }

        let manifest = self.fetcher.fetch(&self.source)?;
        let latest = manifest
            .get(app)
            .cloned()
            .ok_or_else(|| UpdateError::AppNotInManifest {
                app: app.to_string(),
                location: self.source.to_string(),
            })?;

        let old = DottedVersion::parse(&baseline.version)?;
        let new = DottedVersion::parse(&latest.version)?;

        if persist {
            self.persist(&mut cache, app, latest.clone())?;
        }

        if new.is_newer_than(&old) {
            tracing::debug!(
                "version change detected ({} -> {})",
                baseline.version,
                latest.version
            );
            Ok(Outcome::UpdateAvailable {
                url: latest.url.clone(),
                baseline: baseline.version,
                latest,
            })
        } else {
            tracing::debug!("version has not changed (current {})", baseline.version);
            Ok(Outcome::UpToDate {
                baseline: baseline.version,
                latest: latest.version,
            })
        }
    }

    fn persist(&self, cache: &mut VersionCache, app: &str, record: VersionRecord) -> Result<()> {
        cache.insert(app, record);
        self.store.save(cache)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const LOG: &str = r#"
test:
  name: test
  version: '1.0'
  url: file://dummy.py
  sha256: ''
  releasedate: ''
"#;

    fn checker(temp: &TempDir, manifest: &str) -> UpdateChecker {
        let log = temp.path().join("update-log.yml");
        fs::write(&log, manifest).unwrap();
        let config = CheckerConfig::default()
            .with_source(format!("file://{}", log.display()))
            .with_cache_path(temp.path().join(".testcache.yml"));
        UpdateChecker::new(config).unwrap()
    }

    #[test]
    fn new_rejects_unsupported_source() {
        let config = CheckerConfig::default().with_source("ftp://example.com/log.yml");
        assert!(matches!(
            UpdateChecker::new(config),
            Err(UpdateError::UnsupportedSource { .. })
        ));
    }

    #[test]
    fn update_available_without_cache() {
        let temp = TempDir::new().unwrap();
        let checker = checker(&temp, LOG);

        let outcome = checker.check("test", Some("0.0"), true).unwrap();

        assert_eq!(outcome.url(), Some("file://dummy.py"));
        assert_eq!(outcome.baseline(), "0.0");
        assert_eq!(outcome.latest_version(), "1.0");
    }

    #[test]
    fn supplied_version_overrides_cache() {
        let temp = TempDir::new().unwrap();
        let checker = checker(&temp, LOG);
        checker.check("test", None, true).unwrap();

        let outcome = checker.check("test", Some("0.5"), false).unwrap();
        assert!(outcome.is_update_available());
        assert_eq!(outcome.baseline(), "0.5");
    }

    #[test]
    fn supplied_version_is_not_persisted_without_persist() {
        let temp = TempDir::new().unwrap();
        let checker = checker(&temp, LOG);

        checker.check("test", Some("2.0"), false).unwrap();
        assert!(!checker.store().path().exists());
    }

    #[test]
    fn newer_baseline_is_up_to_date() {
        let temp = TempDir::new().unwrap();
        let checker = checker(&temp, LOG);

        let outcome = checker.check("test", Some("1.1"), false).unwrap();
        assert_eq!(
            outcome,
            Outcome::UpToDate {
                baseline: "1.1".to_string(),
                latest: "1.0".to_string(),
            }
        );
    }

    #[test]
    fn invalid_manifest_version_is_an_error() {
        let temp = TempDir::new().unwrap();
        let checker = checker(&temp, "test:\n  name: test\n  version: 1.0-beta\n");

        let err = checker.check("test", None, true).unwrap_err();
        assert!(matches!(err, UpdateError::InvalidVersion { .. }));
        assert!(!checker.store().path().exists());
    }

    #[test]
    fn invalid_supplied_version_is_an_error() {
        let temp = TempDir::new().unwrap();
        let checker = checker(&temp, LOG);

        let err = checker.check("test", Some("latest"), true).unwrap_err();
        assert!(matches!(err, UpdateError::InvalidVersion { .. }));
        assert!(!checker.store().path().exists());
    }

    #[test]
    fn persisted_record_is_manifest_entry() {
        let temp = TempDir::new().unwrap();
        let checker = checker(&temp, LOG);

        checker.check("test", None, true).unwrap();

        let cache = checker.store().load();
        let record = cache.get("test").unwrap();
        assert_eq!(record.version, "1.0");
        assert_eq!(record.url, "file://dummy.py");
    }
}
