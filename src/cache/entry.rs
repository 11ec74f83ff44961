//! In-memory version cache.

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::record::{VersionRecord, DEFAULT_VERSION};

/// Mapping from application name to its last-known [`VersionRecord`].
///
/// Entries are kept sorted by name so the persisted document is stable
/// between writes.
///
/// # Example
///
/// ```
/// use checkupdate::{VersionCache, VersionRecord};
///
/// let mut cache = VersionCache::new();
/// cache.insert("tool", VersionRecord::new("tool", "1.2"));
///
/// assert_eq!(cache.get_or_default("tool", None).version, "1.2");
/// assert_eq!(cache.get_or_default("other", None).version, "0.0");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionCache {
    entries: BTreeMap<String, VersionRecord>,
}

impl VersionCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the record stored for an application.
    pub fn get(&self, app: &str) -> Option<&VersionRecord> {
        self.entries.get(app)
    }

    /// Get the stored record, or a default one for an unknown application.
    ///
    /// The default record is named `app`, has `fallback_version` (or
    /// `"0.0"`) as its version and leaves every other field empty.
    pub fn get_or_default(&self, app: &str, fallback_version: Option<&str>) -> VersionRecord {
        match self.entries.get(app) {
            Some(record) => record.clone(),
            None => {
                tracing::debug!("no cached entry for {} found, building default", app);
                VersionRecord::new(app, fallback_version.unwrap_or(DEFAULT_VERSION))
            }
        }
    }

    /// Replace the record for one application, leaving the others alone.
    pub fn insert(&mut self, app: impl Into<String>, record: VersionRecord) -> Option<VersionRecord> {
        self.entries.insert(app.into(), record)
    }

    /// Remove the record for an application.
    pub fn remove(&mut self, app: &str) -> Option<VersionRecord> {
        self.entries.remove(app)
    }

    /// Check whether an application has a cached record.
    pub fn contains(&self, app: &str) -> bool {
        self.entries.contains_key(app)
    }

    /// Number of cached applications.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over records in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, VersionRecord> {
        self.entries.iter()
    }
}

impl FromIterator<(String, VersionRecord)> for VersionCache {
    fn from_iter<I: IntoIterator<Item = (String, VersionRecord)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a VersionCache {
    type Item = (&'a String, &'a VersionRecord);
    type IntoIter = btree_map::Iter<'a, String, VersionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cache_is_empty() {
        let cache = VersionCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn get_or_default_returns_stored_record() {
        let mut cache = VersionCache::new();
        let record = VersionRecord::new("test", "1.0").with_url("file://dummy.py");
        cache.insert("test", record.clone());

        assert_eq!(cache.get_or_default("test", Some("9.9")), record);
    }

    #[test]
    fn get_or_default_uses_fallback_version() {
        let cache = VersionCache::new();
        let record = cache.get_or_default("test", Some("0.3"));
        assert_eq!(record.name, "test");
        assert_eq!(record.version, "0.3");
        assert!(record.url.is_empty());
    }

    #[test]
    fn get_or_default_without_fallback_is_zero() {
        let cache = VersionCache::new();
        assert_eq!(cache.get_or_default("test", None).version, "0.0");
    }

    #[test]
    fn get_or_default_does_not_insert() {
        let cache = VersionCache::new();
        let _ = cache.get_or_default("test", None);
        assert!(!cache.contains("test"));
    }

    #[test]
    fn insert_replaces_only_one_key() {
        let mut cache = VersionCache::new();
        cache.insert("dummy", VersionRecord::new("dummy", "0.0"));
        cache.insert("test", VersionRecord::new("test", "0.0"));

        let previous = cache.insert("test", VersionRecord::new("test", "1.0"));

        assert_eq!(previous.map(|r| r.version), Some("0.0".to_string()));
        assert_eq!(cache.get("test").map(|r| r.version.as_str()), Some("1.0"));
        assert_eq!(cache.get("dummy").map(|r| r.version.as_str()), Some("0.0"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn remove_entry() {
        let mut cache = VersionCache::new();
        cache.insert("test", VersionRecord::new("test", "1.0"));
        assert!(cache.remove("test").is_some());
        assert!(cache.remove("test").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn iterates_in_name_order() {
        let cache: VersionCache = [
            ("zeta".to_string(), VersionRecord::new("zeta", "1")),
            ("alpha".to_string(), VersionRecord::new("alpha", "1")),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = cache.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }
}
