//! Cache file storage.

use serde_yaml::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::entry::VersionCache;
use crate::error::{Result, UpdateError};
use crate::record::VersionRecord;

/// Reads and writes the YAML cache document at a fixed path.
pub struct CacheStore {
    /// Location of the cache document.
    path: PathBuf,
}

impl CacheStore {
    /// Create a store for the given cache file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the cache file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the cache from disk.
    ///
    /// A missing, unreadable, empty or malformed document loads as an empty
    /// cache. Entries that fail to deserialize are skipped individually.
    pub fn load(&self) -> VersionCache {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("no cache file at {}", self.path.display());
                return VersionCache::new();
            }
            Err(e) => {
                tracing::debug!("cache file {} unreadable ({}), skipping", self.path.display(), e);
                return VersionCache::new();
            }
        };

        let mapping = match serde_yaml::from_str::<Value>(&content) {
            Ok(Value::Mapping(mapping)) => mapping,
            Ok(_) => {
                tracing::debug!("cache file contents invalid, skipping");
                return VersionCache::new();
            }
            Err(e) => {
                tracing::debug!("cache file {} does not parse ({}), skipping", self.path.display(), e);
                return VersionCache::new();
            }
        };

        let mut cache = VersionCache::new();
        for (key, value) in mapping {
            let Some(app) = key.as_str() else {
                tracing::debug!("skipping cache entry with non-string key");
                continue;
            };
            match serde_yaml::from_value::<VersionRecord>(value) {
                Ok(record) => {
                    cache.insert(app, record);
                }
                Err(e) => tracing::debug!("skipping cache entry for {}: {}", app, e),
            }
        }

        if cache.is_empty() {
            tracing::debug!("cache file contents invalid, skipping");
        } else {
            tracing::debug!("read cache file {}", self.path.display());
        }
        cache
    }

    /// Save the cache to disk using atomic write.
    ///
    /// The document is written to a temporary file beside the target and
    /// renamed over it, so readers never see a partially written cache.
    pub fn save(&self, cache: &VersionCache) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(cache).map_err(|e| self.write_error(e))?;

        let temp_path = self.temp_path();
        let written =
            fs::write(&temp_path, &content).and_then(|()| fs::rename(&temp_path, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(self.write_error(e));
        }

        tracing::debug!("wrote cache file {}", self.path.display());
        Ok(())
    }

    /// Delete the cache file.
    ///
    /// Returns `false` if there was nothing to delete.
    pub fn clear(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Temporary file used during [`save`](Self::save). Unique per process.
    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "cache".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()))
    }

    fn write_error(&self, e: impl std::fmt::Display) -> UpdateError {
        UpdateError::CacheWrite {
            path: self.path.clone(),
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> CacheStore {
        CacheStore::new(temp.path().join("cache.yml"))
    }

    #[test]
    fn missing_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        assert!(store.load().is_empty());
    }

    #[test]
    fn empty_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::write(store.path(), "").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn truncated_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::write(store.path(), "test:\n  name: test\n  version: [1.0\n").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn non_mapping_document_loads_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::write(store.path(), "- just\n- a list\n").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn directory_in_place_of_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::create_dir(store.path()).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn bad_entries_are_skipped() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::write(
            store.path(),
            "good:\n  name: good\n  version: '1.0'\nbad: not-a-record\n",
        )
        .unwrap();

        let cache = store.load();
        assert_eq!(cache.len(), 1);
        assert!(cache.contains("good"));
    }

    #[test]
    fn save_and_load() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let mut cache = VersionCache::new();
        cache.insert(
            "test",
            VersionRecord::new("test", "1.0").with_url("file://dummy.py"),
        );
        cache.insert("dummy", VersionRecord::new("dummy", "0.0"));
        store.save(&cache).unwrap();

        assert_eq!(store.load(), cache);
    }

    #[test]
    fn save_writes_all_fields() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let mut cache = VersionCache::new();
        cache.insert("test", VersionRecord::new("test", "1.0"));
        store.save(&cache).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        for field in ["name:", "version:", "url:", "sha256:", "releasedate:"] {
            assert!(content.contains(field), "missing {} in {}", field, content);
        }
    }

    #[test]
    fn save_replaces_previous_content() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::write(store.path(), "garbage: [").unwrap();

        let mut cache = VersionCache::new();
        cache.insert("test", VersionRecord::new("test", "2.0"));
        store.save(&cache).unwrap();

        assert_eq!(store.load(), cache);
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path().join("nested").join("dir").join("cache.yml"));

        store.save(&VersionCache::new()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.save(&VersionCache::new()).unwrap();

        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["cache.yml".to_string()]);
    }

    #[test]
    fn failed_save_removes_temp_file() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("cache.yml");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("occupied"), "x").unwrap();
        let store = CacheStore::new(&target);

        let err = store.save(&VersionCache::new()).unwrap_err();

        assert!(matches!(err, UpdateError::CacheWrite { .. }));
        assert!(!store.temp_path().exists());
        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["cache.yml".to_string()]);
    }

    #[test]
    fn clear_removes_file() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.save(&VersionCache::new()).unwrap();

        assert!(store.clear().unwrap());
        assert!(!store.path().exists());
    }

    #[test]
    fn clear_missing_file_returns_false() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        assert!(!store.clear().unwrap());
    }
}
