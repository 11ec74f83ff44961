//! Version cache.
//!
//! This module provides the persisted mapping from application name to
//! the last version observed for it. The cache is the baseline that each
//! update check compares the manifest against.

pub mod entry;
pub mod store;

pub use entry::VersionCache;
pub use store::CacheStore;

use std::path::PathBuf;

/// Name of the cache file in the user's home directory.
pub const CACHE_FILE_NAME: &str = ".version_cache.yml";

/// Get the default cache file path.
pub fn default_cache_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CACHE_FILE_NAME)
}
