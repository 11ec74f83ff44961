//! Checker configuration.
//!
//! Configuration is an explicit value handed to the checker. Defaults are
//! applied when it is built; environment variables and CLI flags override
//! individual fields on top of them.

use std::path::PathBuf;
use std::time::Duration;

use crate::cache::default_cache_path;
use crate::manifest::DEFAULT_TIMEOUT;

/// Default manifest location.
pub const DEFAULT_UPDATE_SOURCE: &str =
    "https://raw.github.com/mwichmann/PyBlog/master/updater.d/update-log.yml";

/// Environment variable overriding the manifest location.
pub const ENV_SOURCE: &str = "UPDATE_SOURCE";

/// Environment variable overriding the cache file path.
pub const ENV_CACHE: &str = "UPDATE_CACHE";

/// Environment variable enabling debug output.
pub const ENV_DEBUG: &str = "UPDATE_DEBUG";

/// Environment variable overriding the fetch timeout, in seconds.
pub const ENV_TIMEOUT: &str = "UPDATE_TIMEOUT";

/// Filter directive used when debug output is on.
pub const DEBUG_LOG_DIRECTIVE: &str = "checkupdate=debug";

/// Settings for an [`UpdateChecker`](crate::UpdateChecker).
///
/// # Example
///
/// ```
/// use checkupdate::CheckerConfig;
/// use std::time::Duration;
///
/// let config = CheckerConfig::default()
///     .with_source("file://update-log.yml")
///     .with_cache_path("/tmp/versions.yml")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.source, "file://update-log.yml");
/// assert!(!config.debug);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Manifest location (`file://`, `http(s)://` or a plain path).
    pub source: String,
    /// Cache file path.
    pub cache_path: PathBuf,
    /// Emit progress output.
    pub debug: bool,
    /// Timeout for remote manifest fetches.
    pub timeout: Duration,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_UPDATE_SOURCE.to_string(),
            cache_path: default_cache_path(),
            debug: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CheckerConfig {
    /// Build a config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config with a custom env var lookup (for testing).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(source) = lookup(ENV_SOURCE).filter(|v| !v.is_empty()) {
            config.source = source;
        }
        if let Some(cache) = lookup(ENV_CACHE).filter(|v| !v.is_empty()) {
            config.cache_path = PathBuf::from(cache);
        }
        if let Some(debug) = lookup(ENV_DEBUG) {
            config.debug = is_truthy(&debug);
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT) {
            match timeout.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => tracing::warn!("ignoring invalid {} value '{}'", ENV_TIMEOUT, timeout),
            }
        }

        config
    }

    /// Log filter directive forced by the debug setting.
    ///
    /// `None` leaves the choice to `RUST_LOG` or the binary's default.
    pub fn log_directive(&self) -> Option<&'static str> {
        self.debug.then_some(DEBUG_LOG_DIRECTIVE)
    }

    /// Override the manifest location.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Override the cache file path.
    pub fn with_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = path.into();
        self
    }

    /// Turn debug output on or off.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Override the fetch timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
