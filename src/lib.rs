//! checkupdate - check whether an application has a newer published version.
//!
//! A YAML manifest lists the current version of one or more applications.
//! checkupdate compares an application's manifest entry against the last
//! version recorded in a local cache (or a version supplied by the
//! caller) and reports whether an update is available.
//!
//! # Modules
//!
//! - [`cache`] - Persisted version cache
//! - [`checker`] - Update check orchestration
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Checker configuration and environment overrides
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - Manifest sources, parsing and fetching
//! - [`record`] - Per-application version records
//! - [`timer`] - Scoped timing
//! - [`ui`] - Terminal output
//! - [`version`] - Dotted-numeric version ordering
//!
//! # Example
//!
//! ```
//! use checkupdate::{CheckerConfig, UpdateChecker};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let log = dir.path().join("update-log.yml");
//! std::fs::write(&log, "test:\n  version: '1.0'\n  url: file://dummy.py\n").unwrap();
//!
//! let config = CheckerConfig::default()
//!     .with_source(format!("file://{}", log.display()))
//!     .with_cache_path(dir.path().join("cache.yml"));
//! let checker = UpdateChecker::new(config).unwrap();
//!
//! let outcome = checker.check("test", Some("0.0"), false).unwrap();
//! assert_eq!(outcome.url(), Some("file://dummy.py"));
//! ```

pub mod cache;
pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod record;
pub mod timer;
pub mod ui;
pub mod version;

pub use cache::{CacheStore, VersionCache};
pub use checker::{Outcome, UpdateChecker};
pub use config::CheckerConfig;
pub use error::{Result, UpdateError};
pub use manifest::{Manifest, ManifestFetcher, ManifestSource};
pub use record::VersionRecord;
pub use timer::Timer;
pub use version::DottedVersion;

/// Name this binary checks itself under.
pub const PROGRAM_NAME: &str = "checkupdate";

/// Current version of checkupdate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
