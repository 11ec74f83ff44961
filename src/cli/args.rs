//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use super::commands::cache::CacheArgs;
use crate::config::CheckerConfig;

/// checkupdate - Check whether a newer published version is available.
#[derive(Debug, Parser)]
#[command(name = "checkupdate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Manifest location: file://, http(s):// or a path (overrides UPDATE_SOURCE)
    #[arg(short, long, global = true)]
    pub source: Option<String>,

    /// Cache file path (overrides UPDATE_CACHE)
    #[arg(short, long, global = true)]
    pub cache: Option<PathBuf>,

    /// Fetch timeout in seconds (overrides UPDATE_TIMEOUT)
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging (same as UPDATE_DEBUG=1)
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Apply command-line overrides on top of `base`.
    pub fn apply_to(&self, base: CheckerConfig) -> CheckerConfig {
        let mut config = base;
        if let Some(source) = &self.source {
            config = config.with_source(source.clone());
        }
        if let Some(cache) = &self.cache {
            config = config.with_cache_path(cache.clone());
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if self.debug {
            config = config.with_debug(true);
        }
        config
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check checkupdate itself (default if no command specified)
    #[command(name = "self")]
    SelfCheck,

    /// Check an application against the update source
    Check(CheckArgs),

    /// Inspect or clear the version cache
    Cache(CacheArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Application name as listed in the manifest
    pub app: String,

    /// Version to compare against instead of the cached one
    #[arg(long, value_name = "VERSION")]
    pub current: Option<String>,

    /// Do not record the manifest entry in the cache
    #[arg(long)]
    pub no_persist: bool,
}
