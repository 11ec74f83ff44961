//! Cache command implementation.
//!
//! Provides `checkupdate cache list`, `checkupdate cache path` and
//! `checkupdate cache clear`.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cache::CacheStore;
use crate::config::CheckerConfig;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Arguments for the cache command.
#[derive(Debug, Clone, Args)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheSubcommand,
}

/// Cache subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum CacheSubcommand {
    /// List cached version records.
    List {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the cache file location.
    Path,
    /// Delete the cache file.
    Clear,
}

/// The cache command implementation.
pub struct CacheCommand {
    config: CheckerConfig,
    args: CacheArgs,
}

impl CacheCommand {
    /// Create a new cache command.
    pub fn new(config: CheckerConfig, args: CacheArgs) -> Self {
        Self { config, args }
    }
}

impl Command for CacheCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let store = CacheStore::new(&self.config.cache_path);

        match &self.args.command {
            CacheSubcommand::List { json } => list_cache(&store, *json, ui)?,
            CacheSubcommand::Path => ui.message(&store.path().display().to_string()),
            CacheSubcommand::Clear => clear_cache(&store, ui)?,
        }

        Ok(CommandResult::success())
    }
}

fn list_cache(store: &CacheStore, json: bool, ui: &mut dyn UserInterface) -> Result<()> {
    let cache = store.load();

    if json {
        ui.message(&serde_json::to_string_pretty(&cache)?);
        return Ok(());
    }

    if cache.is_empty() {
        ui.message("Cache is empty");
        return Ok(());
    }

    ui.message(&format!("{} cached entries:\n", cache.len()));
    for (app, record) in &cache {
        let mut line = format!("  {} {}", app, record.version);
        if !record.release_date.is_empty() {
            line.push_str(&format!(" ({})", record.release_date));
        }
        if !record.url.is_empty() {
            line.push_str(&format!("  {}", record.url));
        }
        ui.message(&line);
    }

    Ok(())
}

fn clear_cache(store: &CacheStore, ui: &mut dyn UserInterface) -> Result<()> {
    if store.clear()? {
        ui.success(&format!("Removed {}", store.path().display()));
    } else {
        ui.message(&format!("No cache file at {}", store.path().display()));
    }
    Ok(())
}
