//! Check command implementation.
//!
//! Provides `checkupdate check <app>` and the default self-check.

use crate::checker::{Outcome, UpdateChecker};
use crate::cli::args::CheckArgs;
use crate::config::CheckerConfig;
use crate::ui::UserInterface;
use crate::{PROGRAM_NAME, VERSION};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    config: CheckerConfig,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(config: CheckerConfig, args: CheckArgs) -> Self {
        Self { config, args }
    }

    /// Check this binary against the update source without touching the cache.
    pub fn self_check(config: CheckerConfig) -> Self {
        Self::new(
            config,
            CheckArgs {
                app: PROGRAM_NAME.to_string(),
                current: Some(VERSION.to_string()),
                no_persist: true,
            },
        )
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let checker = UpdateChecker::new(self.config.clone())?;
        let outcome = checker.check(
            &self.args.app,
            self.args.current.as_deref(),
            !self.args.no_persist,
        )?;

        report_outcome(&self.args.app, &outcome, ui);
        Ok(CommandResult::success())
    }
}

/// Print the result of a check.
pub fn report_outcome(app: &str, outcome: &Outcome, ui: &mut dyn UserInterface) {
    match outcome {
        Outcome::UpdateAvailable {
            url,
            baseline,
            latest,
        } => {
            let mut msg = format!(
                "{}: update available ({} -> {})",
                app, baseline, latest.version
            );
            if !url.is_empty() {
                msg.push_str(&format!(" at {}", url));
            }
            ui.success(&msg);
        }
        Outcome::UpToDate { baseline, .. } => {
            ui.message(&format!("{}: no update needed ({})", app, baseline));
        }
    }
}
