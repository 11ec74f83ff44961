//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! dispatched via [`CommandDispatcher`], which routes CLI subcommands to
//! their implementations.

pub mod cache;
pub mod check;
pub mod dispatcher;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
