//! Configuration for update checks.
//!
//! See [`CheckerConfig`] for the available settings and the environment
//! variables that override them.

pub mod settings;

pub use settings::{
    CheckerConfig, DEBUG_LOG_DIRECTIVE, DEFAULT_UPDATE_SOURCE, ENV_CACHE, ENV_DEBUG, ENV_SOURCE,
    ENV_TIMEOUT,
};
