//! Version manifests.
//!
//! This module provides:
//! - [`ManifestSource`] for parsing `file://`, `http(s)://` and plain-path locations
//! - [`Manifest`] for the parsed document
//! - [`ManifestFetcher`] for retrieving a manifest from a source

pub mod document;
pub mod fetch;
pub mod source;

pub use document::Manifest;
pub use fetch::{ManifestFetcher, DEFAULT_TIMEOUT};
pub use source::ManifestSource;
