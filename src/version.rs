//! Dotted-numeric version parsing and ordering.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, UpdateError};

/// A version made of `.`-separated numeric segments, such as `1.10.0`.
///
/// Segments compare numerically from left to right. Missing trailing
/// segments count as zero, so `1.0` and `1.0.0` are equal.
///
/// # Example
///
/// ```
/// use checkupdate::DottedVersion;
///
/// let old: DottedVersion = "1.9.0".parse().unwrap();
/// let new: DottedVersion = "1.10.0".parse().unwrap();
/// assert!(new > old);
/// ```
#[derive(Debug, Clone)]
pub struct DottedVersion {
    segments: Vec<u64>,
}

impl DottedVersion {
    /// Parse a version string, rejecting anything that is not dotted-numeric.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(invalid(input, "version is empty"));
        }

        let segments = trimmed
            .split('.')
            .map(|segment| parse_segment(input, segment))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { segments })
    }

    /// The numeric segments, in order.
    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    /// Whether `self` is strictly newer than `other`.
    pub fn is_newer_than(&self, other: &Self) -> bool {
        self > other
    }
}

fn parse_segment(input: &str, segment: &str) -> Result<u64> {
    if segment.is_empty() {
        return Err(invalid(input, "empty segment"));
    }
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(
            input,
            &format!("segment '{}' is not numeric", segment),
        ));
    }
    segment
        .parse()
        .map_err(|_| invalid(input, &format!("segment '{}' is too large", segment)))
}

fn invalid(version: &str, reason: &str) -> UpdateError {
    UpdateError::InvalidVersion {
        version: version.to_string(),
        reason: reason.to_string(),
    }
}

impl FromStr for DottedVersion {
    type Err = UpdateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Ord for DottedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        for i in 0..len {
            let a = self.segments.get(i).copied().unwrap_or(0);
            let b = other.segments.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for DottedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DottedVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DottedVersion {}

impl fmt::Display for DottedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.segments.iter().map(u64::to_string).collect();
        write!(f, "{}", parts.join("."))
    }
}

/// Compare versions to check if `latest` is newer than `baseline`.
pub fn is_newer_version(latest: &str, baseline: &str) -> Result<bool> {
    let latest = DottedVersion::parse(latest)?;
    let baseline = DottedVersion::parse(baseline)?;
    Ok(latest.is_newer_than(&baseline))
}
