//! Version field matching
//!
//! Locates the first `version = "X.Y.Z` occurrence in a manifest and either
//! returns the numeric part or rewrites it. Both operations work on the raw
//! text, so every byte outside the match is preserved.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

// Digits are ASCII only; `\d` would also accept other Unicode digits
lazy_static! {
    /// Captures the `MAJOR.MINOR.PATCH` digits after the first `version = "`
    static ref READ_RE: Regex = Regex::new(r#"version = "([0-9]+\.[0-9]+\.[0-9]+)"#).unwrap();
    /// Matches up to the last digit; the closing quote is left in place
    static ref WRITE_RE: Regex = Regex::new(r#"version = "[0-9]+\.[0-9]+\.[0-9]+"#).unwrap();
}

/// Literal text re-inserted in front of the new version on write
const FIELD_PREFIX: &str = "version = \"";

/// Errors produced while reading a version field
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionFieldError {
    #[error("no `version = \"X.Y.Z\"` field found")]
    NotFound,
}

/// Return the version from the first `version = "X.Y.Z` field in `contents`.
///
/// Fails with [`VersionFieldError::NotFound`] when no field matches, since the
/// caller has no fallback version to report.
pub fn read_version(contents: &str) -> Result<String, VersionFieldError> {
    READ_RE
        .captures(contents)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or(VersionFieldError::NotFound)
}

/// Replace the first `version = "X.Y.Z` field in `contents` with `version`.
///
/// `version` is inserted as-is without validation. Text without a version
/// field is returned unchanged.
pub fn write_version(contents: &str, version: &str) -> String {
    let mut updated = contents.to_string();
    if let Some(m) = WRITE_RE.find(contents) {
        updated.replace_range(m.range(), &format!("{FIELD_PREFIX}{version}"));
    }
    updated
}
