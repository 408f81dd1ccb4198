//! Updater plugin interface
//!
//! A version-bumping tool drives one updater per tracked file: it reads the
//! current version, computes the next one, and asks the updater for the
//! rewritten contents.

use crate::version_field::{self, VersionFieldError};

/// The read/write pair a version-bumping tool calls for a tracked file
pub trait Updater {
    /// Extract the current version from the file contents
    fn read_version(&self, contents: &str) -> Result<String, VersionFieldError>;

    /// Produce the file contents with `version` substituted in
    fn write_version(&self, contents: &str, version: &str) -> String;
}

/// Updater for manifests carrying a `version = "X.Y.Z"` field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionField;

impl VersionField {
    pub fn new() -> Self {
        Self
    }
}

impl Updater for VersionField {
    fn read_version(&self, contents: &str) -> Result<String, VersionFieldError> {
        version_field::read_version(contents)
    }

    fn write_version(&self, contents: &str, version: &str) -> String {
        version_field::write_version(contents, version)
    }
}
