//! cargo-version-field: read and rewrite the version field of manifest files
//!
//! This library provides the pieces a version-bumping tool needs per file:
//! - Extracting the first `version = "X.Y.Z"` field from manifest text
//! - Substituting a new version while keeping every other byte intact
//! - An [`Updater`] trait for plugging the field into a bumping tool
//! - Host helpers for manifests on disk
//!
//! # Example
//!
//! ```
//! use cargo_version_field::{read_version, write_version};
//!
//! let text = "[package]\nname = \"demo\"\nversion = \"0.1.0\"\n";
//! assert_eq!(read_version(text).unwrap(), "0.1.0");
//!
//! let bumped = write_version(text, "0.2.0");
//! assert_eq!(bumped, "[package]\nname = \"demo\"\nversion = \"0.2.0\"\n");
//! ```

pub mod document;
pub mod manifest;
pub mod updater;
pub mod version_field;

pub use document::Document;
pub use updater::{Updater, VersionField};
pub use version_field::{read_version, write_version, VersionFieldError};
