//! Manifest files on disk
//!
//! Host-side glue around an [`Updater`]: reads a manifest into a
//! [`Document`], runs the updater over it, and writes the result back.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::document::Document;
use crate::updater::Updater;
use crate::version_field::VersionFieldError;

/// Errors produced while reading or writing a manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}", path.display())]
    Version {
        path: PathBuf,
        #[source]
        source: VersionFieldError,
    },
}

/// What happened to a manifest on write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was rewritten; `previous` is the version it held before
    Updated { previous: String },
    /// The rewrite produced identical text, so the file was left alone
    Unchanged,
}

/// Load a manifest into a [`Document`]
pub fn load_document(path: &Path) -> Result<Document, ManifestError> {
    fs::read_to_string(path)
        .map(Document::new)
        .map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })
}

/// Read the version of the manifest at `path`
pub fn read_manifest_version(
    path: &Path,
    updater: &dyn Updater,
) -> Result<String, ManifestError> {
    let document = load_document(path)?;
    updater
        .read_version(document.as_str())
        .map_err(|source| ManifestError::Version {
            path: path.to_path_buf(),
            source,
        })
}

/// Rewrite the version of the manifest at `path`
///
/// The file is only written when the text actually changes. A manifest with
/// no version field is left untouched.
pub fn write_manifest_version(
    path: &Path,
    version: &str,
    updater: &dyn Updater,
) -> Result<WriteOutcome, ManifestError> {
    let document = load_document(path)?;
    let updated = updater.write_version(document.as_str(), version);

    if updated == document.text {
        tracing::debug!("No changes needed for {}", path.display());
        return Ok(WriteOutcome::Unchanged);
    }

    // A changed document always had a field to rewrite
    let previous = updater
        .read_version(document.as_str())
        .map_err(|source| ManifestError::Version {
            path: path.to_path_buf(),
            source,
        })?;

    fs::write(path, &updated).map_err(|source| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Updated {} from {} to {}", path.display(), previous, version);
    Ok(WriteOutcome::Updated { previous })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::updater::VersionField;
    use assert_matches::assert_matches;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn manifest(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_read_manifest_version() {
        let file = manifest("[package]\nname = \"demo\"\nversion = \"0.4.2\"\n");
        let version = read_manifest_version(file.path(), &VersionField).unwrap();
        assert_eq!(version, "0.4.2");
    }

    #[test]
    fn test_read_manifest_without_version() {
        let file = manifest("[workspace]\nmembers = []\n");
        assert_matches!(
            read_manifest_version(file.path(), &VersionField),
            Err(ManifestError::Version {
                source: VersionFieldError::NotFound,
                ..
            })
        );
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");
        assert_matches!(
            read_manifest_version(&path, &VersionField),
            Err(ManifestError::Read { .. })
        );
    }

    #[test]
    fn test_write_manifest_version() {
        let file = manifest("[package]\nversion = \"0.4.2\"\n");

        let outcome = write_manifest_version(file.path(), "0.5.0", &VersionField).unwrap();
        assert_eq!(
            outcome,
            WriteOutcome::Updated {
                previous: "0.4.2".to_string()
            }
        );
        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            "[package]\nversion = \"0.5.0\"\n"
        );
    }

    #[test]
    fn test_write_same_version_is_unchanged() {
        let file = manifest("[package]\nversion = \"0.4.2\"\n");
        let outcome = write_manifest_version(file.path(), "0.4.2", &VersionField).unwrap();
        assert_eq!(outcome, WriteOutcome::Unchanged);
    }

    #[test]
    fn test_write_manifest_without_version_leaves_file() {
        let contents = "[workspace]\nmembers = [\"a\"]\n";
        let file = manifest(contents);

        let outcome = write_manifest_version(file.path(), "1.0.0", &VersionField).unwrap();
        assert_eq!(outcome, WriteOutcome::Unchanged);
        assert_eq!(fs::read_to_string(file.path()).unwrap(), contents);
    }
}
