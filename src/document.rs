//! Manifest document contents

use crate::version_field::{read_version, write_version, VersionFieldError};

/// The full text of a manifest file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// The document text content
    pub text: String,
}

impl Document {
    /// Create a new document with the given text
    pub fn new(text: String) -> Self {
        Self { text }
    }

    /// Borrow the document text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the document and return its text
    pub fn into_text(self) -> String {
        self.text
    }

    /// The version from the first `version = "X.Y.Z` field
    pub fn version(&self) -> Result<String, VersionFieldError> {
        read_version(&self.text)
    }

    /// A copy of this document with its first version field rewritten
    pub fn with_version(&self, version: &str) -> Self {
        Self::new(write_version(&self.text, version))
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text.to_string())
    }
}
