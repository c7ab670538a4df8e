//! Checksum value newtype.
//!
//! Checksums are passed through verbatim apart from surrounding whitespace.
//! No length, charset or case validation is applied.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A checksum read from a `.sha256` file.
///
/// # Examples
///
/// ```
/// use release_manifest::artefact::checksum::Checksum;
///
/// let checksum = Checksum::from_file_contents("  DeadBeef\n");
/// assert_eq!(checksum.as_str(), "DeadBeef");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checksum(String);

impl Checksum {
    /// Wrap a checksum value without modification.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Build a checksum from raw file contents, trimming surrounding whitespace.
    #[must_use]
    pub fn from_file_contents(contents: &str) -> Self {
        Self(contents.trim().to_owned())
    }

    /// Return the checksum as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Checksum {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
