//! Artefact naming policy for checksum files.
//!
//! A checksum file is named `<artefact>.sha256`; the artefact name is the
//! filename with that suffix removed. The match is case-sensitive.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed suffix identifying checksum files.
pub const CHECKSUM_SUFFIX: &str = ".sha256";

/// The name of a release artefact, used as a key in the manifest.
///
/// The name may be empty: a file called exactly `.sha256` maps to `""`.
///
/// # Examples
///
/// ```
/// use release_manifest::artefact::naming::ArtefactName;
///
/// let name = ArtefactName::from_checksum_filename("agent.sha256").expect("checksum file");
/// assert_eq!(name.as_str(), "agent");
/// assert!(ArtefactName::from_checksum_filename("agent.tar.gz").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtefactName(String);

impl ArtefactName {
    /// Create an artefact name from a raw string.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Derive the artefact name from a checksum filename.
    ///
    /// Returns `None` when `filename` does not end in [`CHECKSUM_SUFFIX`].
    #[must_use]
    pub fn from_checksum_filename(filename: &str) -> Option<Self> {
        filename.strip_suffix(CHECKSUM_SUFFIX).map(Self::new)
    }

    /// Return the artefact name as a string slice.
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

impl AsRef<str> for ArtefactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ArtefactName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl fmt::Display for ArtefactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
