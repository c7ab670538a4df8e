//! Release version newtype.
//!
//! The version is echoed into the manifest exactly as supplied; no semantic
//! versioning rules are applied.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The release version recorded in a manifest.
///
/// Stored as an opaque string. Empty strings and surrounding whitespace are
/// preserved.
///
/// # Examples
///
/// ```
/// use release_manifest::artefact::release_version::ReleaseVersion;
///
/// let version = ReleaseVersion::new(" 1.2.3-rc.1 ");
/// assert_eq!(version.as_str(), " 1.2.3-rc.1 ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleaseVersion(String);

impl ReleaseVersion {
    /// Create a new version wrapper.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Return the version as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ReleaseVersion {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ReleaseVersion {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
