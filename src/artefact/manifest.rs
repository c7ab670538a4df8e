//! Release manifest schema.
//!
//! A manifest pairs a release version with the checksum of every artefact
//! discovered under the base directory:
//!
//! ```json
//! {
//!   "version": "1.2.3",
//!   "checksums": {
//!     "agent": "cafef00d"
//!   }
//! }
//! ```
//!
//! Checksums are keyed by [`ArtefactName`] in a `BTreeMap`, so serialised keys
//! always appear in sorted order regardless of discovery order.

use super::checksum::Checksum;
use super::naming::ArtefactName;
use super::release_version::ReleaseVersion;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from artefact name to checksum.
pub type ChecksumMap = BTreeMap<ArtefactName, Checksum>;

/// The manifest document describing one release.
///
/// # Examples
///
/// ```
/// use release_manifest::artefact::checksum::Checksum;
/// use release_manifest::artefact::manifest::ReleaseManifest;
/// use release_manifest::artefact::naming::ArtefactName;
/// use release_manifest::artefact::release_version::ReleaseVersion;
///
/// let mut manifest = ReleaseManifest::new(ReleaseVersion::new("1.2.3"));
/// manifest.insert(ArtefactName::from("agent"), Checksum::new("deadbeef"));
/// let previous = manifest.insert(ArtefactName::from("agent"), Checksum::new("cafef00d"));
///
/// assert_eq!(previous, Some(Checksum::new("deadbeef")));
/// assert_eq!(manifest.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseManifest {
    version: ReleaseVersion,
    checksums: ChecksumMap,
}

impl ReleaseManifest {
    /// Create a manifest for `version` with no checksums.
    #[must_use]
    pub fn new(version: ReleaseVersion) -> Self {
        Self {
            version,
            checksums: ChecksumMap::new(),
        }
    }

    /// Record `checksum` for `name`, returning the value it replaced.
    pub fn insert(&mut self, name: ArtefactName, checksum: Checksum) -> Option<Checksum> {
        self.checksums.insert(name, checksum)
    }

    /// Return the release version.
    #[must_use]
    pub fn version(&self) -> &ReleaseVersion {
        &self.version
    }

    /// Return all recorded checksums.
    #[must_use]
    pub fn checksums(&self) -> &ChecksumMap {
        &self.checksums
    }

    /// Look up the checksum recorded for `name`.
    #[must_use]
    pub fn checksum(&self, name: &str) -> Option<&Checksum> {
        self.checksums.get(&ArtefactName::from(name))
    }

    /// Return the number of recorded artefacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checksums.len()
    }

    /// Returns true if no checksums were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checksums.is_empty()
    }
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
