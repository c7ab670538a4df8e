//! Domain types for release manifests.
//!
//! - [`release_version`] - Opaque release version string (`ReleaseVersion`).
//! - [`naming`] - Artefact names derived from checksum filenames (`ArtefactName`).
//! - [`checksum`] - Checksum values read from `.sha256` files (`Checksum`).
//! - [`manifest`] - The manifest document and its JSON schema (`ReleaseManifest`).

pub mod checksum;
pub mod manifest;
pub mod naming;
pub mod release_version;
