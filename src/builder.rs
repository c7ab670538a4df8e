//! Manifest assembly.
//!
//! Combines the scanner output into a [`ReleaseManifest`]. Checksum files are
//! read one at a time in traversal order and later files overwrite earlier
//! ones with the same artefact name.

use camino::Utf8Path;
use log::{debug, info};

use crate::artefact::manifest::ReleaseManifest;
use crate::artefact::release_version::ReleaseVersion;
use crate::error::Result;
use crate::scanner::{StrayEntryPolicy, read_checksum, scan_release_dir};

/// Options controlling how the base directory is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Handling of non-directory entries directly inside the base directory.
    pub stray_entries: StrayEntryPolicy,
}

/// Build the manifest for `version` from the checksum files under `base`.
///
/// Nothing is returned unless every folder and checksum file was read
/// successfully.
///
/// # Errors
///
/// Propagates any [`crate::error::ManifestError`] raised while listing
/// folders or reading checksum files.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use release_manifest::artefact::release_version::ReleaseVersion;
/// use release_manifest::builder::{BuildOptions, build_manifest};
///
/// let temp = tempfile::tempdir().expect("temp dir");
/// let base = Utf8Path::from_path(temp.path()).expect("UTF-8 temp dir");
/// std::fs::create_dir(base.join("darwin")).expect("mkdir");
/// std::fs::write(base.join("darwin/agent.sha256"), "cafef00d").expect("write");
///
/// let manifest = build_manifest(ReleaseVersion::new("1.2.3"), base, &BuildOptions::default())
///     .expect("manifest");
/// assert_eq!(manifest.checksum("agent").map(|c| c.as_str()), Some("cafef00d"));
/// ```
pub fn build_manifest(
    version: ReleaseVersion,
    base: &Utf8Path,
    options: &BuildOptions,
) -> Result<ReleaseManifest> {
    let mut manifest = ReleaseManifest::new(version);

    for file in scan_release_dir(base, options.stray_entries)? {
        debug!("reading checksum file {}", file.path);
        let checksum = read_checksum(&file.path)?;
        let name = file.artefact.clone();
        if let Some(previous) = manifest.insert(file.artefact, checksum) {
            info!(
                "checksum for {name:?} from folder {} replaces earlier value {previous}",
                file.folder
            );
        }
    }

    info!(
        "collected {} checksum(s) for version {:?}",
        manifest.len(),
        manifest.version().as_str()
    );
    Ok(manifest)
}
