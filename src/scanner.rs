//! Checksum file discovery.
//!
//! The base directory layout is one folder per platform or artefact group,
//! each holding zero or more checksum files:
//!
//! ```text
//! {base}/{folder}/{artefact}.sha256
//! ```
//!
//! Only one level of folders is visited. Listings are sorted by name so the
//! traversal order, and therefore which duplicate wins, does not depend on
//! the filesystem.

use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;

use crate::artefact::checksum::Checksum;
use crate::artefact::naming::ArtefactName;
use crate::error::{ManifestError, Result};

/// How to treat entries directly inside the base directory that are not
/// directories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StrayEntryPolicy {
    /// Fail the scan with [`ManifestError::NotADirectory`].
    #[default]
    Reject,
    /// Ignore the entry and keep scanning.
    Skip,
}

/// A checksum file found during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumFile {
    /// Name of the folder the file was found in.
    pub folder: String,
    /// Artefact name derived from the filename.
    pub artefact: ArtefactName,
    /// Full path to the checksum file.
    pub path: Utf8PathBuf,
}

/// Scan `base` for checksum files, visiting folders in name order.
///
/// Files within each folder are also returned in name order. Files whose
/// names do not end in `.sha256` are ignored.
///
/// # Errors
///
/// Returns [`ManifestError::ReadDirectory`] if `base` or one of its folders
/// cannot be listed, and [`ManifestError::NotADirectory`] for a stray entry
/// when `policy` is [`StrayEntryPolicy::Reject`].
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use release_manifest::scanner::{StrayEntryPolicy, scan_release_dir};
///
/// let temp = tempfile::tempdir().expect("temp dir");
/// let base = Utf8Path::from_path(temp.path()).expect("UTF-8 temp dir");
/// std::fs::create_dir(base.join("linux")).expect("mkdir");
/// std::fs::write(base.join("linux/agent.sha256"), "deadbeef\n").expect("write");
///
/// let found = scan_release_dir(base, StrayEntryPolicy::Reject).expect("scan");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].artefact.as_str(), "agent");
/// ```
pub fn scan_release_dir(base: &Utf8Path, policy: StrayEntryPolicy) -> Result<Vec<ChecksumFile>> {
    let mut found = Vec::new();

    for (folder, folder_path) in sorted_entries(base)? {
        if !folder_path.is_dir() {
            match policy {
                StrayEntryPolicy::Reject => {
                    return Err(ManifestError::NotADirectory { path: folder_path });
                }
                StrayEntryPolicy::Skip => {
                    debug!("skipping stray entry {folder_path}");
                    continue;
                }
            }
        }

        debug!("scanning folder {folder_path}");
        found.extend(scan_folder(&folder, &folder_path)?);
    }

    Ok(found)
}

/// Collect the checksum files directly inside one folder.
fn scan_folder(folder: &str, folder_path: &Utf8Path) -> Result<Vec<ChecksumFile>> {
    let files = sorted_entries(folder_path)?
        .into_iter()
        .filter_map(|(file_name, path)| {
            ArtefactName::from_checksum_filename(&file_name).map(|artefact| ChecksumFile {
                folder: folder.to_owned(),
                artefact,
                path,
            })
        })
        .collect();
    Ok(files)
}

/// List `dir` as `(file_name, path)` pairs sorted by file name.
fn sorted_entries(dir: &Utf8Path) -> Result<Vec<(String, Utf8PathBuf)>> {
    let read_err = |source: io::Error| ManifestError::ReadDirectory {
        path: dir.to_owned(),
        source,
    };

    let mut entries = dir
        .read_dir_utf8()
        .map_err(read_err)?
        .map(|entry| entry.map(|e| (e.file_name().to_owned(), e.path().to_owned())))
        .collect::<io::Result<Vec<_>>>()
        .map_err(read_err)?;
    entries.sort();
    Ok(entries)
}

/// Read a checksum file and trim surrounding whitespace.
///
/// # Errors
///
/// Returns [`ManifestError::ReadChecksum`] if the file cannot be read or is
/// not valid UTF-8.
pub fn read_checksum(path: &Utf8Path) -> Result<Checksum> {
    let contents = fs::read_to_string(path).map_err(|source| ManifestError::ReadChecksum {
        path: path.to_owned(),
        source,
    })?;
    Ok(Checksum::from_file_contents(&contents))
}
