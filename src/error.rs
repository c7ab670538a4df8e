//! Error types for release manifest generation.
//!
//! Each variant names the failure site and carries the path involved, so the
//! CLI can report which folder or checksum file stopped the run.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while building or emitting a release manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// A directory listing failed (missing path, permissions, non-UTF-8 entry).
    #[error("failed to read directory {path}")]
    ReadDirectory {
        /// Directory that could not be listed.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A top-level entry of the base directory is not itself a directory.
    #[error("expected a directory at {path}")]
    NotADirectory {
        /// Path of the stray entry.
        path: Utf8PathBuf,
    },

    /// A checksum file could not be opened or read as UTF-8 text.
    #[error("failed to read checksum file {path}")]
    ReadChecksum {
        /// Checksum file that could not be read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// JSON serialisation of the manifest failed.
    #[error("failed to serialise manifest")]
    Serialize {
        /// Underlying serialisation error.
        #[source]
        source: serde_json::Error,
    },

    /// Writing the manifest to standard output failed.
    #[error("failed to write manifest to standard output")]
    WriteStdout {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the manifest to the requested output file failed.
    #[error("failed to write manifest to {path}")]
    WriteFile {
        /// Destination that could not be written.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using [`ManifestError`].
pub type Result<T> = std::result::Result<T, ManifestError>;
