//! Manifest rendering and emission.
//!
//! The manifest is rendered to a complete string before anything is written,
//! so a failed run never leaves a partial document behind.

use std::fs;
use std::io::Write;

use camino::Utf8PathBuf;

use crate::artefact::manifest::ReleaseManifest;
use crate::error::{ManifestError, Result};

/// Where the rendered manifest is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to standard output.
    #[default]
    Stdout,
    /// Write to the given file, replacing its contents.
    File(Utf8PathBuf),
}

impl From<Option<Utf8PathBuf>> for OutputTarget {
    fn from(path: Option<Utf8PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }
}

/// Render a manifest as JSON with 2-space indentation and a trailing newline.
///
/// # Errors
///
/// Returns [`ManifestError::Serialize`] if serialisation fails.
///
/// # Examples
///
/// ```
/// use release_manifest::artefact::manifest::ReleaseManifest;
/// use release_manifest::artefact::release_version::ReleaseVersion;
/// use release_manifest::output::render_manifest_json;
///
/// let manifest = ReleaseManifest::new(ReleaseVersion::new("1.2.3"));
/// let json = render_manifest_json(&manifest).expect("render");
/// assert_eq!(json, "{\n  \"version\": \"1.2.3\",\n  \"checksums\": {}\n}\n");
/// ```
pub fn render_manifest_json(manifest: &ReleaseManifest) -> Result<String> {
    let mut json = serde_json::to_string_pretty(manifest)
        .map_err(|source| ManifestError::Serialize { source })?;
    json.push('\n');
    Ok(json)
}

/// Write rendered manifest text to `target`.
///
/// `stdout` receives the text for [`OutputTarget::Stdout`]; file targets get
/// their parent directories created first.
///
/// # Errors
///
/// Returns [`ManifestError::WriteStdout`] or [`ManifestError::WriteFile`] if
/// the write fails.
pub fn emit_manifest(rendered: &str, target: &OutputTarget, stdout: &mut dyn Write) -> Result<()> {
    match target {
        OutputTarget::Stdout => stdout
            .write_all(rendered.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|source| ManifestError::WriteStdout { source }),
        OutputTarget::File(path) => {
            let write_err = |source| ManifestError::WriteFile {
                path: path.clone(),
                source,
            };
            if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
            fs::write(path, rendered).map_err(write_err)
        }
    }
}
