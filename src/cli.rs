//! CLI argument definitions for the manifest builder.
//!
//! This module defines the command-line interface using clap. It is separated
//! from the main entrypoint to keep the binary small and focused on
//! orchestration.

use camino::Utf8PathBuf;
use clap::Parser;
use log::LevelFilter;

use crate::builder::BuildOptions;
use crate::output::OutputTarget;
use crate::scanner::StrayEntryPolicy;

/// Aggregate per-artefact `.sha256` files into a release manifest.
#[derive(Parser, Debug, Default)]
#[command(name = "release-manifest")]
#[command(version, about)]
#[command(long_about = concat!(
    "Aggregate per-artefact .sha256 files into a release manifest.\n\n",
    "Every folder directly inside BASE is scanned for files named ",
    "<artefact>.sha256. The trimmed contents of each file are recorded under ",
    "the artefact name, and the manifest is printed as JSON. When the same ",
    "artefact name appears in several folders, the folder that sorts last wins.\n\n",
    "Options go before VERSION, which may itself start with a hyphen.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Print the manifest for a release:\n",
    "    $ release-manifest 1.2.3 dist/\n\n",
    "  Write the manifest to a file, ignoring loose files in dist/:\n",
    "    $ release-manifest --skip-stray-files -o dist/manifest.json 1.2.3 dist/",
))]
pub struct Cli {
    /// Release version recorded verbatim in the manifest.
    ///
    /// Values starting with `-` are accepted; options must come first.
    #[arg(value_name = "VERSION", allow_hyphen_values = true)]
    pub release_version: String,

    /// Directory holding one folder per artefact group.
    #[arg(value_name = "BASE")]
    pub base: Utf8PathBuf,

    /// Write the manifest to FILE instead of standard output.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,

    /// Ignore files placed directly inside BASE instead of failing.
    #[arg(long)]
    pub skip_stray_files: bool,

    /// Increase log verbosity (repeatable: -v, -vv, -vvv).
    #[arg(
        short,
        long = "verbose",
        action = clap::ArgAction::Count,
        conflicts_with = "quiet"
    )]
    pub verbosity: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbosity")]
    pub quiet: bool,
}

impl Cli {
    /// Build options derived from the command line.
    #[must_use]
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            stray_entries: if self.skip_stray_files {
                StrayEntryPolicy::Skip
            } else {
                StrayEntryPolicy::Reject
            },
        }
    }

    /// Destination for the rendered manifest.
    #[must_use]
    pub fn output_target(&self) -> OutputTarget {
        OutputTarget::from(self.output.clone())
    }

    /// Default log filter when `RUST_LOG` is unset.
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
