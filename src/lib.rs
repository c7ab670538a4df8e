//! Release manifest builder library.
//!
//! This crate aggregates pre-computed `.sha256` files into a single JSON
//! manifest pairing a release version with every artefact checksum. It backs
//! the `release-manifest` CLI binary and can be used directly from build
//! scripts or tests.
//!
//! # Modules
//!
//! - [`artefact`] - Release version, artefact name, checksum and manifest types
//! - [`builder`] - Manifest assembly from a base directory
//! - [`cli`] - Command-line argument definitions
//! - [`error`] - Semantic error types
//! - [`output`] - JSON rendering and emission
//! - [`scanner`] - Checksum file discovery

pub mod artefact;
pub mod builder;
pub mod cli;
pub mod error;
pub mod output;
pub mod scanner;
