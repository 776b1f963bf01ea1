//! Immutable per-run configuration
//!
//! All settings are collected into a single [`JobSpec`] at startup and
//! validated before any file is touched. Nothing here is mutated once a
//! run begins.

use anyhow::{Result, bail};
use std::path::PathBuf;

/// Filename suffix marking a gzip container
pub const GZIP_SUFFIX: &str = ".gz";

/// Whether a run compresses or decompresses the located files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Compress,
    Decompress,
}

impl Direction {
    /// Present-tense verb for progress messages
    pub fn verb(&self) -> &'static str {
        match self {
            Direction::Compress => "Compressing",
            Direction::Decompress => "Decompressing",
        }
    }
}

/// Configuration for one run, built from CLI arguments
#[derive(Debug, Clone)]
pub struct JobSpec {
    /// Resolved root directories to search under
    pub roots: Vec<PathBuf>,
    /// Glob pattern matched against candidate file names
    pub pattern: String,
    pub direction: Direction,
    /// Keep the original file after a successful transform
    pub keep_orig: bool,
    /// Descend into subdirectories when globbing
    pub recursive: bool,
    /// Worker pool size
    pub n_threads: usize,
    /// Emit a progress line per file
    pub verbose: bool,
    /// Exit nonzero when any individual file fails
    pub fail_on_error: bool,
}

impl JobSpec {
    /// Check cross-field invariants before any enumeration or file work.
    ///
    /// A decompression job only makes sense over `.gz` files, and a
    /// compression job must not target files that are already gzipped.
    pub fn validate(&self) -> Result<()> {
        match self.direction {
            Direction::Decompress if !self.pattern.ends_with(GZIP_SUFFIX) => {
                bail!(
                    "a decompression (gunzip) job was specified but the search pattern \
                     '{}' does not end in {}",
                    self.pattern,
                    GZIP_SUFFIX
                );
            }
            Direction::Compress if self.pattern.ends_with(GZIP_SUFFIX) => {
                bail!(
                    "a compression (gzip) job was specified but the search pattern '{}' \
                     targets {} files; cannot gzip files that are already gzipped",
                    self.pattern,
                    GZIP_SUFFIX
                );
            }
            _ => {}
        }

        if self.n_threads == 0 {
            bail!("n_threads must be a positive integer");
        }

        Ok(())
    }
}
