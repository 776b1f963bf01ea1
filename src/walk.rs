//! Candidate discovery
//!
//! Expands root directories plus a glob pattern into a lazy stream of
//! regular-file paths. The walk is pull-based: nothing is materialized up
//! front, so very large trees stay memory-bounded while the coordinator
//! feeds paths into the worker pool.

use anyhow::{Context, Result};
use globset::{Glob, GlobMatcher};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Compile the search pattern once for the whole run.
///
/// Patterns are matched against candidate file names, never full paths,
/// so a separator in the pattern can only ever match nothing.
pub fn compile_pattern(pattern: &str) -> Result<GlobMatcher> {
    if pattern.contains('/') {
        tracing::warn!(
            "pattern '{pattern}' contains a path separator; patterns match file names only, \
             so this will likely find no files"
        );
    }
    Ok(Glob::new(pattern)
        .with_context(|| format!("invalid glob pattern: {pattern}"))?
        .compile_matcher())
}

/// Resolve roots to absolute paths, dropping anything that is missing or
/// not a directory. Dropped roots get a warning rather than failing the
/// run.
pub fn resolve_roots(roots: &[PathBuf]) -> Vec<PathBuf> {
    roots
        .iter()
        .filter_map(|root| match fs::canonicalize(root) {
            Ok(resolved) if resolved.is_dir() => Some(resolved),
            _ => {
                tracing::warn!(
                    "skipping root {}: not an existing directory",
                    root.display()
                );
                None
            }
        })
        .collect()
}

/// Lazily yield regular files under `root` whose file name matches the
/// pattern. Shallow mode stays at the root level; recursive mode descends
/// every subdirectory. Symlinks are not followed, so a link to a
/// directory never counts as a file.
pub fn candidates(
    root: &Path,
    matcher: GlobMatcher,
    recursive: bool,
) -> impl Iterator<Item = PathBuf> + use<> {
    let mut walk = WalkDir::new(root);
    if !recursive {
        walk = walk.max_depth(1);
    }

    walk.into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("walk error: {e}");
                None
            }
        })
        .filter(move |entry| {
            entry.file_type().is_file() && matcher.is_match(Path::new(entry.file_name()))
        })
        .map(|entry| entry.into_path())
}
