//! Per-file transform engine
//!
//! Each invocation owns exactly one source path and its derived sibling:
//! `a.txt` ⇄ `a.txt.gz`. All bytes move through streamed readers and
//! writers, never a whole-file buffer, and every failure is folded into a
//! [`TransformResult`] so one bad file can never abort its siblings.

use anyhow::{Context, Result, bail};
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config::{Direction, GZIP_SUFFIX};

/// Outcome of one transform invocation
#[derive(Debug)]
pub struct TransformResult {
    pub success: bool,
    /// The original (source) path the task was given
    pub path: PathBuf,
}

/// Compress or decompress a single file, optionally removing the source.
///
/// Failures are reported, not raised: validation errors, direction/suffix
/// mismatches, and I/O errors all come back as a failed result with a
/// diagnostic logged against the offending path.
pub fn transform(
    path: &Path,
    direction: Direction,
    keep_orig: bool,
    verbose: bool,
) -> TransformResult {
    if verbose {
        tracing::info!("{} {}", direction.verb(), path.display());
    }

    match try_transform(path, direction, keep_orig) {
        Ok(()) => TransformResult {
            success: true,
            path: path.to_path_buf(),
        },
        Err(e) => {
            tracing::warn!("{}: {e:#}", path.display());
            TransformResult {
                success: false,
                path: path.to_path_buf(),
            }
        }
    }
}

fn try_transform(path: &Path, direction: Direction, keep_orig: bool) -> Result<()> {
    if !path.exists() {
        bail!("path does not exist");
    }
    if path.is_dir() {
        bail!("path is a directory; only files are supported");
    }

    // File names are raw bytes on Unix, so the suffix check and the
    // derived sibling name must go through OsStr, not str.
    let Some(name) = path.file_name() else {
        bail!("path has no file name");
    };
    let name_bytes = name.as_encoded_bytes();
    let gz_suffixed = name_bytes.ends_with(GZIP_SUFFIX.as_bytes());

    match direction {
        Direction::Decompress if gz_suffixed => {
            let stem = &name_bytes[..name_bytes.len() - GZIP_SUFFIX.len()];
            // SAFETY: the split is immediately before ".gz", a valid
            // non-empty UTF-8 substring of the encoded bytes.
            let stem = unsafe { OsStr::from_encoded_bytes_unchecked(stem) };
            decompress_into(path, &path.with_file_name(stem))?;
        }
        Direction::Compress if !gz_suffixed => {
            let mut out_name = name.to_os_string();
            out_name.push(GZIP_SUFFIX);
            compress_into(path, &path.with_file_name(out_name))?;
        }
        // Mismatched direction vs suffix: report and leave the filesystem alone.
        _ => bail!(
            "neither criteria for zipping nor unzipping found (direction does not \
             match the {GZIP_SUFFIX} suffix)"
        ),
    }

    if !keep_orig {
        remove_original(path)?;
    }

    Ok(())
}

/// Stream `src` through a gzip encoder into `dst`.
fn compress_into(src: &Path, dst: &Path) -> Result<()> {
    let mut reader =
        BufReader::new(File::open(src).with_context(|| "failed to open source for reading")?);
    let out = File::create(dst)
        .with_context(|| format!("failed to create output file {}", dst.display()))?;
    let mut encoder = GzEncoder::new(BufWriter::new(out), Compression::default());

    io::copy(&mut reader, &mut encoder).with_context(|| "gzip copy failed")?;
    encoder
        .finish()
        .and_then(|mut w| w.flush())
        .with_context(|| "failed to finalize gzip stream")?;
    Ok(())
}

/// Stream gzipped `src` through a decoder into plain `dst`.
fn decompress_into(src: &Path, dst: &Path) -> Result<()> {
    let reader =
        BufReader::new(File::open(src).with_context(|| "failed to open source for reading")?);
    let mut decoder = GzDecoder::new(reader);
    let mut out = BufWriter::new(
        File::create(dst)
            .with_context(|| format!("failed to create output file {}", dst.display()))?,
    );

    io::copy(&mut decoder, &mut out).with_context(|| "gunzip copy failed")?;
    out.flush().with_context(|| "failed to flush output file")?;
    Ok(())
}

/// Delete the source file. A path that is already gone is fine; the copy
/// completed, so the end state is what the user asked for.
fn remove_original(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| "failed to remove original file"),
    }
}
