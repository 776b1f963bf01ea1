//! Command-line interface
//!
//! Argument parsing, boolean-like string coercion, pre-run validation,
//! the optional confirmation prompt, and logging setup. Everything here
//! happens before the first file is touched.

use anyhow::{Context, Result, bail};
use clap::Parser;
use dialoguer::Confirm;
use std::path::PathBuf;

pub mod output;

use crate::config::{Direction, JobSpec};
use crate::runner;
use crate::walk;

/// A multithreaded gzip compressor and decompressor over directory trees
#[derive(Parser, Debug)]
#[command(name = "pargz", version, about, long_about = None)]
pub struct Cli {
    /// Directories to base the glob search off of
    #[arg(value_name = "ROOT_DIR", num_args = 1.., required = true)]
    pub root_dirs: Vec<PathBuf>,

    /// Glob pattern matched against candidate file names (not paths)
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Decompress located files instead of compressing them
    #[arg(short, long, value_name = "BOOL", action = clap::ArgAction::Set, default_value = "false", value_parser = parse_boolish)]
    pub decompress: bool,

    /// Keep the original file after a successful transform
    #[arg(short, long, value_name = "BOOL", action = clap::ArgAction::Set, default_value = "false", value_parser = parse_boolish)]
    pub keep_orig: bool,

    /// Search recursively under each root directory
    #[arg(short, long, value_name = "BOOL", action = clap::ArgAction::Set, default_value = "true", value_parser = parse_boolish)]
    pub recursive: bool,

    /// Number of worker threads
    #[arg(short, long, value_name = "N", default_value_t = 4)]
    pub n_threads: usize,

    /// Review the resolved configuration and confirm before running
    #[arg(short, long, value_name = "BOOL", action = clap::ArgAction::Set, default_value = "true", value_parser = parse_boolish)]
    pub pause: bool,

    /// Print a progress line for each file as it is processed
    #[arg(short, long, value_name = "BOOL", action = clap::ArgAction::Set, default_value = "false", value_parser = parse_boolish)]
    pub verbose: bool,

    /// Exit nonzero if any individual file fails
    #[arg(long)]
    pub fail_on_error: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose);

        let direction = if self.decompress {
            Direction::Decompress
        } else {
            Direction::Compress
        };

        let spec = JobSpec {
            roots: walk::resolve_roots(&self.root_dirs),
            pattern: self.pattern,
            direction,
            keep_orig: self.keep_orig,
            recursive: self.recursive,
            n_threads: self.n_threads,
            verbose: self.verbose,
            fail_on_error: self.fail_on_error,
        };
        spec.validate()?;

        if self.pause && !confirm(&spec)? {
            output::info("Aborted, no files were touched");
            return Ok(());
        }

        let summary = runner::run(&spec)?;
        let report = format!(
            "{} file(s) processed, {} failed in {:.2}s",
            summary.succeeded(),
            summary.failed(),
            summary.elapsed.as_secs_f64()
        );
        if summary.failed() == 0 {
            output::success(&report);
        } else {
            output::error(&report);
            if spec.fail_on_error {
                bail!("{} file(s) failed", summary.failed());
            }
        }

        Ok(())
    }
}

/// Show the resolved configuration and ask for a go-ahead. Invalid input
/// re-prompts; only an explicit no declines.
fn confirm(spec: &JobSpec) -> Result<bool> {
    println!("Arguments are as follows:");
    let roots = spec
        .roots
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n             ");
    output::property("Directories to search", &roots);
    output::property("Glob pattern", &spec.pattern);
    output::property("Number of threads", &spec.n_threads.to_string());
    let decompress = spec.direction == Direction::Decompress;
    output::property("Decompress located files", &decompress.to_string());
    output::property("Keep original files", &spec.keep_orig.to_string());
    output::property("Recursive search", &spec.recursive.to_string());
    output::property("Verbose", &spec.verbose.to_string());

    Confirm::new()
        .with_prompt("[y|n] Proceed?")
        .interact()
        .context("failed to read confirmation; rerun with --pause false to skip the prompt")
}

/// Interpret a boolean-like CLI string
fn parse_boolish(s: &str) -> Result<bool, String> {
    match s.to_ascii_lowercase().as_str() {
        "yes" | "true" | "t" | "y" | "1" => Ok(true),
        "no" | "false" | "f" | "n" | "0" => Ok(false),
        _ => Err(format!(
            "boolean value expected (yes/true/t/y/1 or no/false/f/n/0), got '{s}'"
        )),
    }
}

fn setup_logging(verbose: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            tracing_subscriber::EnvFilter::new("info")
        } else {
            tracing_subscriber::EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
