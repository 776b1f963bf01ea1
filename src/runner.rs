//! Run coordinator
//!
//! Wires candidate discovery into the worker pool: the enumerating thread
//! streams matching paths into the pool while workers run the transform
//! engine, and the run is only done once every submitted task has
//! finished. Individual file failures are collected, never propagated.

use anyhow::Result;
use std::time::{Duration, Instant};

use crate::config::JobSpec;
use crate::parallel::WorkerPool;
use crate::transform::{self, TransformResult};
use crate::walk;

/// Aggregated outcome of a whole run
#[derive(Debug)]
pub struct RunSummary {
    pub results: Vec<TransformResult>,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }
}

/// Enumerate candidates under every root and transform each one on the
/// pool. Completion order across files is unspecified.
pub fn run(spec: &JobSpec) -> Result<RunSummary> {
    let start = Instant::now();

    let matcher = walk::compile_pattern(&spec.pattern)?;
    let pool = WorkerPool::new(spec.n_threads);

    let candidates = spec
        .roots
        .iter()
        .flat_map(|root| walk::candidates(root, matcher.clone(), spec.recursive));

    let results = pool.run(candidates, |path| {
        transform::transform(&path, spec.direction, spec.keep_orig, spec.verbose)
    })?;

    Ok(RunSummary {
        results,
        elapsed: start.elapsed(),
    })
}
