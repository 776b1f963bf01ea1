//! # pargz — multithreaded gzip over directory trees
//!
//! Locates files under one or more root directories with a glob pattern
//! and gzip-compresses or decompresses each match on a bounded worker
//! pool, optionally deleting the originals. Output is the standard gzip
//! container format, interoperable with any gzip-capable tool.
//!
//! ```bash
//! # Compress every .txt under ./logs on 8 threads, keeping originals
//! pargz ./logs '*.txt' -n 8 -k yes -p no
//!
//! # Undo it
//! pargz ./logs '*.txt.gz' -d yes -p no
//! ```

pub mod cli;
pub mod config;
pub mod parallel;
pub mod runner;
pub mod transform;
pub mod walk;

pub use cli::Cli;
pub use config::{Direction, JobSpec};
