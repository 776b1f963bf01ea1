//! Bounded worker pool over crossbeam channels
//!
//! Producer-consumer layout: the submitting thread feeds work items into a
//! bounded channel while a fixed set of workers drains it, pushing results
//! back over a second channel. The bounded work channel keeps a lazy
//! producer lazy, and `crossbeam::thread::scope` guarantees every
//! submitted item has been processed before `run` returns.

use anyhow::Result;
use crossbeam::channel::{Receiver, Sender, bounded};
use std::sync::Arc;

/// Channel capacity per worker slot
const BUFFER_PER_WORKER: usize = 2;

/// Fixed-size pool of worker threads
pub struct WorkerPool {
    workers: usize,
}

impl WorkerPool {
    /// Create a pool with exactly `workers` slots, never below one.
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run every item produced by `work_items` through `worker_fn` on the
    /// pool, returning all results once the pool has drained. Results
    /// arrive in completion order, not submission order.
    pub fn run<T, R, I, F>(&self, work_items: I, worker_fn: F) -> Result<Vec<R>>
    where
        T: Send,
        R: Send,
        I: Iterator<Item = T> + Send,
        F: Fn(T) -> R + Send + Sync,
    {
        let (work_tx, work_rx): (Sender<T>, Receiver<T>) =
            bounded(self.workers * BUFFER_PER_WORKER);
        let (result_tx, result_rx): (Sender<R>, Receiver<R>) =
            bounded(self.workers * BUFFER_PER_WORKER);

        let worker_fn = Arc::new(worker_fn);

        crossbeam::thread::scope(|s| {
            for _ in 0..self.workers {
                let work_rx = work_rx.clone();
                let result_tx = result_tx.clone();
                let worker_fn = worker_fn.clone();

                s.spawn(move |_| {
                    while let Ok(item) = work_rx.recv() {
                        if result_tx.send(worker_fn(item)).is_err() {
                            break; // Collector dropped
                        }
                    }
                });
            }

            // Producer: enumerate on a dedicated thread so the collector
            // below can drain results concurrently.
            s.spawn(move |_| {
                for item in work_items {
                    if work_tx.send(item).is_err() {
                        break; // Workers dropped
                    }
                }
            });

            // Drop the remaining sender so collection ends once every
            // worker has exited.
            drop(result_tx);

            result_rx.iter().collect::<Vec<R>>()
        })
        .map_err(|_| anyhow::anyhow!("worker thread panicked during parallel execution"))
    }
}
