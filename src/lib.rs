#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Batch Scheduler
//!
//! Runs large collections of asynchronous tasks with bounded concurrency, one
//! fixed-size batch at a time.
//!
//! ## Overview
//!
//! Items are split into consecutive batches of `batch_size`. Every operation in a
//! batch runs concurrently; the next batch starts only once the current one has
//! fully resolved, optionally after a configurable pause. Results always come back
//! in input order.
//!
//! Two failure policies are available:
//!
//! - **Fail-fast** ([`BatchScheduler::run`], [`run_in_batches`]): the first failure
//!   aborts the run and is returned to the caller.
//! - **Settled** ([`BatchScheduler::run_settled`], [`run_settled_in_batches`]): every
//!   item produces an [`Outcome`], and the run never aborts.
//!
//! Concurrency is cooperative: batch futures are polled from the calling task and
//! nothing is spawned. CPU-bound operations should move their own work onto a
//! blocking pool.
//!
//! ## Module Organization
//!
//! - [`scheduler`] - Batch planning, barriers, delays and the scheduler itself
//! - [`config`] - Layered scheduler configuration
//! - [`error`] - Structured error handling
//! - [`logging`] - Tracing subscriber setup
//! - [`helpers`] - Pure templating and numeric helpers for operation authors
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use batch_scheduler::run_in_batches;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let results = run_in_batches(
//!     |x: u32| async move { Ok::<_, std::io::Error>(x * 2) },
//!     vec![1, 2, 3, 4, 5],
//!     2,
//!     0,
//! )
//! .await?;
//! assert_eq!(results, vec![2, 4, 6, 8, 10]);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod helpers;
pub mod logging;
pub mod scheduler;

pub use config::{ConfigManager, SchedulerConfig};
pub use error::{BatchError, Result, SchedulerError};
pub use scheduler::{
    run_in_batches, run_settled_in_batches, sync_operation, BatchOperation, BatchPlan,
    BatchScheduler, InterBatchDelay, Outcome, OutcomeSummary,
};
