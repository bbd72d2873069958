//! # Batch Scheduler Module
//!
//! Bounded-concurrency execution of asynchronous operations in fixed-size batches.
//!
//! ## Components
//!
//! - [`BatchPlan`]: partitions the input into consecutive [`BatchRange`]s
//! - [`BatchBarrier`]: waits on one batch, either fail-fast or settled
//! - [`InterBatchDelay`]: optional pause between batches
//! - [`BatchScheduler`]: drives the batches in sequence
//!
//! ## Usage
//!
//! ```rust,no_run
//! use batch_scheduler::scheduler::BatchScheduler;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scheduler = BatchScheduler::new(2)?.with_inter_batch_delay(Duration::from_millis(50));
//!
//! let doubled = scheduler
//!     .run(|x: u32| async move { Ok::<_, std::io::Error>(x * 2) }, vec![1, 2, 3, 4, 5])
//!     .await?;
//! assert_eq!(doubled, vec![2, 4, 6, 8, 10]);
//!
//! let outcomes = scheduler
//!     .run_settled(
//!         |x: u32| async move { if x % 2 == 0 { Err("even") } else { Ok(x) } },
//!         vec![1, 2, 3],
//!     )
//!     .await;
//! assert!(outcomes[1].is_rejected());
//! # Ok(())
//! # }
//! ```

pub mod barrier;
pub mod delay;
pub mod operation;
pub mod outcome;
pub mod plan;
pub mod runner;

pub use barrier::{BatchBarrier, SlotFailure};
pub use delay::InterBatchDelay;
pub use operation::{sync_operation, BatchOperation};
pub use outcome::{Outcome, OutcomeSummary};
pub use plan::{BatchPlan, BatchRange};
pub use runner::{run_in_batches, run_settled_in_batches, BatchScheduler};
