//! # Batch Scheduler
//!
//! Runs a per-item operation over an ordered input with bounded concurrency. Items
//! are split into consecutive batches of `batch_size`; each batch runs concurrently
//! and must fully resolve before the next one starts. An optional pause separates
//! consecutive batches.
//!
//! Two failure policies are offered:
//!
//! - [`BatchScheduler::run`] aborts on the first failure and hands it back as
//!   [`BatchError::OperationFailed`]. Results from earlier batches are discarded.
//! - [`BatchScheduler::run_settled`] never aborts; every item yields an [`Outcome`].
//!
//! Both return results in input order regardless of completion order.

use super::barrier::BatchBarrier;
use super::delay::InterBatchDelay;
use super::operation::BatchOperation;
use super::outcome::Outcome;
use super::plan::BatchPlan;
use crate::config::SchedulerConfig;
use crate::error::{BatchError, Result, SchedulerError};
use std::future::Future;
use std::num::NonZeroUsize;
use std::time::Duration;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchScheduler {
    batch_size: NonZeroUsize,
    delay: InterBatchDelay,
}

impl BatchScheduler {
    /// Create a scheduler running `batch_size` invocations per batch, with no pause.
    pub fn new(batch_size: usize) -> Result<Self> {
        let batch_size =
            NonZeroUsize::new(batch_size).ok_or(SchedulerError::InvalidBatchSize { batch_size })?;
        Ok(Self {
            batch_size,
            delay: InterBatchDelay::NONE,
        })
    }

    pub fn from_config(config: &SchedulerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.batch_size)?.with_inter_batch_delay(config.inter_batch_delay()))
    }

    pub fn with_inter_batch_delay(mut self, delay: Duration) -> Self {
        self.delay = InterBatchDelay::new(delay);
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size.get()
    }

    pub fn inter_batch_delay(&self) -> Duration {
        self.delay.duration()
    }

    pub fn plan(&self, total_items: usize) -> BatchPlan {
        BatchPlan::new(total_items, self.batch_size)
    }

    /// Fail-fast run.
    ///
    /// Returns every result in input order, or the first failure observed. No batch
    /// after the failing one is started.
    #[instrument(skip_all, fields(batch_size = self.batch_size.get()))]
    pub async fn run<A, B, E, F, Fut, I>(
        &self,
        mut operation: F,
        items: I,
    ) -> std::result::Result<Vec<B>, BatchError<E>>
    where
        I: IntoIterator<Item = A>,
        F: FnMut(A) -> Fut,
        Fut: Future<Output = std::result::Result<B, E>>,
    {
        let items: Vec<A> = items.into_iter().collect();
        let plan = self.plan(items.len());
        let mut results = Vec::with_capacity(plan.total_items());
        let mut remaining = items.into_iter();

        for range in plan.ranges() {
            debug!(
                batch = range.index,
                batch_count = plan.batch_count(),
                items = range.len(),
                "Starting batch"
            );

            let invocations: Vec<Fut> = remaining
                .by_ref()
                .take(range.len())
                .map(&mut operation)
                .collect();
            let values = BatchBarrier::new(invocations)
                .all_or_first_error()
                .await
                .map_err(|failure| {
                    debug!(
                        batch = range.index,
                        index = range.start + failure.slot,
                        "Batch aborted by operation failure"
                    );
                    BatchError::OperationFailed {
                        index: range.start + failure.slot,
                        batch: range.index,
                        error: failure.error,
                    }
                })?;
            results.extend(values);

            if !range.is_last() {
                self.delay.pause().await;
            }
        }

        debug!(total_items = results.len(), "Batch run completed");
        Ok(results)
    }

    /// Fault-tolerant run. Always yields one [`Outcome`] per input item, in input order.
    #[instrument(skip_all, fields(batch_size = self.batch_size.get()))]
    pub async fn run_settled<A, B, E, F, Fut, I>(
        &self,
        mut operation: F,
        items: I,
    ) -> Vec<Outcome<B, E>>
    where
        I: IntoIterator<Item = A>,
        F: FnMut(A) -> Fut,
        Fut: Future<Output = std::result::Result<B, E>>,
    {
        let items: Vec<A> = items.into_iter().collect();
        let plan = self.plan(items.len());
        let mut outcomes = Vec::with_capacity(plan.total_items());
        let mut remaining = items.into_iter();

        for range in plan.ranges() {
            debug!(
                batch = range.index,
                batch_count = plan.batch_count(),
                items = range.len(),
                "Starting settled batch"
            );

            let invocations: Vec<Fut> = remaining
                .by_ref()
                .take(range.len())
                .map(&mut operation)
                .collect();
            let settled = BatchBarrier::new(invocations).all_settled().await;

            debug!(
                batch = range.index,
                rejected = settled.iter().filter(|o| o.is_rejected()).count(),
                "Settled batch completed"
            );
            outcomes.extend(settled);

            if !range.is_last() {
                self.delay.pause().await;
            }
        }

        outcomes
    }

    /// Fail-fast run driven by a [`BatchOperation`].
    pub async fn run_operation<A, O, I>(
        &self,
        operation: &O,
        items: I,
    ) -> std::result::Result<Vec<O::Output>, BatchError<O::Error>>
    where
        A: Send + 'static,
        O: BatchOperation<A> + ?Sized,
        I: IntoIterator<Item = A>,
    {
        self.run(move |item| <O as BatchOperation<A>>::execute(operation, item), items)
            .await
    }

    /// Fault-tolerant run driven by a [`BatchOperation`].
    pub async fn run_operation_settled<A, O, I>(
        &self,
        operation: &O,
        items: I,
    ) -> Vec<Outcome<O::Output, O::Error>>
    where
        A: Send + 'static,
        O: BatchOperation<A> + ?Sized,
        I: IntoIterator<Item = A>,
    {
        self.run_settled(move |item| <O as BatchOperation<A>>::execute(operation, item), items)
            .await
    }
}

/// Fail-fast batch run with an optional pause of `inter_batch_delay_ms` between batches.
///
/// `batch_size == 0` is rejected with [`BatchError::ContractViolation`] before the
/// operation is invoked.
pub async fn run_in_batches<A, B, E, F, Fut, I>(
    operation: F,
    items: I,
    batch_size: usize,
    inter_batch_delay_ms: u64,
) -> std::result::Result<Vec<B>, BatchError<E>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Fut,
    Fut: Future<Output = std::result::Result<B, E>>,
{
    let scheduler = BatchScheduler::new(batch_size)?
        .with_inter_batch_delay(Duration::from_millis(inter_batch_delay_ms));
    scheduler.run(operation, items).await
}

/// Fault-tolerant batch run. Only an invalid `batch_size` fails the call as a whole.
pub async fn run_settled_in_batches<A, B, E, F, Fut, I>(
    operation: F,
    items: I,
    batch_size: usize,
) -> Result<Vec<Outcome<B, E>>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Fut,
    Fut: Future<Output = std::result::Result<B, E>>,
{
    let scheduler = BatchScheduler::new(batch_size)?;
    Ok(scheduler.run_settled(operation, items).await)
}
