//! Wait-group over the invocations of a single batch.
//!
//! All futures are polled from the caller's task through a `FuturesUnordered`, so
//! concurrency is cooperative and bounded by the number of futures handed in.
//! Results are written back into per-slot storage, which keeps them in input order
//! no matter which invocation finishes first.

use super::outcome::Outcome;
use futures::stream::{FuturesUnordered, StreamExt};
use std::future::Future;

/// First failure observed by [`BatchBarrier::all_or_first_error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotFailure<E> {
    /// Position of the failed invocation within the batch
    pub slot: usize,
    pub error: E,
}

#[derive(Debug)]
pub struct BatchBarrier<Fut> {
    invocations: Vec<Fut>,
}

impl<Fut> BatchBarrier<Fut> {
    pub fn new(invocations: Vec<Fut>) -> Self {
        Self { invocations }
    }

    pub fn len(&self) -> usize {
        self.invocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invocations.is_empty()
    }
}

impl<Fut, B, E> BatchBarrier<Fut>
where
    Fut: Future<Output = Result<B, E>>,
{
    /// Wait until every invocation succeeds, or return the first failure to complete.
    ///
    /// Invocations still pending when a failure arrives are dropped with the barrier.
    pub async fn all_or_first_error(self) -> Result<Vec<B>, SlotFailure<E>> {
        let mut slots: Vec<Option<B>> = Vec::with_capacity(self.invocations.len());
        slots.resize_with(self.invocations.len(), || None);

        let mut pending = index_invocations(self.invocations);
        while let Some((slot, result)) = pending.next().await {
            match result {
                Ok(value) => slots[slot] = Some(value),
                Err(error) => return Err(SlotFailure { slot, error }),
            }
        }

        Ok(slots.into_iter().flatten().collect())
    }

    /// Wait until every invocation reaches a terminal state.
    pub async fn all_settled(self) -> Vec<Outcome<B, E>> {
        let mut slots: Vec<Option<Outcome<B, E>>> = Vec::with_capacity(self.invocations.len());
        slots.resize_with(self.invocations.len(), || None);

        let mut pending = index_invocations(self.invocations);
        while let Some((slot, result)) = pending.next().await {
            slots[slot] = Some(Outcome::from(result));
        }

        slots.into_iter().flatten().collect()
    }
}

fn index_invocations<Fut>(
    invocations: Vec<Fut>,
) -> FuturesUnordered<impl Future<Output = (usize, Fut::Output)>>
where
    Fut: Future,
{
    invocations
        .into_iter()
        .enumerate()
        .map(|(slot, invocation)| async move { (slot, invocation.await) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;
    use std::time::Duration;
    use tokio::time::sleep;

    async fn delayed(value: u64, millis: u64) -> Result<u64, String> {
        sleep(Duration::from_millis(millis)).await;
        Ok(value)
    }

    async fn failing(reason: &str, millis: u64) -> Result<u64, String> {
        sleep(Duration::from_millis(millis)).await;
        Err(reason.to_string())
    }

    #[tokio::test(start_paused = true)]
    async fn test_results_follow_slot_order_not_completion_order() {
        let barrier = BatchBarrier::new(vec![
            delayed(1, 30).boxed(),
            delayed(2, 10).boxed(),
            delayed(3, 20).boxed(),
        ]);
        assert_eq!(barrier.len(), 3);
        assert_eq!(barrier.all_or_first_error().await.unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_failure_wins() {
        let barrier = BatchBarrier::new(vec![
            delayed(1, 50).boxed(),
            failing("slow", 40).boxed(),
            failing("fast", 5).boxed(),
        ]);
        let failure = barrier.all_or_first_error().await.unwrap_err();
        assert_eq!(
            failure,
            SlotFailure {
                slot: 2,
                error: "fast".to_string()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_all_settled_keeps_every_outcome() {
        let barrier = BatchBarrier::new(vec![
            failing("a", 30).boxed(),
            delayed(2, 10).boxed(),
            failing("c", 1).boxed(),
        ]);
        let outcomes = barrier.all_settled().await;
        assert_eq!(
            outcomes,
            vec![
                Outcome::rejected("a".to_string()),
                Outcome::fulfilled(2),
                Outcome::rejected("c".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_barrier() {
        let barrier: BatchBarrier<futures::future::Ready<Result<u8, ()>>> =
            BatchBarrier::new(Vec::new());
        assert!(barrier.is_empty());
        assert_eq!(barrier.all_or_first_error().await, Ok(Vec::new()));
    }
}
