//! Operation shapes accepted by the scheduler.
//!
//! Closures returning a future work directly with
//! [`BatchScheduler::run`](super::BatchScheduler::run). Stateful operations that
//! hold clients or configuration can implement [`BatchOperation`] instead, and
//! synchronous functions are adapted with [`sync_operation`].

use async_trait::async_trait;
use futures::future::{ready, Ready};

/// A per-item asynchronous operation.
///
/// Implementations are invoked concurrently for every item in a batch through a
/// shared reference, so any mutable state they touch needs its own synchronization.
#[async_trait]
pub trait BatchOperation<A>: Send + Sync
where
    A: Send + 'static,
{
    type Output: Send;
    type Error: Send;

    async fn execute(&self, item: A) -> Result<Self::Output, Self::Error>;
}

/// Adapt a synchronous fallible function to the scheduler's operation shape.
///
/// The function runs when the invocation is created, in item order.
pub fn sync_operation<A, B, E, F>(mut f: F) -> impl FnMut(A) -> Ready<Result<B, E>>
where
    F: FnMut(A) -> Result<B, E>,
{
    move |item| ready(f(item))
}
