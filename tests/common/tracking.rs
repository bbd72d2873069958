use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Records invocation order and peak concurrency of an operation under test.
#[derive(Debug, Clone, Default)]
pub struct InvocationTracker {
    in_flight: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
    started: Arc<Mutex<Vec<u32>>>,
    completed: Arc<Mutex<Vec<u32>>>,
}

impl InvocationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self, item: u32) {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        self.started.lock().unwrap().push(item);
    }

    pub fn finish(&self, item: u32) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.completed.lock().unwrap().push(item);
    }

    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn started(&self) -> Vec<u32> {
        self.started.lock().unwrap().clone()
    }

    pub fn completed(&self) -> Vec<u32> {
        self.completed.lock().unwrap().clone()
    }
}

/// Yield to the runtime `times` times, which shuffles completion order inside a batch.
pub async fn yield_times(times: u32) {
    for _ in 0..times {
        tokio::task::yield_now().await;
    }
}
