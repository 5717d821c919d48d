use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared teardown flag.
///
/// Set once when the UI loop exits (or is about to). The event thread stops
/// polling and the in-flight fetch drops its result instead of delivering a
/// state update to a screen that no longer exists.
#[derive(Debug, Clone, Default)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal shutdown start.
    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::debug!("shutdown signaled");
        }
    }

    /// Check if shutdown is in progress.
    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }
}
