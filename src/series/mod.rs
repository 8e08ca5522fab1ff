//! Merging rotated fragments of one GC log into a single timeline.

pub mod marker;
pub mod merger;

pub use marker::{start_marker, StartMarker};
pub use merger::{merge_models, merge_series};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation request for a series load
///
/// Cloned handles observe the same flag. Only checked between resources.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_is_shared() {
        let flag = CancelFlag::new();
        let handle = flag.clone();
        assert!(!handle.is_cancelled());

        flag.cancel();
        assert!(handle.is_cancelled());
    }
}
