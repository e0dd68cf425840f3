//! Teardown token for async continuations.
//!
//! A fetch spawned from a component may resolve after the component is gone
//! (typically because a navigation already started). Continuations check
//! `is_alive()` before touching view-state or issuing navigation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Mark the owner as torn down. Idempotent.
    pub fn retire(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_retirement() {
        let owner = Liveness::new();
        let continuation = owner.clone();
        assert!(continuation.is_alive());
        owner.retire();
        assert!(!continuation.is_alive());
    }
}
