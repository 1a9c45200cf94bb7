//! Cooperative cancellation between rounds.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

/// A shareable stop flag checked by [`Game::play_until`](crate::Game::play_until)
/// before each round.
///
/// Clones share the same flag, so one clone can be handed to another thread
/// or a signal handler while the game holds the other.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that the game stop at the next round boundary.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Returns whether cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
