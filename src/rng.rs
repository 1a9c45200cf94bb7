//! Randomness capability consumed by the engine.
//!
//! The engine never reaches for a global generator. Every shuffle goes through
//! a [`RandomSource`] handed to it explicitly, so a seeded source replays the
//! same game exactly.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Default seedable generator used by [`Game::new`](crate::Game::new).
pub type SeededRng = ChaCha8Rng;

/// Something that can put a slice into a uniformly random order.
pub trait RandomSource {
    /// Permutes `slice` in place.
    fn shuffle<T>(&mut self, slice: &mut [T]);
}

impl<R: rand::Rng + ?Sized> RandomSource for R {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        SliceRandom::shuffle(slice, self);
    }
}

/// Leaves every slice in its current order.
///
/// Useful for scripted games where hands must be played in a known order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unshuffled;

impl RandomSource for Unshuffled {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}
