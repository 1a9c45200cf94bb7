use crate::cancel::CancelToken;
use crate::error::InvariantViolation;
use crate::event::EventSink;
use crate::result::{GameResult, Progress};
use crate::rng::RandomSource;

use super::Game;

impl<S: EventSink, R: RandomSource> Game<S, R> {
    /// Plays rounds until the game is over.
    ///
    /// # Errors
    ///
    /// Returns an error if card accounting breaks at any point.
    pub fn play(&mut self) -> Result<GameResult, InvariantViolation> {
        loop {
            self.ensure_sound()?;
            if let Some(result) = self.result() {
                return Ok(result);
            }
            self.play_round()?;
        }
    }

    /// Plays rounds until the game is over or `cancel` is triggered.
    ///
    /// The token is only checked between rounds, so a war in progress always
    /// completes and the card count is whole whenever this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if card accounting breaks at any point.
    pub fn play_until(&mut self, cancel: &CancelToken) -> Result<Progress, InvariantViolation> {
        loop {
            self.ensure_sound()?;
            if let Some(result) = self.result() {
                return Ok(Progress::Finished(result));
            }
            if cancel.is_cancelled() {
                return Ok(Progress::Interrupted {
                    rounds: self.rounds,
                });
            }
            self.play_round()?;
        }
    }
}
