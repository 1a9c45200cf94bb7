//! Error types.

use thiserror::Error;

use crate::card::Card;

/// Cards were created or lost: the hands and the pile no longer add up to a
/// full deck. This is a bug in card accounting and is never a game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("card count mismatch: found {found} cards, expected {expected}")]
pub struct InvariantViolation {
    /// Cards that should be in play.
    pub expected: usize,
    /// Cards actually found across both hands and the pile.
    pub found: usize,
}

/// Errors that can occur when building a game from prepared hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The hands do not hold exactly one deck's worth of cards.
    #[error("hands hold {0} cards, expected a full deck")]
    WrongCardCount(usize),
    /// The same card appears more than once.
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
}
