//! Round and game result types.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::player::Seat;

/// Who won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Verdict {
    /// The given seat won.
    Winner(Seat),
    /// Neither player won.
    Draw,
}

impl Verdict {
    /// Returns the winning seat, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Seat> {
        match self {
            Self::Winner(seat) => Some(seat),
            Self::Draw => None,
        }
    }
}

/// Why the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Termination {
    /// A player's hand ran out at a round boundary.
    Exhaustion,
    /// A player could not supply enough cards for a war.
    Forfeit,
    /// The configured round cap was reached.
    RoundLimit,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhaustion => f.write_str("opponent out of cards"),
            Self::Forfeit => f.write_str("not enough cards for war"),
            Self::RoundLimit => f.write_str("round limit reached"),
        }
    }
}

/// Result of a single resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: u32,
    /// Who took the contested cards. `Draw` only when a forfeit split the pile.
    pub verdict: Verdict,
    /// Number of contested cards, including any forfeited hand.
    pub cards: usize,
    /// Wars fought during the round.
    pub wars: u32,
    /// Whether the round ended the game by forfeit.
    pub forfeit: bool,
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameResult {
    /// Who won.
    pub verdict: Verdict,
    /// Why the game ended.
    pub termination: Termination,
    /// Rounds played.
    pub rounds: u32,
    /// Wars fought across all rounds.
    pub wars: u32,
    /// Longest run of consecutive ties within one round.
    pub longest_war: u32,
    /// Final hand sizes, indexed by seat.
    pub hands: [usize; 2],
}

/// Outcome of a driver that may be interrupted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Progress {
    /// The game reached its terminal state.
    Finished(GameResult),
    /// A cancellation request was honored at a round boundary.
    Interrupted {
        /// Rounds completed so far.
        rounds: u32,
    },
}
