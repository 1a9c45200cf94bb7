//! Game state types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::result::Verdict;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    /// Between rounds, with both players still holding cards.
    InProgress,
    /// A war is being resolved. `depth` counts consecutive ties.
    War {
        /// Consecutive tie count, starting at 1.
        depth: u32,
    },
    /// Terminal state.
    GameOver(Verdict),
}
