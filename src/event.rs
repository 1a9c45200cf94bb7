//! Events emitted while a game is played.
//!
//! The engine has no presentation of its own. It reports what happens through
//! an [`EventSink`], and the caller decides whether to print, record, or drop
//! the stream.

use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::player::Seat;
use crate::result::{Termination, Verdict};

/// How a card was committed to the pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Face {
    /// Compared against the opponent's card.
    Up,
    /// Added to the pile unseen during a war.
    Down,
}

/// A discrete step of the simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameEvent {
    /// A new round begins.
    RoundStarted {
        /// Round number, starting at 1.
        round: u32,
    },
    /// A player committed a card.
    CardPlayed {
        /// Who played it.
        seat: Seat,
        /// The card.
        card: Card,
        /// Whether it is compared or hidden.
        face: Face,
    },
    /// The opening comparison of a round was decided.
    RoundWon {
        /// Round number.
        round: u32,
        /// Player with the higher card.
        winner: Seat,
        /// Cards collected by the winner.
        cards: usize,
    },
    /// Equal values were played and a war begins.
    WarStarted {
        /// Consecutive tie count, starting at 1.
        depth: u32,
        /// Cards already in the pile.
        pile: usize,
    },
    /// A war was decided by a higher face-up card.
    WarWon {
        /// Depth of the deciding war.
        depth: u32,
        /// Player with the higher face-up card.
        winner: Seat,
        /// Cards collected by the winner.
        cards: usize,
    },
    /// A player could not commit enough cards for a war.
    InsufficientCards {
        /// Cards each player required.
        required: usize,
        /// Hand sizes, indexed by seat.
        hands: [usize; 2],
    },
    /// A round (including any wars) is fully resolved.
    RoundEnded {
        /// Round number.
        round: u32,
        /// Hand sizes, indexed by seat.
        hands: [usize; 2],
    },
    /// The game reached its terminal state.
    GameOver {
        /// Who won, if anyone.
        verdict: Verdict,
        /// Why the game ended.
        termination: Termination,
        /// Final hand sizes, indexed by seat.
        hands: [usize; 2],
    },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundStarted { round } => write!(f, "--- Round {round} ---"),
            Self::CardPlayed {
                seat,
                card,
                face: Face::Up,
            } => write!(f, "{seat} plays {card}"),
            Self::CardPlayed {
                seat,
                face: Face::Down,
                ..
            } => write!(f, "{seat} places a card face down"),
            Self::RoundWon {
                winner, cards, ..
            } => write!(f, "{winner} wins the round and collects {cards} cards"),
            Self::WarStarted { depth: 1, .. } => f.write_str("It's a tie! This means war!"),
            Self::WarStarted { depth, .. } => {
                write!(f, "It's another tie! The war continues (depth {depth})")
            }
            Self::WarWon {
                winner, cards, ..
            } => write!(f, "{winner} wins the war and collects {cards} cards"),
            Self::InsufficientCards { required, hands } => write!(
                f,
                "Not enough cards for war ({required} needed, hands {} and {})",
                hands[0], hands[1]
            ),
            Self::RoundEnded { hands, .. } => {
                write!(f, "seat 1 has {} cards, seat 2 has {} cards", hands[0], hands[1])
            }
            Self::GameOver {
                verdict: Verdict::Winner(seat),
                hands,
                termination,
            } => write!(
                f,
                "{seat} wins the game with {} cards ({termination})",
                hands[seat.index()]
            ),
            Self::GameOver {
                verdict: Verdict::Draw,
                termination,
                ..
            } => write!(f, "The game is a draw ({termination})"),
        }
    }
}

/// Receives events as the engine emits them.
pub trait EventSink {
    /// Called once per event, in order.
    fn emit(&mut self, event: &GameEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &GameEvent) {}
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: &GameEvent) {
        (**self).emit(event);
    }
}

/// An event with its position in the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoggedEvent {
    /// Zero-based sequence number.
    pub index: u32,
    /// The event.
    pub event: GameEvent,
}

/// Records the full event stream of a game with sequence numbers.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: Vec<LoggedEvent>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns all recorded entries.
    #[must_use]
    pub fn entries(&self) -> &[LoggedEvent] {
        &self.entries
    }

    /// Iterates over the recorded events without their indices.
    pub fn events(&self) -> impl Iterator<Item = &GameEvent> {
        self.entries.iter().map(|entry| &entry.event)
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: &GameEvent) {
        let index = self.entries.len() as u32;
        self.entries.push(LoggedEvent {
            index,
            event: event.clone(),
        });
    }
}

impl fmt::Display for EventLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "[{:>5}] {}", entry.index, entry.event)?;
        }
        Ok(())
    }
}
