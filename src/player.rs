//! Players and their hands.

use alloc::collections::VecDeque;
use alloc::string::String;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::rng::RandomSource;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Seat {
    /// The first player.
    One,
    /// The second player.
    Two,
}

impl Seat {
    /// Both seats in play order.
    pub const BOTH: [Self; 2] = [Self::One, Self::Two];

    /// Returns the opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Index of the seat (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => f.write_str("seat 1"),
            Self::Two => f.write_str("seat 2"),
        }
    }
}

/// A player: a name and a private queue of cards.
///
/// Cards are always played from the front, but the whole hand is reshuffled
/// every time cards are collected, so the draw order stays unpredictable.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: VecDeque<Card>,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: VecDeque::new(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Removes and returns the front card, or `None` when the hand is empty.
    pub fn play_card(&mut self) -> Option<Card> {
        self.hand.pop_front()
    }

    /// Adds a single card to the hand, then reshuffles the hand.
    pub fn collect_card<R: RandomSource + ?Sized>(&mut self, card: Card, rng: &mut R) {
        self.hand.push_back(card);
        self.reshuffle(rng);
    }

    /// Adds every card in `cards` to the hand, then reshuffles the hand.
    pub fn collect_cards<I, R>(&mut self, cards: I, rng: &mut R)
    where
        I: IntoIterator<Item = Card>,
        R: RandomSource + ?Sized,
    {
        self.hand.extend(cards);
        self.reshuffle(rng);
    }

    /// Hands over every remaining card, front first.
    pub(crate) fn forfeit(&mut self) -> impl Iterator<Item = Card> {
        self.hand.drain(..)
    }

    fn reshuffle<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        rng.shuffle(self.hand.make_contiguous());
    }

    /// Iterates over the hand, front first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.hand.iter()
    }

    /// Returns the number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }
}
