//! Standard 52-card deck.

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::rng::RandomSource;

/// An ordered pile of cards. The top of the deck is the end of the vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a full deck holding every (rank, suit) pair exactly once,
    /// grouped by rank and then by suit.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Reorders the deck using `rng`.
    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
    }

    /// Removes the top card. Returns `None` once the deck is empty.
    pub fn deal_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals the whole deck round-robin into `players` hands.
    ///
    /// Earlier hands receive the extra card when the deck does not split
    /// evenly. With zero players nothing is dealt and the deck is untouched.
    pub fn deal_to_players(&mut self, players: usize) -> Vec<Vec<Card>> {
        if players == 0 {
            return Vec::new();
        }

        let per_hand = self.cards.len().div_ceil(players);
        let mut hands: Vec<Vec<Card>> = (0..players)
            .map(|_| Vec::with_capacity(per_hand))
            .collect();

        'deal: loop {
            for hand in &mut hands {
                let Some(card) = self.deal_one() else {
                    break 'deal;
                };
                hand.push(card);
            }
        }

        hands
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has been fully dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
