//! A simulation engine for the two-player card game War, with optional
//! `no_std` support.
//!
//! The crate provides a [`Game`] type that deals a shuffled deck into two
//! hands, plays rounds, resolves ties through wars, and detects the end of the
//! game. All randomness comes from an explicitly passed [`RandomSource`], and
//! everything that happens is reported as a [`GameEvent`] to an
//! [`EventSink`], so a seeded game replays identically.
//!
//! # Example
//!
//! ```
//! use warsim::{EventLog, Game, GameOptions};
//!
//! let mut game = Game::with_sink(GameOptions::default(), 42, EventLog::new());
//! let result = game.play().expect("card count stays whole");
//! assert_eq!(result.hands.iter().sum::<usize>(), 52);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod cancel;
pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
pub mod rng;

// Re-export main types
pub use cancel::CancelToken;
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{InvariantViolation, SetupError};
pub use event::{EventLog, EventSink, Face, GameEvent, LoggedEvent, NullSink};
pub use game::{Game, GameState};
pub use options::GameOptions;
pub use player::{Player, Seat};
pub use result::{GameResult, Progress, RoundResult, Termination, Verdict};
pub use rng::{RandomSource, SeededRng, Unshuffled};
