//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;

use crate::card::{Card, DECK_SIZE};
use crate::deck::Deck;
use crate::error::{InvariantViolation, SetupError};
use crate::event::{EventSink, GameEvent, NullSink};
use crate::options::GameOptions;
use crate::player::{Player, Seat};
use crate::result::{GameResult, Termination, Verdict};
use crate::rng::{RandomSource, SeededRng};

mod round;
mod run;
pub mod state;

pub use state::GameState;

/// A two-player game of War.
///
/// The game owns both players, the contested pile, the random source used for
/// every shuffle, and the sink that receives [`GameEvent`]s. Use
/// [`GameOptions`] to configure the war depth, an optional round cap, and the
/// player names.
pub struct Game<S: EventSink = NullSink, R: RandomSource = SeededRng> {
    /// Game options, fixed for the whole game.
    options: GameOptions,
    /// Both players, indexed by seat.
    players: [Player; 2],
    /// Cards contested in the round being resolved. Slots alternate seat one,
    /// seat two.
    pile: Vec<Card>,
    /// Current game state.
    state: GameState,
    /// Why the game ended, once it has.
    termination: Option<Termination>,
    /// Rounds started so far.
    rounds: u32,
    /// Wars fought so far.
    wars: u32,
    /// Longest consecutive tie streak seen in a single round.
    longest_war: u32,
    /// Set once card accounting has failed; the game refuses to continue.
    violation: Option<InvariantViolation>,
    /// Random number generator.
    rng: R,
    /// Event receiver.
    sink: S,
}

impl Game {
    /// Creates a new game with the given seed, dealing a freshly shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use warsim::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.hand_sizes(), [26, 26]);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_sink(options, seed, NullSink)
    }
}

impl<S: EventSink> Game<S, SeededRng> {
    /// Creates a new seeded game that reports to `sink`.
    #[must_use]
    pub fn with_sink(options: GameOptions, seed: u64, sink: S) -> Self {
        Self::with_rng(options, SeededRng::seed_from_u64(seed), sink)
    }
}

impl<S: EventSink, R: RandomSource> Game<S, R> {
    /// Creates a new game driven by an arbitrary random source.
    ///
    /// The deck is shuffled, dealt round-robin into two hands of 26, and each
    /// player collects (and reshuffles) their hand.
    pub fn with_rng(options: GameOptions, mut rng: R, sink: S) -> Self {
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        let mut hands = deck.deal_to_players(Seat::BOTH.len()).into_iter();
        let one = hands.next().unwrap_or_default();
        let two = hands.next().unwrap_or_default();
        Self::start(options, [one, two], rng, sink)
    }

    /// Creates a game from prepared hands.
    ///
    /// The hands must together hold every card of one deck exactly once. Each
    /// player collects their hand through the random source, so pass
    /// [`Unshuffled`](crate::rng::Unshuffled) to keep the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if the hands hold the wrong number of cards or repeat
    /// a card.
    pub fn from_hands(
        options: GameOptions,
        hands: [Vec<Card>; 2],
        rng: R,
        sink: S,
    ) -> Result<Self, SetupError> {
        let total = hands.iter().map(Vec::len).sum::<usize>();
        if total != DECK_SIZE {
            return Err(SetupError::WrongCardCount(total));
        }

        let mut seen = [false; DECK_SIZE];
        for card in hands.iter().flatten() {
            let slot = &mut seen[card.slot()];
            if *slot {
                return Err(SetupError::DuplicateCard(*card));
            }
            *slot = true;
        }

        Ok(Self::start(options, hands, rng, sink))
    }

    fn start(options: GameOptions, hands: [Vec<Card>; 2], mut rng: R, sink: S) -> Self {
        let [one, two] = hands;
        let [name_one, name_two] = options.player_names.clone();
        let mut players = [Player::new(name_one), Player::new(name_two)];
        players[0].collect_cards(one, &mut rng);
        players[1].collect_cards(two, &mut rng);

        let mut game = Self {
            options,
            players,
            pile: Vec::with_capacity(DECK_SIZE),
            state: GameState::InProgress,
            termination: None,
            rounds: 0,
            wars: 0,
            longest_war: 0,
            violation: None,
            rng,
            sink,
        };

        if game.players.iter().any(Player::is_empty) {
            let verdict = game.declare_winner();
            game.finish(Termination::Exhaustion, verdict);
        }

        game
    }

    /// Returns the options this game was created with.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of rounds started so far.
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Returns the player in `seat`.
    pub const fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Returns both players, indexed by seat.
    pub const fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns both hand sizes, indexed by seat.
    pub fn hand_sizes(&self) -> [usize; 2] {
        [self.players[0].len(), self.players[1].len()]
    }

    /// Returns the contested pile. Empty between rounds.
    pub fn pile(&self) -> &[Card] {
        &self.pile
    }

    /// Returns the event sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the event sink mutably.
    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the game and returns its event sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Returns whether the game has ended.
    ///
    /// This is the case once a hand is empty at a round boundary, and also
    /// after a forfeit or when the round cap is reached.
    pub fn is_game_over(&self) -> bool {
        matches!(self.state, GameState::GameOver(_))
            || self.players.iter().any(Player::is_empty)
    }

    /// Returns the player holding more cards, or a draw on equal hands.
    pub fn declare_winner(&self) -> Verdict {
        let [one, two] = self.hand_sizes();
        match one.cmp(&two) {
            core::cmp::Ordering::Greater => Verdict::Winner(Seat::One),
            core::cmp::Ordering::Less => Verdict::Winner(Seat::Two),
            core::cmp::Ordering::Equal => Verdict::Draw,
        }
    }

    /// Returns the final result once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        let GameState::GameOver(verdict) = self.state else {
            return None;
        };
        let termination = self.termination?;

        Some(GameResult {
            verdict,
            termination,
            rounds: self.rounds,
            wars: self.wars,
            longest_war: self.longest_war,
            hands: self.hand_sizes(),
        })
    }

    /// Checks that both hands and the pile together hold a full deck.
    ///
    /// # Errors
    ///
    /// Returns an error if cards were lost or duplicated.
    pub fn validate_invariant(&self) -> Result<(), InvariantViolation> {
        let found = self.players.iter().map(Player::len).sum::<usize>() + self.pile.len();
        if found == DECK_SIZE {
            Ok(())
        } else {
            Err(InvariantViolation {
                expected: DECK_SIZE,
                found,
            })
        }
    }

    /// Validates card accounting and poisons the game on failure.
    fn enforce_invariant(&mut self) -> Result<(), InvariantViolation> {
        self.ensure_sound()?;
        self.validate_invariant().inspect_err(|violation| {
            self.violation = Some(*violation);
        })
    }

    fn ensure_sound(&self) -> Result<(), InvariantViolation> {
        self.violation.map_or(Ok(()), Err)
    }

    fn finish(&mut self, termination: Termination, verdict: Verdict) {
        self.state = GameState::GameOver(verdict);
        self.termination = Some(termination);
        self.sink.emit(&GameEvent::GameOver {
            verdict,
            termination,
            hands: self.hand_sizes(),
        });
    }
}
