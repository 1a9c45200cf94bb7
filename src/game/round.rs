use alloc::vec::Vec;
use core::mem;

use crate::card::Card;
use crate::error::InvariantViolation;
use crate::event::{EventSink, Face, GameEvent};
use crate::player::{Player, Seat};
use crate::result::{RoundResult, Termination, Verdict};
use crate::rng::RandomSource;

use super::{Game, GameState};

/// How the contested pile left the table.
enum Settlement {
    /// A higher card took the pile after `wars` consecutive ties.
    Taken { winner: Seat, cards: usize, wars: u32 },
    /// A war could not be completed and the game ends.
    Forfeit { verdict: Verdict, cards: usize, wars: u32 },
}

const fn higher(one: u8, two: u8) -> Option<Seat> {
    if one > two {
        Some(Seat::One)
    } else if two > one {
        Some(Seat::Two)
    } else {
        None
    }
}

impl<S: EventSink, R: RandomSource> Game<S, R> {
    /// Plays one round, including any wars it triggers.
    ///
    /// Returns `Ok(None)` without playing when the game is already over. After
    /// the round is resolved the game moves to [`GameState::GameOver`] if a
    /// hand ran out, a war was forfeited, or the round cap was reached.
    ///
    /// # Errors
    ///
    /// Returns an error if card accounting is broken. The game refuses every
    /// further round after that.
    pub fn play_round(&mut self) -> Result<Option<RoundResult>, InvariantViolation> {
        self.ensure_sound()?;
        if matches!(self.state, GameState::GameOver(_)) {
            return Ok(None);
        }
        if self.is_game_over() {
            let verdict = self.declare_winner();
            self.finish(Termination::Exhaustion, verdict);
            return Ok(None);
        }

        self.rounds += 1;
        let round = self.rounds;
        self.sink.emit(&GameEvent::RoundStarted { round });

        let Some([one, two]) = self.commit_pair(Face::Up) else {
            let verdict = self.declare_winner();
            self.finish(Termination::Exhaustion, verdict);
            return Ok(None);
        };

        let settlement = if let Some(winner) = higher(one.value(), two.value()) {
            let cards = self.award(winner);
            self.sink.emit(&GameEvent::RoundWon {
                round,
                winner,
                cards,
            });
            Settlement::Taken {
                winner,
                cards,
                wars: 0,
            }
        } else {
            self.resolve_war()?
        };

        self.state = GameState::InProgress;
        let hands = self.hand_sizes();
        self.sink.emit(&GameEvent::RoundEnded { round, hands });
        self.enforce_invariant()?;

        let result = match settlement {
            Settlement::Taken {
                winner,
                cards,
                wars,
            } => RoundResult {
                round,
                verdict: Verdict::Winner(winner),
                cards,
                wars,
                forfeit: false,
            },
            Settlement::Forfeit {
                verdict,
                cards,
                wars,
            } => {
                self.finish(Termination::Forfeit, verdict);
                RoundResult {
                    round,
                    verdict,
                    cards,
                    wars,
                    forfeit: true,
                }
            }
        };

        if !matches!(self.state, GameState::GameOver(_)) {
            if self.is_game_over() {
                let verdict = self.declare_winner();
                self.finish(Termination::Exhaustion, verdict);
            } else if self.options.max_rounds.is_some_and(|cap| round >= cap) {
                let verdict = self.declare_winner();
                self.finish(Termination::RoundLimit, verdict);
            }
        }

        Ok(Some(result))
    }

    /// Resolves consecutive ties in a loop, accumulating into the same pile.
    fn resolve_war(&mut self) -> Result<Settlement, InvariantViolation> {
        let required = usize::from(self.options.war_depth.max(1));
        let mut depth = 0;

        loop {
            depth += 1;
            self.wars += 1;
            self.longest_war = self.longest_war.max(depth);
            self.state = GameState::War { depth };
            self.sink.emit(&GameEvent::WarStarted {
                depth,
                pile: self.pile.len(),
            });

            let hands = self.hand_sizes();
            if hands.iter().any(|&held| held < required) {
                self.sink
                    .emit(&GameEvent::InsufficientCards { required, hands });
                return Ok(self.forfeit(depth));
            }

            let mut face_up = None;
            for committed in 1..=required {
                let face = if committed == required {
                    Face::Up
                } else {
                    Face::Down
                };
                face_up = self.commit_pair(face);
            }
            let Some([one, two]) = face_up else {
                return Ok(self.forfeit(depth));
            };

            if let Some(winner) = higher(one.value(), two.value()) {
                let cards = self.award(winner);
                self.sink.emit(&GameEvent::WarWon {
                    depth,
                    winner,
                    cards,
                });
                return Ok(Settlement::Taken {
                    winner,
                    cards,
                    wars: depth,
                });
            }

            self.enforce_invariant()?;
        }
    }

    /// Takes the front card from each player into the pile.
    ///
    /// Returns `None` without moving anything if either hand is empty.
    fn commit_pair(&mut self, face: Face) -> Option<[Card; 2]> {
        if self.players.iter().any(Player::is_empty) {
            return None;
        }

        let one = self.players[0].play_card()?;
        let two = self.players[1].play_card()?;
        for (seat, card) in [(Seat::One, one), (Seat::Two, two)] {
            self.sink.emit(&GameEvent::CardPlayed { seat, card, face });
        }
        self.pile.extend([one, two]);

        Some([one, two])
    }

    /// Moves the whole pile into `winner`'s hand. Returns the cards moved.
    fn award(&mut self, winner: Seat) -> usize {
        let cards = self.pile.len();
        self.players[winner.index()].collect_cards(self.pile.drain(..), &mut self.rng);
        cards
    }

    /// Ends a war that cannot be completed.
    ///
    /// The player holding more cards takes the pile and the other player's
    /// remaining hand. On equal hands the game is a draw: each player keeps
    /// their hand and gets back the pile slots they contributed.
    fn forfeit(&mut self, wars: u32) -> Settlement {
        let verdict = self.declare_winner();
        let cards = match verdict {
            Verdict::Winner(winner) => {
                let loser = &mut self.players[winner.other().index()];
                self.pile.extend(loser.forfeit());
                self.award(winner)
            }
            Verdict::Draw => {
                let pile = mem::take(&mut self.pile);
                let cards = pile.len();
                let (one, two): (Vec<_>, Vec<_>) =
                    pile.into_iter().enumerate().partition(|(slot, _)| slot % 2 == 0);
                self.players[0].collect_cards(one.into_iter().map(|(_, card)| card), &mut self.rng);
                self.players[1].collect_cards(two.into_iter().map(|(_, card)| card), &mut self.rng);
                cards
            }
        };

        Settlement::Forfeit {
            verdict,
            cards,
            wars,
        }
    }
}
