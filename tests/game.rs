//! Game integration tests.

use warsim::{
    CancelToken, Card, DECK_SIZE, Deck, EventLog, EventSink, Face, Game, GameEvent, GameOptions,
    GameState, InvariantViolation, Progress, Rank, Seat, SetupError, Suit, Termination,
    Unshuffled, Verdict,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Builds two hands that start with the given cards and are topped up from
/// the rest of the deck until seat one holds `one_len` cards.
fn scripted_sized(one: &[Card], two: &[Card], one_len: usize) -> [Vec<Card>; 2] {
    let mut hands = [one.to_vec(), two.to_vec()];
    let deck = Deck::new();
    let rest = deck
        .cards()
        .iter()
        .copied()
        .filter(|card| !one.contains(card) && !two.contains(card));
    for card in rest {
        if hands[0].len() < one_len {
            hands[0].push(card);
        } else {
            hands[1].push(card);
        }
    }
    hands
}

fn scripted(one: &[Card], two: &[Card]) -> [Vec<Card>; 2] {
    scripted_sized(one, two, DECK_SIZE / 2)
}

fn scripted_game(options: GameOptions, hands: [Vec<Card>; 2]) -> Game<Vec<GameEvent>, Unshuffled> {
    Game::from_hands(options, hands, Unshuffled, Vec::new()).unwrap()
}

#[test]
fn new_game_deals_two_full_hands() {
    let game = Game::new(GameOptions::default(), 42);

    assert_eq!(game.hand_sizes(), [26, 26]);
    assert!(game.pile().is_empty());
    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!(game.rounds(), 0);
    assert!(!game.is_game_over());
    assert_eq!(game.player(Seat::One).name(), "Player 1");
    assert_eq!(game.player(Seat::Two).name(), "Player 2");
    assert_eq!(game.validate_invariant(), Ok(()));

    let mut seen: Vec<Card> = game
        .players()
        .iter()
        .flat_map(|player| player.cards().copied())
        .collect();
    seen.sort_by_key(|card| (card.value(), card.suit() as u8));
    seen.dedup();
    assert_eq!(seen.len(), DECK_SIZE);
}

#[test]
fn higher_card_takes_both_cards() {
    let ace = card(Rank::Ace, Suit::Spades);
    let king = card(Rank::King, Suit::Hearts);
    let mut game = scripted_game(GameOptions::default(), scripted(&[ace], &[king]));

    let result = game.play_round().unwrap().unwrap();
    assert_eq!(result.round, 1);
    assert_eq!(result.verdict, Verdict::Winner(Seat::One));
    assert_eq!(result.cards, 2);
    assert_eq!(result.wars, 0);
    assert!(!result.forfeit);

    assert_eq!(game.hand_sizes(), [27, 25]);
    assert!(game.pile().is_empty());
    let tail: Vec<Card> = game.player(Seat::One).cards().copied().skip(25).collect();
    assert_eq!(tail, vec![ace, king]);

    assert_eq!(
        game.sink().as_slice(),
        &[
            GameEvent::RoundStarted { round: 1 },
            GameEvent::CardPlayed {
                seat: Seat::One,
                card: ace,
                face: Face::Up,
            },
            GameEvent::CardPlayed {
                seat: Seat::Two,
                card: king,
                face: Face::Up,
            },
            GameEvent::RoundWon {
                round: 1,
                winner: Seat::One,
                cards: 2,
            },
            GameEvent::RoundEnded {
                round: 1,
                hands: [27, 25],
            },
        ]
    );
}

#[test]
fn lower_card_loses_to_second_seat() {
    let two = card(Rank::Two, Suit::Clubs);
    let three = card(Rank::Three, Suit::Clubs);
    let mut game = scripted_game(GameOptions::default(), scripted(&[two], &[three]));

    let result = game.play_round().unwrap().unwrap();
    assert_eq!(result.verdict, Verdict::Winner(Seat::Two));
    assert_eq!(game.hand_sizes(), [25, 27]);
}

#[test]
fn equal_values_start_a_war() {
    let one = [
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
        card(Rank::King, Suit::Clubs),
    ];
    let two = [
        card(Rank::Seven, Suit::Spades),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Queen, Suit::Diamonds),
    ];
    let mut game = scripted_game(GameOptions::default(), scripted(&one, &two));

    let result = game.play_round().unwrap().unwrap();
    assert_eq!(result.verdict, Verdict::Winner(Seat::One));
    assert_eq!(result.cards, 6);
    assert_eq!(result.wars, 1);
    assert_eq!(game.hand_sizes(), [29, 23]);
    assert_eq!(game.state(), GameState::InProgress);

    assert_eq!(
        &game.sink()[3..],
        &[
            GameEvent::WarStarted { depth: 1, pile: 2 },
            GameEvent::CardPlayed {
                seat: Seat::One,
                card: one[1],
                face: Face::Down,
            },
            GameEvent::CardPlayed {
                seat: Seat::Two,
                card: two[1],
                face: Face::Down,
            },
            GameEvent::CardPlayed {
                seat: Seat::One,
                card: one[2],
                face: Face::Up,
            },
            GameEvent::CardPlayed {
                seat: Seat::Two,
                card: two[2],
                face: Face::Up,
            },
            GameEvent::WarWon {
                depth: 1,
                winner: Seat::One,
                cards: 6,
            },
            GameEvent::RoundEnded {
                round: 1,
                hands: [29, 23],
            },
        ]
    );
}

#[test]
fn consecutive_ties_accumulate_into_one_pile() {
    let one = [
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
        card(Rank::King, Suit::Clubs),
        card(Rank::Three, Suit::Diamonds),
        card(Rank::Queen, Suit::Spades),
    ];
    let two = [
        card(Rank::Seven, Suit::Spades),
        card(Rank::Two, Suit::Diamonds),
        card(Rank::King, Suit::Diamonds),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Ace, Suit::Hearts),
    ];
    let mut game = scripted_game(GameOptions::default(), scripted(&one, &two));

    let result = game.play_round().unwrap().unwrap();
    assert_eq!(result.verdict, Verdict::Winner(Seat::Two));
    assert_eq!(result.cards, 10);
    assert_eq!(result.wars, 2);
    assert_eq!(game.hand_sizes(), [21, 31]);

    let wars: Vec<&GameEvent> = game
        .sink()
        .iter()
        .filter(|event| matches!(event, GameEvent::WarStarted { .. }))
        .collect();
    assert_eq!(
        wars,
        vec![
            &GameEvent::WarStarted { depth: 1, pile: 2 },
            &GameEvent::WarStarted { depth: 2, pile: 6 },
        ]
    );
}

#[test]
fn war_depth_controls_cards_committed() {
    let one = [
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Four, Suit::Clubs),
        card(Rank::Ace, Suit::Clubs),
    ];
    let two = [
        card(Rank::Nine, Suit::Spades),
        card(Rank::Two, Suit::Diamonds),
        card(Rank::Three, Suit::Diamonds),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Five, Suit::Diamonds),
    ];
    let options = GameOptions::default().with_war_depth(4);
    let mut game = scripted_game(options, scripted(&one, &two));

    let result = game.play_round().unwrap().unwrap();
    assert_eq!(result.verdict, Verdict::Winner(Seat::One));
    assert_eq!(result.cards, 10);
    assert_eq!(game.hand_sizes(), [31, 21]);

    let face_down = game
        .sink()
        .iter()
        .filter(|event| {
            matches!(
                event,
                GameEvent::CardPlayed {
                    face: Face::Down,
                    ..
                }
            )
        })
        .count();
    assert_eq!(face_down, 6);
}

#[test]
fn short_hand_forfeits_the_war() {
    let one = [
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Five, Suit::Clubs),
    ];
    let two = [card(Rank::Seven, Suit::Spades)];
    let mut game = scripted_game(GameOptions::default(), scripted_sized(&one, &two, 2));

    let result = game.play_round().unwrap().unwrap();
    assert!(result.forfeit);
    assert_eq!(result.verdict, Verdict::Winner(Seat::Two));
    assert_eq!(result.cards, 3);
    assert_eq!(result.wars, 1);

    assert_eq!(game.hand_sizes(), [0, 52]);
    assert!(game.pile().is_empty());
    assert!(game.is_game_over());
    assert_eq!(game.state(), GameState::GameOver(Verdict::Winner(Seat::Two)));

    let outcome = game.result().unwrap();
    assert_eq!(outcome.termination, Termination::Forfeit);
    assert_eq!(outcome.rounds, 1);
    assert_eq!(outcome.wars, 1);
    assert_eq!(outcome.longest_war, 1);

    let events = game.sink();
    assert!(events.contains(&GameEvent::InsufficientCards {
        required: 2,
        hands: [1, 49],
    }));
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            verdict: Verdict::Winner(Seat::Two),
            termination: Termination::Forfeit,
            hands: [0, 52],
        })
    );
}

#[test]
fn empty_hand_after_tie_forfeits() {
    let one = [card(Rank::Seven, Suit::Hearts)];
    let two = [card(Rank::Seven, Suit::Spades)];
    let mut game = scripted_game(GameOptions::default(), scripted_sized(&one, &two, 1));

    let result = game.play_round().unwrap().unwrap();
    assert!(result.forfeit);
    assert_eq!(result.verdict, Verdict::Winner(Seat::Two));
    assert_eq!(result.cards, 2);
    assert_eq!(game.hand_sizes(), [0, 52]);
}

#[test]
fn both_short_with_equal_hands_is_a_draw() {
    let one = [card(Rank::Seven, Suit::Hearts)];
    let two = [card(Rank::Seven, Suit::Spades)];
    let options = GameOptions::default().with_war_depth(30);
    let mut game = scripted_game(options, scripted(&one, &two));

    let result = game.play_round().unwrap().unwrap();
    assert!(result.forfeit);
    assert_eq!(result.verdict, Verdict::Draw);
    assert_eq!(game.hand_sizes(), [26, 26]);
    assert!(game.player(Seat::One).cards().any(|&c| c == one[0]));
    assert!(game.player(Seat::Two).cards().any(|&c| c == two[0]));

    let outcome = game.result().unwrap();
    assert_eq!(outcome.verdict, Verdict::Draw);
    assert_eq!(outcome.termination, Termination::Forfeit);
}

#[test]
fn both_short_with_unequal_hands_goes_to_the_larger() {
    let one = [card(Rank::Seven, Suit::Hearts)];
    let two = [card(Rank::Seven, Suit::Spades)];
    let options = GameOptions::default().with_war_depth(30);
    let mut game = scripted_game(options, scripted_sized(&one, &two, 27));

    let result = game.play_round().unwrap().unwrap();
    assert_eq!(result.verdict, Verdict::Winner(Seat::One));
    assert_eq!(result.cards, 26);
    assert_eq!(game.hand_sizes(), [52, 0]);
}

#[test]
fn both_hands_empty_mid_war_is_a_draw() {
    let suited = |first: Suit, second: Suit| -> Vec<Card> {
        [first, second]
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| card(rank, suit)))
            .collect()
    };
    let one = suited(Suit::Hearts, Suit::Clubs);
    let two = suited(Suit::Diamonds, Suit::Spades);
    let options = GameOptions::default().with_war_depth(25);
    let mut game = scripted_game(options, [one.clone(), two.clone()]);

    let result = game.play_round().unwrap().unwrap();
    assert!(result.forfeit);
    assert_eq!(result.verdict, Verdict::Draw);
    assert_eq!(result.cards, 52);
    assert_eq!(result.wars, 2);

    assert_eq!(game.hand_sizes(), [26, 26]);
    assert!(game.pile().is_empty());
    let kept_one: Vec<Card> = game.player(Seat::One).cards().copied().collect();
    let kept_two: Vec<Card> = game.player(Seat::Two).cards().copied().collect();
    assert_eq!(kept_one, one);
    assert_eq!(kept_two, two);

    let outcome = game.result().unwrap();
    assert_eq!(outcome.verdict, Verdict::Draw);
    assert_eq!(outcome.termination, Termination::Forfeit);
    assert_eq!(outcome.longest_war, 2);

    let events = game.sink();
    assert!(events.contains(&GameEvent::WarStarted { depth: 2, pile: 52 }));
    assert!(events.contains(&GameEvent::InsufficientCards {
        required: 25,
        hands: [0, 0],
    }));
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            verdict: Verdict::Draw,
            termination: Termination::Forfeit,
            hands: [26, 26],
        })
    );
    assert_eq!(
        events.last().map(ToString::to_string).as_deref(),
        Some("The game is a draw (not enough cards for war)")
    );
}

fn single_card_war(options: GameOptions) {
    let one = [
        card(Rank::Seven, Suit::Hearts),
        card(Rank::King, Suit::Clubs),
    ];
    let two = [
        card(Rank::Seven, Suit::Spades),
        card(Rank::Queen, Suit::Diamonds),
    ];
    let mut game = scripted_game(options, scripted(&one, &two));

    let result = game.play_round().unwrap().unwrap();
    assert_eq!(result.verdict, Verdict::Winner(Seat::One));
    assert_eq!(result.cards, 4);
    assert_eq!(result.wars, 1);
    assert_eq!(game.hand_sizes(), [28, 24]);

    let events = game.sink();
    assert!(!events.iter().any(|event| matches!(
        event,
        GameEvent::CardPlayed {
            face: Face::Down,
            ..
        }
    )));
    assert!(events.contains(&GameEvent::WarWon {
        depth: 1,
        winner: Seat::One,
        cards: 4,
    }));
}

#[test]
fn war_depth_one_compares_the_next_card_face_up() {
    single_card_war(GameOptions::default().with_war_depth(1));
}

#[test]
fn zero_war_depth_plays_as_one() {
    single_card_war(GameOptions::default().with_war_depth(0));
    single_card_war(GameOptions {
        war_depth: 0,
        ..GameOptions::default()
    });
}

#[test]
fn running_out_of_cards_ends_the_game() {
    let one = [card(Rank::Two, Suit::Clubs)];
    let two = [card(Rank::Ace, Suit::Spades)];
    let mut game = scripted_game(GameOptions::default(), scripted_sized(&one, &two, 1));

    let result = game.play_round().unwrap().unwrap();
    assert_eq!(result.verdict, Verdict::Winner(Seat::Two));
    assert!(!result.forfeit);
    assert!(game.is_game_over());

    let outcome = game.result().unwrap();
    assert_eq!(outcome.verdict, Verdict::Winner(Seat::Two));
    assert_eq!(outcome.termination, Termination::Exhaustion);
    assert_eq!(outcome.hands, [0, 52]);

    assert_eq!(game.play_round(), Ok(None));
    assert_eq!(game.rounds(), 1);
}

#[test]
fn empty_starting_hand_is_already_over() {
    let hands = [Vec::new(), Deck::new().cards().to_vec()];
    let game = Game::from_hands(GameOptions::default(), hands, Unshuffled, Vec::new()).unwrap();

    assert!(game.is_game_over());
    assert_eq!(game.declare_winner(), Verdict::Winner(Seat::Two));
    assert_eq!(game.result().unwrap().rounds, 0);
}

#[test]
fn round_limit_stops_the_game() {
    let options = GameOptions::default().with_max_rounds(5);
    let mut game = Game::new(options, 9);

    let outcome = game.play().unwrap();
    assert_eq!(outcome.termination, Termination::RoundLimit);
    assert_eq!(outcome.rounds, 5);
    assert_eq!(outcome.verdict, game.declare_winner());
    assert_eq!(outcome.hands.iter().sum::<usize>(), DECK_SIZE);
}

#[test]
fn cards_are_conserved_after_every_round() {
    let mut game = Game::new(GameOptions::default(), 1234);

    while game.play_round().unwrap().is_some() {
        assert_eq!(game.validate_invariant(), Ok(()));
        assert!(game.pile().is_empty());
        assert_eq!(game.hand_sizes().iter().sum::<usize>(), DECK_SIZE);
    }

    assert!(game.is_game_over());
}

#[test]
fn seeded_games_terminate_with_a_full_hand_or_forfeit() {
    for seed in 0..25 {
        let mut game = Game::new(GameOptions::default(), seed);
        let outcome = game.play().unwrap();

        assert!(outcome.rounds > 0);
        assert_eq!(outcome.hands.iter().sum::<usize>(), DECK_SIZE);
        match (outcome.termination, outcome.verdict) {
            (_, Verdict::Winner(seat)) => {
                assert_eq!(outcome.hands[seat.index()], DECK_SIZE);
                assert_eq!(outcome.hands[seat.other().index()], 0);
            }
            (termination, Verdict::Draw) => {
                assert_eq!(termination, Termination::Forfeit);
            }
        }
    }
}

#[test]
fn same_seed_replays_the_same_events() {
    let mut first = Game::with_sink(GameOptions::default(), 77, EventLog::new());
    let mut second = Game::with_sink(GameOptions::default(), 77, EventLog::new());

    let first_result = first.play().unwrap();
    let second_result = second.play().unwrap();

    assert_eq!(first_result, second_result);
    assert_eq!(first.sink().entries(), second.sink().entries());
    assert!(!first.sink().is_empty());
}

#[test]
fn event_log_numbers_entries_and_renders_lines() {
    let ace = card(Rank::Ace, Suit::Spades);
    let king = card(Rank::King, Suit::Hearts);
    let hands = scripted(&[ace], &[king]);
    let mut game =
        Game::from_hands(GameOptions::default(), hands, Unshuffled, EventLog::new()).unwrap();
    game.play_round().unwrap();

    let log = game.into_sink();
    assert_eq!(log.len(), 5);
    for (position, entry) in log.entries().iter().enumerate() {
        assert_eq!(entry.index as usize, position);
    }

    let rendered = log.to_string();
    assert!(rendered.contains("--- Round 1 ---"));
    assert!(rendered.contains("seat 1 plays Ace of Spades"));
    assert!(rendered.contains("seat 2 plays King of Hearts"));
    assert!(rendered.contains("seat 1 has 27 cards, seat 2 has 25 cards"));
}

struct CancelAfter {
    token: CancelToken,
    round: u32,
}

impl EventSink for CancelAfter {
    fn emit(&mut self, event: &GameEvent) {
        if matches!(event, GameEvent::RoundEnded { round, .. } if *round == self.round) {
            self.token.cancel();
        }
    }
}

#[test]
fn cancellation_is_honored_between_rounds() {
    let token = CancelToken::new();
    let sink = CancelAfter {
        token: token.clone(),
        round: 3,
    };
    let mut game = Game::with_sink(GameOptions::default(), 5, sink);

    let progress = game.play_until(&token).unwrap();
    assert_eq!(progress, Progress::Interrupted { rounds: 3 });
    assert!(game.pile().is_empty());
    assert_eq!(game.validate_invariant(), Ok(()));

    let fresh = CancelToken::new();
    let Progress::Finished(outcome) = game.play_until(&fresh).unwrap() else {
        panic!("game should run to completion");
    };
    assert!(outcome.rounds > 3);
}

#[test]
fn cancelled_token_stops_before_the_first_round() {
    let token = CancelToken::new();
    token.cancel();
    assert!(token.is_cancelled());

    let mut game = Game::new(GameOptions::default(), 5);
    assert_eq!(
        game.play_until(&token),
        Ok(Progress::Interrupted { rounds: 0 })
    );
    assert_eq!(game.rounds(), 0);
}

#[test]
fn from_hands_rejects_bad_decks() {
    let mut short = Deck::new().cards().to_vec();
    short.pop();
    let err = Game::from_hands(
        GameOptions::default(),
        [short, Vec::new()],
        Unshuffled,
        Vec::new(),
    )
    .err();
    assert_eq!(err, Some(SetupError::WrongCardCount(51)));

    let mut doubled = Deck::new().cards().to_vec();
    let last = doubled.len() - 1;
    doubled[last] = doubled[0];
    let err = Game::from_hands(
        GameOptions::default(),
        [doubled, Vec::new()],
        Unshuffled,
        Vec::new(),
    )
    .err();
    assert_eq!(err, Some(SetupError::DuplicateCard(Deck::new().cards()[0])));
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_war_depth(3)
        .with_max_rounds(100)
        .with_player_names("Alice", "Bob");

    assert_eq!(options.war_depth, 3);
    assert_eq!(options.max_rounds, Some(100));
    assert_eq!(options.player_names, ["Alice".to_string(), "Bob".to_string()]);

    let game = Game::new(options.clone(), 1);
    assert_eq!(game.player(Seat::One).name(), "Alice");
    assert_eq!(game.player(Seat::Two).name(), "Bob");
    assert_eq!(game.options(), &options);
}

#[test]
fn invariant_violation_reports_counts() {
    let violation = InvariantViolation {
        expected: 52,
        found: 51,
    };
    assert_eq!(
        violation.to_string(),
        "card count mismatch: found 51 cards, expected 52"
    );
}
