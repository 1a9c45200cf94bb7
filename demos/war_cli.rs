//! CLI War example.
//!
//! Usage: `cargo run --example war_cli -- [seed] [war-depth]`

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use warsim::{EventSink, Face, Game, GameEvent, GameOptions, Seat, Verdict};

struct Narrator {
    names: [String; 2],
}

impl Narrator {
    fn name(&self, seat: Seat) -> &str {
        &self.names[seat.index()]
    }
}

impl EventSink for Narrator {
    fn emit(&mut self, event: &GameEvent) {
        match event {
            GameEvent::RoundStarted { round } => println!("\n--- Round {round} ---"),
            GameEvent::CardPlayed {
                seat,
                card,
                face: Face::Up,
            } => println!("{} plays {}", self.name(*seat), colorize_card(&card.to_string())),
            GameEvent::CardPlayed {
                seat,
                face: Face::Down,
                ..
            } => println!("{} places a card face down", self.name(*seat)),
            GameEvent::RoundWon { winner, cards, .. } => {
                println!("{} takes {cards} cards", self.name(*winner));
            }
            GameEvent::WarStarted { depth: 1, .. } => {
                println!("{}", colorize("It's a tie! This means war!", "33"));
            }
            GameEvent::WarStarted { .. } => {
                println!("{}", colorize("It's another tie! The war continues!", "33"));
            }
            GameEvent::WarWon { winner, cards, .. } => {
                println!("{} wins the war and takes {cards} cards!", self.name(*winner));
            }
            GameEvent::InsufficientCards { .. } => {
                println!("A player doesn't have enough cards for war!");
            }
            GameEvent::RoundEnded { hands, .. } => {
                println!("{} has {} cards.", self.names[0], hands[0]);
                println!("{} has {} cards.", self.names[1], hands[1]);
            }
            GameEvent::GameOver {
                verdict: Verdict::Winner(seat),
                hands,
                ..
            } => println!(
                "\n{}",
                colorize(
                    &format!(
                        "{} wins the game with {} cards!",
                        self.name(*seat),
                        hands[seat.index()]
                    ),
                    "32"
                )
            ),
            GameEvent::GameOver {
                verdict: Verdict::Draw,
                ..
            } => println!("\n{}", colorize("The game is a draw.", "32")),
        }
    }
}

fn main() {
    let mut args = env::args().skip(1);
    let seed = args
        .next()
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    let war_depth = args
        .next()
        .and_then(|arg| arg.parse::<u8>().ok())
        .unwrap_or(2);

    println!("War CLI example (seed {seed}, war depth {war_depth})");

    let options = GameOptions::default().with_war_depth(war_depth);
    let narrator = Narrator {
        names: options.player_names.clone(),
    };
    let mut game = Game::with_sink(options, seed, narrator);

    match game.play() {
        Ok(result) => println!(
            "Rounds: {} | wars: {} | longest war: {}",
            result.rounds, result.wars, result.longest_war
        ),
        Err(err) => {
            eprintln!("Internal error: {err}");
            std::process::exit(1);
        }
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn colorize_card(text: &str) -> String {
    if text.ends_with("Hearts") || text.ends_with("Diamonds") {
        colorize(text, "31")
    } else {
        colorize(text, "34")
    }
}
