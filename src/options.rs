//! Game configuration options.

use alloc::string::String;

/// Configuration options for a game of War.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use warsim::GameOptions;
///
/// let options = GameOptions::default()
///     .with_war_depth(4)
///     .with_max_rounds(10_000)
///     .with_player_names("Alice", "Bob");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Cards each player commits per war: `war_depth - 1` face down plus one
    /// face up. Never zero.
    pub war_depth: u8,
    /// Rounds after which the game is stopped and the larger hand wins.
    /// `None` plays until a hand runs out.
    pub max_rounds: Option<u32>,
    /// Player names, indexed by seat.
    pub player_names: [String; 2],
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            war_depth: 2,
            max_rounds: None,
            player_names: [String::from("Player 1"), String::from("Player 2")],
        }
    }
}

impl GameOptions {
    /// Sets the war depth. Zero is treated as one.
    ///
    /// # Example
    ///
    /// ```
    /// use warsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_war_depth(4);
    /// assert_eq!(options.war_depth, 4);
    ///
    /// let clamped = GameOptions::default().with_war_depth(0);
    /// assert_eq!(clamped.war_depth, 1);
    /// ```
    #[must_use]
    pub const fn with_war_depth(mut self, depth: u8) -> Self {
        self.war_depth = if depth == 0 { 1 } else { depth };
        self
    }

    /// Caps the number of rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use warsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_rounds(500);
    /// assert_eq!(options.max_rounds, Some(500));
    /// ```
    #[must_use]
    pub const fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    /// Sets the player names.
    ///
    /// # Example
    ///
    /// ```
    /// use warsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_names("Alice", "Bob");
    /// assert_eq!(options.player_names[1], "Bob");
    /// ```
    #[must_use]
    pub fn with_player_names(mut self, one: impl Into<String>, two: impl Into<String>) -> Self {
        self.player_names = [one.into(), two.into()];
        self
    }
}
