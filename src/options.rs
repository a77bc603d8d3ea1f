//! Game configuration.

/// Configuration for a single game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use kusokurae::GameConfig;
///
/// let config = GameConfig::default().with_players(4).with_seed(7);
/// assert_eq!(config.players, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    /// Number of players (3 or 4).
    pub players: u8,
    /// Initial 8-byte random state. Seeds the default shuffler and is handed
    /// to a process-wide generator installed with [`set_prng`].
    ///
    /// [`set_prng`]: crate::set_prng
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: 3,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use kusokurae::GameConfig;
    ///
    /// let config = GameConfig::default().with_players(4);
    /// assert_eq!(config.players, 4);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets the initial random state.
    ///
    /// # Example
    ///
    /// ```
    /// use kusokurae::GameConfig;
    ///
    /// let config = GameConfig::default().with_seed(42);
    /// assert_eq!(config.seed, 42);
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Whether the player count is supported.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self.players, 3 | 4)
    }
}
