//! Session configuration options.

/// Configuration options for a game session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use seatrs::SessionOptions;
///
/// let options = SessionOptions::default()
///     .with_max_players(4)
///     .with_spectators(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionOptions {
    /// Maximum number of players. Spectators do not count.
    pub max_players: usize,
    /// Whether participants may join or switch to spectating.
    pub allow_spectators: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            max_players: 2,
            allow_spectators: true,
        }
    }
}

impl SessionOptions {
    /// Sets the maximum number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use seatrs::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_max_players(6);
    /// assert_eq!(options.max_players, 6);
    /// ```
    #[must_use]
    pub const fn with_max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players;
        self
    }

    /// Sets whether spectators are allowed.
    ///
    /// # Example
    ///
    /// ```
    /// use seatrs::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_spectators(false);
    /// assert_eq!(options.allow_spectators, false);
    /// ```
    #[must_use]
    pub const fn with_spectators(mut self, allowed: bool) -> Self {
        self.allow_spectators = allowed;
        self
    }
}
