//! Session state types.

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionState {
    /// Accepting participants; play has not started.
    #[default]
    WaitingForPlayers,
    /// Play is under way.
    InProgress,
    /// Play has ended. No further mutations are accepted.
    Finished,
}

impl SessionState {
    /// Returns whether the session still accepts mutations.
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Finished)
    }
}
