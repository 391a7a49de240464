//! Participant types.

use alloc::string::String;
use core::fmt;

/// Opaque identifier of a participant, stable for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticipantId(u64);

impl ParticipantId {
    /// Creates an identifier from a raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ParticipantId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether a participant takes turns or only watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Takes part in the turn order.
    #[default]
    Player,
    /// Watches the game; never appears in the turn order.
    Spectator,
}

impl Role {
    /// Returns the other role.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Player => Self::Spectator,
            Self::Spectator => Self::Player,
        }
    }
}

/// Tri-state first-player marker.
///
/// `Declined` and `Unset` both mean "not first player"; they are kept apart so
/// that a revoked designation can still be told from one that never existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FirstPlayerFlag {
    /// No opinion.
    #[default]
    Unset,
    /// Explicitly designated first player.
    Designated,
    /// Explicitly not first player.
    Declined,
}

impl FirstPlayerFlag {
    /// Returns `true` only for [`FirstPlayerFlag::Designated`].
    #[must_use]
    pub const fn is_designated(self) -> bool {
        matches!(self, Self::Designated)
    }

    /// Returns the flag as an optional boolean.
    #[must_use]
    pub const fn as_option(self) -> Option<bool> {
        match self {
            Self::Unset => None,
            Self::Designated => Some(true),
            Self::Declined => Some(false),
        }
    }
}

impl From<Option<bool>> for FirstPlayerFlag {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => Self::Unset,
            Some(true) => Self::Designated,
            Some(false) => Self::Declined,
        }
    }
}

impl From<bool> for FirstPlayerFlag {
    fn from(value: bool) -> Self {
        Self::from(Some(value))
    }
}

/// A user attached to a game session.
///
/// ```
/// use seatrs::{FirstPlayerFlag, Participant, ParticipantId, Role};
///
/// let alice = Participant::player(ParticipantId::new(1), "alice")
///     .with_first_player(FirstPlayerFlag::Designated);
/// assert_eq!(alice.role, Role::Player);
/// assert!(alice.first_player.is_designated());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Participant {
    /// Unique identifier.
    pub id: ParticipantId,
    /// Display name.
    pub name: String,
    /// Current role.
    pub role: Role,
    /// First-player marker.
    pub first_player: FirstPlayerFlag,
}

impl Participant {
    /// Creates a participant with the given role and no first-player opinion.
    #[must_use]
    pub fn new(id: ParticipantId, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            first_player: FirstPlayerFlag::Unset,
        }
    }

    /// Creates a player.
    #[must_use]
    pub fn player(id: ParticipantId, name: impl Into<String>) -> Self {
        Self::new(id, name, Role::Player)
    }

    /// Creates a spectator.
    #[must_use]
    pub fn spectator(id: ParticipantId, name: impl Into<String>) -> Self {
        Self::new(id, name, Role::Spectator)
    }

    /// Sets the first-player marker.
    #[must_use]
    pub fn with_first_player(mut self, flag: impl Into<FirstPlayerFlag>) -> Self {
        self.first_player = flag.into();
        self
    }

    /// Returns whether this participant takes turns.
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        matches!(self.role, Role::Player)
    }

    /// Returns whether this participant only watches.
    #[must_use]
    pub const fn is_spectator(&self) -> bool {
        matches!(self.role, Role::Spectator)
    }
}
