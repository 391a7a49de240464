//! Error types for registry and session operations.

use thiserror::Error;

use crate::participant::ParticipantId;
use crate::session::SessionId;

/// Errors that can occur when editing a [`ParticipantRegistry`](crate::ParticipantRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A participant with this id is already registered.
    #[error("participant {0} is already registered")]
    DuplicateId(ParticipantId),
    /// No participant with this id is registered.
    #[error("participant {0} not found")]
    NotFound(ParticipantId),
}

/// Errors that can occur during session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A participant with this id already joined.
    #[error("participant {0} already joined")]
    DuplicateId(ParticipantId),
    /// No such participant, or not a player where a player is required.
    #[error("participant {0} not found")]
    NotFound(ParticipantId),
    /// All player seats are taken.
    #[error("no free player seat")]
    SessionFull,
    /// The session does not accept spectators.
    #[error("spectators are not allowed")]
    SpectatorsNotAllowed,
    /// The operation needs at least one player.
    #[error("no players in session")]
    NoPlayers,
    /// Invalid session state for this operation.
    #[error("invalid session state for this operation")]
    InvalidState,
}

impl From<RegistryError> for SessionError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::DuplicateId(id) => Self::DuplicateId(id),
            RegistryError::NotFound(id) => Self::NotFound(id),
        }
    }
}

/// Errors that can occur when creating or joining sessions through a [`Lobby`](crate::Lobby).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LobbyError {
    /// No session is waiting for players with a free seat.
    #[error("no open session to join")]
    NoOpenSession,
    /// The lobby does not know this session.
    #[error("session {0} not found")]
    UnknownSession(SessionId),
    /// The session rejected the operation.
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Registry states that correct use of the session API never produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// More than one participant is designated first player.
    #[error("{count} participants are designated first player")]
    MultipleFirstPlayers {
        /// Number of designated participants.
        count: usize,
    },
}
