//! Game session aggregate.

use alloc::vec::Vec;
use core::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{InvariantViolation, SessionError};
use crate::options::SessionOptions;
use crate::participant::{FirstPlayerFlag, Participant, ParticipantId};
use crate::registry::ParticipantRegistry;
use crate::sync::Mutex;
use crate::turn_order;

mod first_player;
mod persistence;
mod seats;
pub mod state;

pub use persistence::{SaveOutcome, SessionSnapshot, SessionStore};
pub use state::SessionState;

/// Identifier of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionId(u64);

impl SessionId {
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

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// A game session: its participants, first-player designation, and lifecycle.
///
/// Every mutation and every turn-order query goes through a single session
/// lock, so a session can be shared between threads while its registry stays
/// consistent. Separate sessions share nothing.
///
/// ```
/// use seatrs::{GameSession, Participant, ParticipantId, SessionId, SessionOptions};
///
/// let session = GameSession::new(SessionId::new(1), SessionOptions::default(), 42);
/// session.add_participant(Participant::player(ParticipantId::new(1), "alice")).unwrap();
/// session.add_participant(Participant::player(ParticipantId::new(2), "bob")).unwrap();
/// session.set_first_player(ParticipantId::new(2)).unwrap();
///
/// assert_eq!(
///     session.current_turn_order_ids(),
///     [ParticipantId::new(2), ParticipantId::new(1)]
/// );
/// ```
#[derive(Debug)]
pub struct GameSession {
    /// Session identifier.
    id: SessionId,
    /// Session options.
    pub options: SessionOptions,
    /// Registry, lifecycle state and revision.
    core: Mutex<SessionCore>,
    /// Random number generator for first-player draws.
    rng: Mutex<ChaCha8Rng>,
    /// Snapshots waiting for the storage collaborator.
    pending_saves: Mutex<Vec<SessionSnapshot>>,
}

#[derive(Debug, Default)]
struct SessionCore {
    state: SessionState,
    registry: ParticipantRegistry,
    revision: u64,
}

impl SessionCore {
    const fn ensure_open(&self) -> Result<(), SessionError> {
        if self.state.is_open() {
            Ok(())
        } else {
            Err(SessionError::InvalidState)
        }
    }

    const fn bump(&mut self) {
        self.revision += 1;
    }

    /// Marks every designated participant other than `keep` as declined.
    fn decline_others(&mut self, keep: ParticipantId) {
        let revoked: Vec<ParticipantId> = self
            .registry
            .designated_first_players()
            .map(|participant| participant.id)
            .filter(|&id| id != keep)
            .collect();

        for id in revoked {
            if let Some(participant) = self.registry.get_mut(id) {
                participant.first_player = FirstPlayerFlag::Declined;
                log::debug!("revoked first player designation of {id}");
            }
        }
    }
}

impl GameSession {
    /// Creates an empty session with the given seed.
    #[must_use]
    pub fn new(id: SessionId, options: SessionOptions, seed: u64) -> Self {
        Self {
            id,
            options,
            core: Mutex::new(SessionCore::default()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
            pending_saves: Mutex::new(Vec::new()),
        }
    }

    /// Returns the session identifier.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the current session state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.core.lock().state
    }

    /// Returns a counter bumped by every successful mutation.
    ///
    /// A turn order fetched at one revision is valid until the revision changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.core.lock().revision
    }

    /// Returns a copy of the participant with the given id.
    #[must_use]
    pub fn participant(&self, id: ParticipantId) -> Option<Participant> {
        self.core.lock().registry.get(id).cloned()
    }

    /// Returns all participants in join order, spectators included.
    #[must_use]
    pub fn participants(&self) -> Vec<Participant> {
        self.core.with(|core| {
            core.registry
                .entries_in_insertion_order()
                .cloned()
                .collect()
        })
    }

    /// Returns the number of participants, spectators included.
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.core.lock().registry.len()
    }

    /// Returns the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.core.lock().registry.player_count()
    }

    /// Returns the players in turn order, starting with the first player.
    ///
    /// Computed from the live registry on every call.
    #[must_use]
    pub fn current_turn_order(&self) -> Vec<Participant> {
        self.core
            .with(|core| turn_order::first_player_order(&core.registry))
    }

    /// Returns the ids of the players in turn order.
    #[must_use]
    pub fn current_turn_order_ids(&self) -> Vec<ParticipantId> {
        self.core
            .with(|core| turn_order::first_player_order_ids(&core.registry))
    }

    /// Checks the single-designee invariant of the registry.
    ///
    /// # Errors
    ///
    /// Returns an error if more than one participant is designated first player.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        self.core.lock().registry.validate()
    }

    /// Starts play.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is not waiting for players, or if it
    /// has no players.
    pub fn start(&self) -> Result<(), SessionError> {
        let mut core = self.core.lock();
        if core.state != SessionState::WaitingForPlayers {
            return Err(SessionError::InvalidState);
        }
        if core.registry.player_count() == 0 {
            return Err(SessionError::NoPlayers);
        }

        core.state = SessionState::InProgress;
        core.bump();
        drop(core);

        log::info!("{} started", self.id);
        Ok(())
    }
}
