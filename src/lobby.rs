//! Session creation and quick-join.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::mem;
use core::sync::atomic::{AtomicU64, Ordering};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{LobbyError, SessionError};
use crate::options::SessionOptions;
use crate::participant::{FirstPlayerFlag, Participant, Role};
use crate::session::{GameSession, SessionId, SessionState};
use crate::sync::Mutex;

/// Collection of live sessions, in creation order.
///
/// Sessions are handed out as `Arc<GameSession>` so that each one can be
/// driven from its own thread or task.
#[derive(Debug)]
pub struct Lobby {
    /// Options applied to every new session.
    pub options: SessionOptions,
    /// Next session ID to assign.
    next_id: AtomicU64,
    /// Live sessions, oldest first.
    sessions: Mutex<Vec<Arc<GameSession>>>,
    /// Source of per-session seeds.
    rng: Mutex<ChaCha8Rng>,
}

impl Lobby {
    /// Creates an empty lobby with the given seed.
    #[must_use]
    pub fn new(options: SessionOptions, seed: u64) -> Self {
        Self {
            options,
            next_id: AtomicU64::new(1),
            sessions: Mutex::new(Vec::new()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Creates a session and seats its owner.
    ///
    /// # Errors
    ///
    /// Returns an error if the owner cannot join under the lobby options
    /// (for example a spectator owner when spectators are not allowed). The
    /// session is discarded in that case.
    pub fn new_game(&self, owner: Participant) -> Result<Arc<GameSession>, LobbyError> {
        let id = SessionId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let seed = self.rng.lock().next_u64();
        let session = Arc::new(GameSession::new(id, self.options, seed));
        session.add_participant(owner)?;

        self.sessions.lock().push(Arc::clone(&session));
        log::info!("{id} created");
        Ok(session)
    }

    /// Seats a participant as a player in the oldest open session.
    ///
    /// The joiner never arrives as first player; any first-player flag they
    /// carry is dropped.
    ///
    /// Sessions that fill up or start between the lookup and the join are
    /// skipped, as are sessions the participant already belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`LobbyError::NoOpenSession`] if no session could take the participant.
    pub fn quick_join(&self, participant: Participant) -> Result<Arc<GameSession>, LobbyError> {
        let candidates: Vec<Arc<GameSession>> = self
            .sessions
            .lock()
            .iter()
            .filter(|session| session.is_open())
            .cloned()
            .collect();

        for session in candidates {
            let player = Participant {
                role: Role::Player,
                first_player: FirstPlayerFlag::Unset,
                ..participant.clone()
            };
            match session.add_waiting_participant(player) {
                Ok(()) => return Ok(session),
                Err(
                    SessionError::SessionFull
                    | SessionError::DuplicateId(_)
                    | SessionError::InvalidState,
                ) => {}
                Err(err) => return Err(err.into()),
            }
        }

        Err(LobbyError::NoOpenSession)
    }

    /// Returns the session with the given id.
    #[must_use]
    pub fn session(&self, id: SessionId) -> Option<Arc<GameSession>> {
        self.sessions
            .lock()
            .iter()
            .find(|session| session.id() == id)
            .cloned()
    }

    /// Returns all sessions, oldest first.
    #[must_use]
    pub fn sessions(&self) -> Vec<Arc<GameSession>> {
        self.sessions.lock().clone()
    }

    /// Returns the number of sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    /// Returns whether the lobby has no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }

    /// Removes a session from the lobby.
    ///
    /// # Errors
    ///
    /// Returns [`LobbyError::UnknownSession`] if the lobby does not hold the session.
    pub fn close(&self, id: SessionId) -> Result<Arc<GameSession>, LobbyError> {
        let mut sessions = self.sessions.lock();
        let index = sessions
            .iter()
            .position(|session| session.id() == id)
            .ok_or(LobbyError::UnknownSession(id))?;
        let session = sessions.remove(index);
        drop(sessions);

        log::info!("{id} closed");
        Ok(session)
    }

    /// Removes every finished session and returns them for archiving.
    pub fn remove_finished(&self) -> Vec<Arc<GameSession>> {
        let mut sessions = self.sessions.lock();
        let (finished, live): (Vec<_>, Vec<_>) = mem::take(&mut *sessions)
            .into_iter()
            .partition(|session| session.state() == SessionState::Finished);
        *sessions = live;
        drop(sessions);

        finished
    }
}
