//! Hand-off of session state to an external store.
//!
//! Finishing or checkpointing a session only queues a [`SessionSnapshot`].
//! Snapshots are queued with the session lock held, so the queue is always
//! ordered by revision. Lock order is session lock, then queue lock.
//! [`GameSession::flush_saves`] later drains the queue and calls the store
//! with no session lock held.

use alloc::vec::Vec;
use core::fmt::Display;
use core::mem;

use crate::error::SessionError;
use crate::participant::{Participant, ParticipantId};
use crate::turn_order;

use super::{GameSession, SessionCore, SessionId, SessionState};

/// Point-in-time copy of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSnapshot {
    /// The session this snapshot was taken from.
    pub session_id: SessionId,
    /// Session state at the time of the snapshot.
    pub state: SessionState,
    /// Session revision at the time of the snapshot.
    pub revision: u64,
    /// All participants in join order.
    pub participants: Vec<Participant>,
    /// Player ids in turn order.
    pub turn_order: Vec<ParticipantId>,
}

/// Storage collaborator that persists session snapshots.
pub trait SessionStore {
    /// Error reported by the store.
    type Error: Display;

    /// Persists a snapshot.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the snapshot could not be persisted.
    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), Self::Error>;
}

/// Result of handing one snapshot to a store.
#[derive(Debug)]
pub struct SaveOutcome<E> {
    /// The snapshot that was handed over.
    pub snapshot: SessionSnapshot,
    /// What the store reported.
    pub result: Result<(), E>,
}

impl<E> SaveOutcome<E> {
    /// Returns whether the store accepted the snapshot.
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        self.result.is_ok()
    }
}

impl SessionCore {
    fn snapshot(&self, session_id: SessionId) -> SessionSnapshot {
        SessionSnapshot {
            session_id,
            state: self.state,
            revision: self.revision,
            participants: self
                .registry
                .entries_in_insertion_order()
                .cloned()
                .collect(),
            turn_order: turn_order::first_player_order_ids(&self.registry),
        }
    }
}

impl GameSession {
    /// Ends play and queues the final snapshot for saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is already finished.
    pub fn finish(&self) -> Result<(), SessionError> {
        self.core.with(|core| {
            core.ensure_open()?;
            core.state = SessionState::Finished;
            core.bump();
            self.pending_saves.lock().push(core.snapshot(self.id));
            Ok::<_, SessionError>(())
        })?;

        log::info!("{} finished", self.id);
        Ok(())
    }

    /// Queues a snapshot of the current state for saving and returns its revision.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is finished.
    pub fn checkpoint(&self) -> Result<u64, SessionError> {
        let revision = self.core.with(|core| {
            core.ensure_open()?;
            self.pending_saves.lock().push(core.snapshot(self.id));
            Ok::<_, SessionError>(core.revision)
        })?;

        log::debug!("{} checkpoint queued at revision {revision}", self.id);
        Ok(revision)
    }

    /// Returns the number of snapshots waiting to be saved.
    #[must_use]
    pub fn pending_save_count(&self) -> usize {
        self.pending_saves.lock().len()
    }

    /// Hands every queued snapshot to `store`, oldest first.
    ///
    /// The queue is emptied before the store is called. Failed snapshots are
    /// not retried; pass them to [`GameSession::requeue`] to try again.
    pub fn flush_saves<S: SessionStore>(&self, store: &S) -> Vec<SaveOutcome<S::Error>> {
        let mut pending = mem::take(&mut *self.pending_saves.lock());
        pending.sort_by_key(|snapshot| snapshot.revision);

        pending
            .into_iter()
            .map(|snapshot| {
                let result = store.save(&snapshot);
                match &result {
                    Ok(()) => log::info!(
                        "saved {} at revision {}",
                        snapshot.session_id,
                        snapshot.revision
                    ),
                    Err(err) => log::warn!(
                        "failed to save {} at revision {}: {err}",
                        snapshot.session_id,
                        snapshot.revision
                    ),
                }
                SaveOutcome { snapshot, result }
            })
            .collect()
    }

    /// Puts a snapshot back into the save queue.
    ///
    /// The next flush still hands snapshots over in revision order.
    pub fn requeue(&self, snapshot: SessionSnapshot) {
        self.pending_saves.lock().push(snapshot);
    }
}
