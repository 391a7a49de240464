use crate::error::SessionError;
use crate::participant::{FirstPlayerFlag, Participant, ParticipantId, Role};

use super::{GameSession, SessionState};

impl GameSession {
    /// Adds a participant at the end of join order.
    ///
    /// A player who arrives already designated first player takes the
    /// designation over; any previous holder is marked declined. A spectator
    /// never takes the designation: their flag is kept only while nobody else
    /// holds it, and is stored as declined otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The session is finished
    /// - A participant with the same id already joined
    /// - The participant is a player and all player seats are taken
    /// - The participant is a spectator and spectators are not allowed
    pub fn add_participant(&self, participant: Participant) -> Result<(), SessionError> {
        self.join(participant, false)
    }

    /// Same as [`GameSession::add_participant`], but only while the session is
    /// waiting for players.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidState`] once play has started, and
    /// otherwise the errors of [`GameSession::add_participant`].
    pub fn add_waiting_participant(&self, participant: Participant) -> Result<(), SessionError> {
        self.join(participant, true)
    }

    fn join(&self, mut participant: Participant, waiting_only: bool) -> Result<(), SessionError> {
        let mut core = self.core.lock();
        core.ensure_open()?;
        if waiting_only && core.state != SessionState::WaitingForPlayers {
            return Err(SessionError::InvalidState);
        }

        let id = participant.id;
        if core.registry.contains(id) {
            return Err(SessionError::DuplicateId(id));
        }

        match participant.role {
            Role::Player if core.registry.player_count() >= self.options.max_players => {
                return Err(SessionError::SessionFull);
            }
            Role::Spectator if !self.options.allow_spectators => {
                return Err(SessionError::SpectatorsNotAllowed);
            }
            _ => {}
        }

        let designated = participant.first_player.is_designated();
        let takes_lead = designated && participant.is_playing();
        let held_elsewhere = core.registry.designated_first_players().next().is_some();
        if designated && !takes_lead && held_elsewhere {
            participant.first_player = FirstPlayerFlag::Declined;
        }

        core.registry.add(participant)?;
        if takes_lead {
            core.decline_others(id);
        }
        core.bump();
        drop(core);

        log::info!("participant {id} joined {}", self.id);
        Ok(())
    }

    /// Removes a participant and returns it.
    ///
    /// The remaining participants keep their relative join order.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is finished or the participant is not found.
    pub fn remove_participant(&self, id: ParticipantId) -> Result<Participant, SessionError> {
        let mut core = self.core.lock();
        core.ensure_open()?;

        let participant = core.registry.remove(id)?;
        core.bump();
        drop(core);

        log::info!("participant {id} left {}", self.id);
        Ok(participant)
    }

    /// Switches a participant between player and spectator and returns the new role.
    ///
    /// The first-player flag is left as it is: a designated player who starts
    /// spectating drops out of the turn order, and leads it again on return.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The session is finished
    /// - The participant is not found
    /// - The participant would become a spectator and spectators are not allowed
    /// - The participant would become a player and all player seats are taken
    pub fn toggle_spectator(&self, id: ParticipantId) -> Result<Role, SessionError> {
        let mut core = self.core.lock();
        core.ensure_open()?;

        let role = core
            .registry
            .get(id)
            .map(|participant| participant.role.toggled())
            .ok_or(SessionError::NotFound(id))?;

        match role {
            Role::Spectator if !self.options.allow_spectators => {
                return Err(SessionError::SpectatorsNotAllowed);
            }
            Role::Player if core.registry.player_count() >= self.options.max_players => {
                return Err(SessionError::SessionFull);
            }
            _ => {}
        }

        if let Some(participant) = core.registry.get_mut(id) {
            participant.role = role;
        }
        core.bump();
        drop(core);

        log::info!("participant {id} is now {role:?} in {}", self.id);
        Ok(role)
    }

    /// Returns whether the session is waiting for players and has a free player seat.
    #[must_use]
    pub fn is_open(&self) -> bool {
        let core = self.core.lock();
        core.state == SessionState::WaitingForPlayers
            && core.registry.player_count() < self.options.max_players
    }
}
