use alloc::vec::Vec;

use rand::Rng;

use crate::error::SessionError;
use crate::participant::{FirstPlayerFlag, ParticipantId};
use crate::turn_order;

use super::{GameSession, SessionCore};

impl SessionCore {
    fn designate(&mut self, id: ParticipantId) -> Result<(), SessionError> {
        self.ensure_open()?;

        let participant = self
            .registry
            .get_mut(id)
            .filter(|participant| participant.is_playing())
            .ok_or(SessionError::NotFound(id))?;
        participant.first_player = FirstPlayerFlag::Designated;

        self.decline_others(id);
        self.bump();
        Ok(())
    }
}

impl GameSession {
    /// Makes a player the first player.
    ///
    /// Every other participant that was designated first player is marked
    /// [`FirstPlayerFlag::Declined`], so at most one designation exists afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is finished, or if `id` is not a
    /// current player (unknown or spectating).
    pub fn set_first_player(&self, id: ParticipantId) -> Result<(), SessionError> {
        self.core.with(|core| core.designate(id))?;
        log::info!("{id} is first player in {}", self.id);
        Ok(())
    }

    /// Returns the designated first player, if they are currently playing.
    #[must_use]
    pub fn first_player(&self) -> Option<ParticipantId> {
        self.core.with(|core| {
            core.registry
                .players()
                .find(|player| player.first_player.is_designated())
                .map(|player| player.id)
        })
    }

    /// Designates a uniformly random player as first player.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is finished or has no players.
    pub fn choose_first_player_at_random(&self) -> Result<ParticipantId, SessionError> {
        let mut core = self.core.lock();
        core.ensure_open()?;

        let players: Vec<ParticipantId> = core.registry.players().map(|player| player.id).collect();
        if players.is_empty() {
            return Err(SessionError::NoPlayers);
        }

        let index = self.rng.lock().random_range(0..players.len());
        let chosen = players[index];
        core.designate(chosen)?;
        drop(core);

        log::info!("{chosen} drawn as first player in {}", self.id);
        Ok(chosen)
    }

    /// Passes first-player status to the next player in turn order.
    ///
    /// With a single player, that player stays (or becomes) first player.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is finished or has no players.
    pub fn pass_first_player(&self) -> Result<ParticipantId, SessionError> {
        let mut core = self.core.lock();
        core.ensure_open()?;

        let order = turn_order::first_player_order_ids(&core.registry);
        let next = match order.as_slice() {
            [] => return Err(SessionError::NoPlayers),
            [only] => *only,
            [_, next, ..] => *next,
        };
        core.designate(next)?;
        drop(core);

        log::info!("first player passed to {next} in {}", self.id);
        Ok(next)
    }
}
