//! Insertion-ordered participant registry.

use alloc::vec::Vec;
use core::slice;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::{InvariantViolation, RegistryError};
use crate::participant::{Participant, ParticipantId};

/// Participants of one session, keyed by id and kept in join order.
///
/// Join order is the only ordering the registry offers. Removing a participant
/// leaves the relative order of the others untouched, and re-adding an id
/// appends it at the end.
#[derive(Debug, Clone, Default)]
pub struct ParticipantRegistry {
    /// Ids in first-seen order.
    order: Vec<ParticipantId>,
    /// Participant data (`id` -> participant).
    entries: HashMap<ParticipantId, Participant>,
}

impl ParticipantRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a participant.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateId`] if the id is already registered.
    pub fn add(&mut self, participant: Participant) -> Result<(), RegistryError> {
        let id = participant.id;
        if self.entries.contains_key(&id) {
            return Err(RegistryError::DuplicateId(id));
        }

        self.order.push(id);
        self.entries.insert(id, participant);
        log::debug!("registered participant {id}");
        Ok(())
    }

    /// Removes a participant and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the id is not registered.
    pub fn remove(&mut self, id: ParticipantId) -> Result<Participant, RegistryError> {
        let participant = self
            .entries
            .remove(&id)
            .ok_or(RegistryError::NotFound(id))?;
        self.order.retain(|&other| other != id);
        log::debug!("unregistered participant {id}");
        Ok(participant)
    }

    /// Returns the participant with the given id.
    #[must_use]
    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.entries.get(&id)
    }

    /// Returns the participant with the given id for editing.
    ///
    /// Edits never move the participant in join order.
    pub fn get_mut(&mut self, id: ParticipantId) -> Option<&mut Participant> {
        self.entries.get_mut(&id)
    }

    /// Returns whether the id is registered.
    #[must_use]
    pub fn contains(&self, id: ParticipantId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Returns the number of participants, spectators included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates over all participants in join order.
    ///
    /// The iterator is `Clone`, so it can be restarted from any point.
    #[must_use]
    pub fn entries_in_insertion_order(&self) -> Entries<'_> {
        Entries {
            order: self.order.iter(),
            entries: &self.entries,
        }
    }

    /// Iterates over ids in join order.
    pub fn ids(&self) -> impl Iterator<Item = ParticipantId> + Clone + '_ {
        self.order.iter().copied()
    }

    /// Iterates over players (spectators skipped) in join order.
    pub fn players(&self) -> impl Iterator<Item = &Participant> + Clone + '_ {
        self.entries_in_insertion_order()
            .filter(|participant| participant.is_playing())
    }

    /// Returns the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players().count()
    }

    /// Iterates over every participant designated first player, spectators included.
    pub fn designated_first_players(&self) -> impl Iterator<Item = &Participant> + '_ {
        self.entries_in_insertion_order()
            .filter(|participant| participant.first_player.is_designated())
    }

    /// Checks the single-designee invariant.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation::MultipleFirstPlayers`] if more than one
    /// participant is designated first player.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        match self.designated_first_players().count() {
            0 | 1 => Ok(()),
            count => Err(InvariantViolation::MultipleFirstPlayers { count }),
        }
    }
}

/// Iterator over registry entries in join order.
///
/// Created by [`ParticipantRegistry::entries_in_insertion_order`].
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    order: slice::Iter<'a, ParticipantId>,
    entries: &'a HashMap<ParticipantId, Participant>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = &'a Participant;

    fn next(&mut self) -> Option<Self::Item> {
        let entries = self.entries;
        self.order.find_map(|id| entries.get(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.order.size_hint().1)
    }
}
