//! First-player turn order.
//!
//! The turn order is the list of players in join order, rotated so that the
//! designated first player leads. Players after the first player keep their
//! seats ("clockwise"), and the players before it wrap around to the end.
//! Spectators never take part.

use alloc::vec::Vec;

use crate::error::InvariantViolation;
use crate::participant::{Participant, ParticipantId};
use crate::registry::ParticipantRegistry;

/// Computes the turn order for the current registry contents.
///
/// Without a designated player the result is plain join order. If the registry
/// holds several designated players (which the session API never allows), the
/// earliest one in join order leads and a warning is logged.
///
/// ```
/// use seatrs::{Participant, ParticipantId, ParticipantRegistry, turn_order};
///
/// let mut registry = ParticipantRegistry::new();
/// registry.add(Participant::player(ParticipantId::new(1), "p1")).unwrap();
/// registry.add(Participant::player(ParticipantId::new(2), "p2")).unwrap();
/// registry
///     .add(Participant::player(ParticipantId::new(3), "p3").with_first_player(true))
///     .unwrap();
///
/// let ids = turn_order::first_player_order_ids(&registry);
/// assert_eq!(ids, [3, 1, 2].map(ParticipantId::new));
/// ```
#[must_use]
pub fn first_player_order(registry: &ParticipantRegistry) -> Vec<Participant> {
    let mut players: Vec<Participant> = registry.players().cloned().collect();
    let lead = leading_index(&players);
    players.rotate_left(lead);
    players
}

/// Same as [`first_player_order`], returning ids only.
#[must_use]
pub fn first_player_order_ids(registry: &ParticipantRegistry) -> Vec<ParticipantId> {
    first_player_order(registry)
        .into_iter()
        .map(|player| player.id)
        .collect()
}

fn leading_index(players: &[Participant]) -> usize {
    let mut designated = players
        .iter()
        .enumerate()
        .filter(|(_, player)| player.first_player.is_designated())
        .map(|(index, _)| index);

    let Some(lead) = designated.next() else {
        return 0;
    };

    let extra = designated.count();
    if extra > 0 {
        let count = extra + 1;
        log::warn!(
            "{}; using the earliest joined",
            InvariantViolation::MultipleFirstPlayers { count }
        );
    }

    lead
}
