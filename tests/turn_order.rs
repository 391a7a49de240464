//! Turn order integration tests.

use seatrs::{
    FirstPlayerFlag, InvariantViolation, Participant, ParticipantId, ParticipantRegistry,
    RegistryError, turn_order,
};

const fn id(raw: u64) -> ParticipantId {
    ParticipantId::new(raw)
}

fn player(raw: u64, flag: FirstPlayerFlag) -> Participant {
    Participant::player(id(raw), format!("test{raw}")).with_first_player(flag)
}

fn registry_of(participants: &[Participant]) -> ParticipantRegistry {
    let mut registry = ParticipantRegistry::new();
    for participant in participants {
        registry.add(participant.clone()).unwrap();
    }
    registry
}

fn order_of(participants: &[Participant]) -> Vec<ParticipantId> {
    turn_order::first_player_order_ids(&registry_of(participants))
}

#[test]
fn no_players_gives_empty_order() {
    let registry = ParticipantRegistry::new();
    assert!(turn_order::first_player_order(&registry).is_empty());
}

#[test]
fn single_player_without_designation() {
    let unset = player(1, FirstPlayerFlag::Unset);
    let order = turn_order::first_player_order(&registry_of(&[unset.clone()]));
    assert_eq!(order, vec![unset]);
}

#[test]
fn single_player_with_designation() {
    let set = player(1, FirstPlayerFlag::Designated);
    let order = turn_order::first_player_order(&registry_of(&[set.clone()]));
    assert_eq!(order, vec![set]);
}

#[test]
fn two_players_without_designation_keep_join_order() {
    let order = order_of(&[
        player(1, FirstPlayerFlag::Unset),
        player(2, FirstPlayerFlag::Unset),
    ]);
    assert_eq!(order, [id(1), id(2)]);
}

#[test]
fn two_players_first_joined_is_first_player() {
    let order = order_of(&[
        player(1, FirstPlayerFlag::Designated),
        player(2, FirstPlayerFlag::Unset),
    ]);
    assert_eq!(order, [id(1), id(2)]);
}

#[test]
fn two_players_second_joined_is_first_player() {
    let order = order_of(&[
        player(1, FirstPlayerFlag::Unset),
        player(2, FirstPlayerFlag::Designated),
    ]);
    assert_eq!(order, [id(2), id(1)]);
}

#[test]
fn declined_player_never_leads() {
    let order = order_of(&[
        player(1, FirstPlayerFlag::Declined),
        player(2, FirstPlayerFlag::Designated),
    ]);
    assert_eq!(order, [id(2), id(1)]);

    let order = order_of(&[
        player(1, FirstPlayerFlag::Declined),
        player(2, FirstPlayerFlag::Declined),
    ]);
    assert_eq!(order, [id(1), id(2)]);
}

#[test]
fn three_players_rotate_from_first_player() {
    let with_lead = |lead: Option<u64>| {
        let players: Vec<Participant> = (1..=3)
            .map(|raw| {
                let flag = if Some(raw) == lead {
                    FirstPlayerFlag::Designated
                } else {
                    FirstPlayerFlag::Declined
                };
                player(raw, flag)
            })
            .collect();
        order_of(&players)
    };

    assert_eq!(with_lead(None), [id(1), id(2), id(3)]);
    assert_eq!(with_lead(Some(1)), [id(1), id(2), id(3)]);
    assert_eq!(with_lead(Some(3)), [id(3), id(1), id(2)]);
    assert_eq!(with_lead(Some(2)), [id(2), id(3), id(1)]);
}

#[test]
fn spectators_never_take_turns() {
    let registry = registry_of(&[
        player(1, FirstPlayerFlag::Unset),
        Participant::spectator(id(2), "watcher").with_first_player(true),
        player(3, FirstPlayerFlag::Unset),
    ]);

    assert_eq!(
        turn_order::first_player_order_ids(&registry),
        [id(1), id(3)]
    );
}

#[test]
fn spectator_between_players_does_not_shift_rotation() {
    let registry = registry_of(&[
        player(1, FirstPlayerFlag::Unset),
        Participant::spectator(id(2), "watcher"),
        player(3, FirstPlayerFlag::Designated),
        player(4, FirstPlayerFlag::Unset),
    ]);

    assert_eq!(
        turn_order::first_player_order_ids(&registry),
        [id(3), id(4), id(1)]
    );
}

#[test]
fn multiple_designations_fall_back_to_earliest() {
    let registry = registry_of(&[
        player(1, FirstPlayerFlag::Unset),
        player(2, FirstPlayerFlag::Designated),
        player(3, FirstPlayerFlag::Designated),
    ]);

    assert_eq!(
        registry.validate(),
        Err(InvariantViolation::MultipleFirstPlayers { count: 2 })
    );
    assert_eq!(
        turn_order::first_player_order_ids(&registry),
        [id(2), id(3), id(1)]
    );
}

#[test]
fn order_is_deterministic() {
    let registry = registry_of(&[
        player(5, FirstPlayerFlag::Unset),
        player(9, FirstPlayerFlag::Designated),
        player(2, FirstPlayerFlag::Unset),
    ]);

    let first = turn_order::first_player_order(&registry);
    let second = turn_order::first_player_order(&registry);
    assert_eq!(first, second);
}

#[test]
fn registry_rejects_duplicates_and_unknown_removals() {
    let mut registry = registry_of(&[player(1, FirstPlayerFlag::Unset)]);

    assert_eq!(
        registry.add(player(1, FirstPlayerFlag::Designated)),
        Err(RegistryError::DuplicateId(id(1)))
    );
    assert_eq!(registry.get(id(1)).unwrap().first_player, FirstPlayerFlag::Unset);
    assert_eq!(registry.remove(id(7)), Err(RegistryError::NotFound(id(7))));
    assert_eq!(registry.len(), 1);
}

#[test]
fn registry_keeps_join_order_across_removal_and_rejoin() {
    let mut registry = registry_of(&[
        player(30, FirstPlayerFlag::Unset),
        player(10, FirstPlayerFlag::Unset),
        player(20, FirstPlayerFlag::Unset),
    ]);

    let removed = registry.remove(id(10)).unwrap();
    assert_eq!(removed.id, id(10));
    assert_eq!(registry.ids().collect::<Vec<_>>(), [id(30), id(20)]);

    registry.add(removed).unwrap();
    assert_eq!(registry.ids().collect::<Vec<_>>(), [id(30), id(20), id(10)]);
}

#[test]
fn entries_iterator_is_restartable() {
    let registry = registry_of(&[
        player(1, FirstPlayerFlag::Unset),
        player(2, FirstPlayerFlag::Unset),
    ]);

    let mut entries = registry.entries_in_insertion_order();
    assert_eq!(entries.next().map(|p| p.id), Some(id(1)));

    let rest = entries.clone();
    assert_eq!(entries.map(|p| p.id).collect::<Vec<_>>(), [id(2)]);
    assert_eq!(rest.map(|p| p.id).collect::<Vec<_>>(), [id(2)]);
}

#[test]
fn editing_a_participant_keeps_its_position() {
    let mut registry = registry_of(&[
        player(1, FirstPlayerFlag::Unset),
        player(2, FirstPlayerFlag::Unset),
    ]);

    registry.get_mut(id(1)).unwrap().name = String::from("renamed");
    assert_eq!(registry.ids().collect::<Vec<_>>(), [id(1), id(2)]);
}

#[test]
fn flag_converts_from_optional_bool() {
    assert_eq!(FirstPlayerFlag::from(None), FirstPlayerFlag::Unset);
    assert_eq!(FirstPlayerFlag::from(Some(true)), FirstPlayerFlag::Designated);
    assert_eq!(FirstPlayerFlag::from(Some(false)), FirstPlayerFlag::Declined);
    assert_eq!(FirstPlayerFlag::Declined.as_option(), Some(false));
    assert!(!FirstPlayerFlag::Declined.is_designated());
}
