//! Lobby integration tests.

use seatrs::{
    FirstPlayerFlag, Lobby, LobbyError, Participant, ParticipantId, Role, SessionError, SessionId,
    SessionOptions,
};

const fn id(raw: u64) -> ParticipantId {
    ParticipantId::new(raw)
}

#[test]
fn new_game_seats_owner() {
    let lobby = Lobby::new(SessionOptions::default(), 3);
    let session = lobby.new_game(Participant::player(id(1), "owner")).unwrap();

    assert_eq!(lobby.len(), 1);
    assert_eq!(session.current_turn_order_ids(), [id(1)]);
    assert!(session.is_open());
    assert_eq!(
        lobby.session(session.id()).map(|found| found.id()),
        Some(session.id())
    );
}

#[test]
fn new_game_assigns_distinct_ids() {
    let lobby = Lobby::new(SessionOptions::default(), 3);
    let first = lobby.new_game(Participant::player(id(1), "a")).unwrap();
    let second = lobby.new_game(Participant::player(id(2), "b")).unwrap();

    assert_ne!(first.id(), second.id());
    let ids: Vec<SessionId> = lobby.sessions().iter().map(|s| s.id()).collect();
    assert_eq!(ids, [first.id(), second.id()]);
}

#[test]
fn new_game_rejected_owner_leaves_lobby_empty() {
    let lobby = Lobby::new(SessionOptions::default().with_spectators(false), 3);
    let err = lobby
        .new_game(Participant::spectator(id(1), "watcher"))
        .unwrap_err();

    assert_eq!(
        err,
        LobbyError::Session(SessionError::SpectatorsNotAllowed)
    );
    assert!(lobby.is_empty());
}

#[test]
fn quick_join_fills_oldest_open_session() {
    let lobby = Lobby::new(SessionOptions::default().with_max_players(2), 3);
    let oldest = lobby.new_game(Participant::player(id(1), "a")).unwrap();
    let newer = lobby.new_game(Participant::player(id(2), "b")).unwrap();

    let joined = lobby.quick_join(Participant::player(id(3), "c")).unwrap();
    assert_eq!(joined.id(), oldest.id());
    assert_eq!(oldest.current_turn_order_ids(), [id(1), id(3)]);

    let joined = lobby.quick_join(Participant::player(id(4), "d")).unwrap();
    assert_eq!(joined.id(), newer.id());

    assert_eq!(
        lobby
            .quick_join(Participant::player(id(5), "e"))
            .unwrap_err(),
        LobbyError::NoOpenSession
    );
}

#[test]
fn quick_join_seats_spectators_as_players() {
    let lobby = Lobby::new(SessionOptions::default(), 3);
    let session = lobby.new_game(Participant::player(id(1), "a")).unwrap();

    lobby
        .quick_join(Participant::spectator(id(2), "b"))
        .unwrap();
    assert_eq!(session.participant(id(2)).unwrap().role, Role::Player);
}

#[test]
fn quick_join_skips_started_and_joined_sessions() {
    let lobby = Lobby::new(SessionOptions::default().with_max_players(3), 3);
    let started = lobby.new_game(Participant::player(id(1), "a")).unwrap();
    started.start().unwrap();
    let waiting = lobby.new_game(Participant::player(id(2), "b")).unwrap();

    let joined = lobby.quick_join(Participant::player(id(3), "c")).unwrap();
    assert_eq!(joined.id(), waiting.id());

    assert_eq!(
        lobby
            .quick_join(Participant::player(id(3), "c"))
            .unwrap_err(),
        LobbyError::NoOpenSession
    );
}

#[test]
fn close_and_remove_finished() {
    let lobby = Lobby::new(SessionOptions::default(), 3);
    let first = lobby.new_game(Participant::player(id(1), "a")).unwrap();
    let second = lobby.new_game(Participant::player(id(2), "b")).unwrap();
    let third = lobby.new_game(Participant::player(id(3), "c")).unwrap();

    second.finish().unwrap();
    let finished = lobby.remove_finished();
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].id(), second.id());
    assert_eq!(finished[0].pending_save_count(), 1);

    let closed = lobby.close(first.id()).unwrap();
    assert_eq!(closed.id(), first.id());
    assert_eq!(
        lobby.close(first.id()).unwrap_err(),
        LobbyError::UnknownSession(first.id())
    );

    let remaining: Vec<SessionId> = lobby.sessions().iter().map(|s| s.id()).collect();
    assert_eq!(remaining, [third.id()]);
}

#[test]
fn quick_join_never_takes_first_player() {
    let lobby = Lobby::new(SessionOptions::default().with_max_players(3), 3);
    let session = lobby.new_game(Participant::player(id(1), "owner")).unwrap();
    lobby.quick_join(Participant::player(id(2), "b")).unwrap();
    session.set_first_player(id(1)).unwrap();

    lobby
        .quick_join(Participant::player(id(3), "c").with_first_player(true))
        .unwrap();

    assert_eq!(session.first_player(), Some(id(1)));
    assert_eq!(session.current_turn_order_ids(), [id(1), id(2), id(3)]);
    assert_eq!(
        session.participant(id(3)).unwrap().first_player,
        FirstPlayerFlag::Unset
    );
}

#[test]
fn quick_join_skips_session_started_after_lookup() {
    let lobby = Lobby::new(SessionOptions::default().with_max_players(3), 3);
    let session = lobby.new_game(Participant::player(id(1), "a")).unwrap();
    session.start().unwrap();

    assert_eq!(
        session
            .add_waiting_participant(Participant::player(id(2), "b"))
            .unwrap_err(),
        SessionError::InvalidState
    );
    assert_eq!(
        lobby
            .quick_join(Participant::player(id(2), "b"))
            .unwrap_err(),
        LobbyError::NoOpenSession
    );
}
