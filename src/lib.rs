//! Participant registry and first-player turn order for multiplayer card-game
//! sessions, with optional `no_std` support.
//!
//! A [`GameSession`] tracks who is attached to a game (players and spectators)
//! and computes the turn order starting from the designated first player. A
//! [`Lobby`] creates sessions and quick-joins users into open ones.
//!
//! # Example
//!
//! ```
//! use seatrs::{GameSession, Participant, ParticipantId, SessionId, SessionOptions};
//!
//! let options = SessionOptions::default().with_max_players(3);
//! let session = GameSession::new(SessionId::new(1), options, 42);
//! for (raw, name) in [(1, "p1"), (2, "p2"), (3, "p3")] {
//!     session.add_participant(Participant::player(ParticipantId::new(raw), name)).unwrap();
//! }
//! session.set_first_player(ParticipantId::new(3)).unwrap();
//!
//! let order = session.current_turn_order_ids();
//! assert_eq!(order, [3, 1, 2].map(ParticipantId::new));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod error;
pub mod lobby;
pub mod options;
pub mod participant;
pub mod registry;
pub mod session;
mod sync;
pub mod turn_order;

// Re-export main types
pub use error::{InvariantViolation, LobbyError, RegistryError, SessionError};
pub use lobby::Lobby;
pub use options::SessionOptions;
pub use participant::{FirstPlayerFlag, Participant, ParticipantId, Role};
pub use registry::{Entries, ParticipantRegistry};
pub use session::{
    GameSession, SaveOutcome, SessionId, SessionSnapshot, SessionState, SessionStore,
};
