//! The game state machine.
//!
//! `WAITING -> IN_PROGRESS -> FINISHED`. Callers drive it with
//! `Game::run_command` (or `Game::submit` for raw chat messages) and read it
//! back with `Game::get_state`.
//!
//! A `Game` is not synchronized. Hosts serving concurrent requests must wrap
//! each command/snapshot pair in their own lock.

mod command;
mod game;
mod landing;
mod state;


pub use command::{parse_command, ChatRouter, Command, CommandRouter};
pub use game::Game;
pub use state::{GameOutcome, PendingAction, PendingKind, Phase, PlayerView, SpaceView, StateSnapshot};
