//! Core engine types: configuration, errors, RNG, narration log, players.
//!
//! These are the leaves the board and game modules build on.

pub mod config;
pub mod error;
pub mod log;
pub mod player;
pub mod rng;

pub use config::{GameConfig, GameOptions};
pub use error::{GameError, Result};
pub use log::EventLog;
pub use player::{OwnedPositions, Player};
pub use rng::{GameRng, GameRngState};
