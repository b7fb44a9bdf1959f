//! # monopoly-live
//!
//! A simplified Monopoly-style board game engine driven by chat commands.
//!
//! ## Design Principles
//!
//! 1. **Host-Owned Games**: A `Game` is an ordinary value. Hosts (an HTTP
//!    session, a REPL, a test) create and own as many as they like.
//!
//! 2. **Never Fail on Player Input**: Rule violations are narrated into the
//!    game's event log; only malformed configuration returns an error.
//!
//! 3. **Reproducible**: Board layout, turn order, dice and chance draws all
//!    come from one seedable RNG.
//!
//! ## Modules
//!
//! - `core`: configuration, errors, RNG, event log, players
//! - `board`: spaces, properties, color groups and board generation
//! - `game`: the state machine, command router and state snapshots
//!
//! ## Example
//!
//! ```
//! use monopoly_live::{Command, Game, GameConfig, GameOptions, Phase};
//!
//! let mut game = Game::with_seed(GameConfig::default(), GameOptions::default(), 42).unwrap();
//! game.run_command(Command::Join, "Alice");
//! game.submit("!join", "Bob");
//! game.run_command(Command::Start, "Alice");
//!
//! let state = game.get_state();
//! assert_eq!(state.game_state, Phase::InProgress);
//! assert!(state.current_player_name.is_some());
//! ```

pub mod board;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    EventLog, GameConfig, GameError, GameOptions, GameRng, GameRngState, Player, Result,
};

pub use crate::board::{Board, Property, Space, SpaceKind, Tile};

pub use crate::game::{
    parse_command, ChatRouter, Command, CommandRouter, Game, GameOutcome, PendingAction,
    PendingKind, Phase, PlayerView, SpaceView, StateSnapshot,
};
