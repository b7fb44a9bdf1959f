//! Shared helpers for integration tests.

#![allow(dead_code)]

use monopoly_live::{Command, Game, Phase};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once. Level comes from `TEST_LOG`, then
/// `RUST_LOG`, defaulting to `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Join every name and start the game.
pub fn started(mut game: Game, names: &[&str]) -> Game {
    for name in names {
        game.run_command(Command::Join, name);
    }
    game.run_command(Command::Start, names[0]);
    assert_eq!(game.phase(), Phase::InProgress);
    game
}

/// Name of the player whose turn it is.
pub fn current(game: &Game) -> String {
    game.get_state()
        .current_player_name
        .expect("game in progress has a current player")
}
