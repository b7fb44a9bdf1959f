//! Game configuration.
//!
//! - `GameConfig`: rule amounts and player limits shared by every game a host
//!   creates. Deserializes from the SCREAMING_SNAKE_CASE settings keys
//!   (`BOARD_SIZE`, `STARTING_MONEY`, ...), any missing key falls back to its
//!   default.
//! - `GameOptions`: per-instance overrides for a fresh game (board size and
//!   per-kind image references).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use crate::board::SpaceKind;

/// Rule settings for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct GameConfig {
    /// Number of spaces on generated boards (multiple of 4, at least 8).
    pub board_size: usize,

    /// Players allowed to join.
    pub max_players: usize,

    /// Players required before `start` succeeds.
    pub min_players: usize,

    /// Money each player joins with.
    pub starting_money: i64,

    /// Credited when a move wraps past GO.
    pub pass_go_money: i64,

    /// Flat amount charged on a TAX space.
    pub tax_amount: i64,

    /// Flat amount credited on FREE_PARKING.
    pub free_parking_bonus: i64,

    /// Signed amounts a CHANCE space draws from uniformly.
    pub chance_outcomes: Vec<i64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 12,
            max_players: 8,
            min_players: 2,
            starting_money: 1500,
            pass_go_money: 200,
            tax_amount: 100,
            free_parking_bonus: 50,
            chance_outcomes: vec![-50, -20, 20, 50, 100],
        }
    }
}

impl GameConfig {
    /// Create a configuration with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set both player limits.
    #[must_use]
    pub fn with_player_limits(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    #[must_use]
    pub fn with_starting_money(mut self, money: i64) -> Self {
        self.starting_money = money;
        self
    }

    #[must_use]
    pub fn with_pass_go_money(mut self, money: i64) -> Self {
        self.pass_go_money = money;
        self
    }

    #[must_use]
    pub fn with_tax_amount(mut self, amount: i64) -> Self {
        self.tax_amount = amount;
        self
    }

    #[must_use]
    pub fn with_free_parking_bonus(mut self, bonus: i64) -> Self {
        self.free_parking_bonus = bonus;
        self
    }

    #[must_use]
    pub fn with_chance_outcomes(mut self, outcomes: Vec<i64>) -> Self {
        self.chance_outcomes = outcomes;
        self
    }

    /// Check every setting, failing on the first invalid one.
    pub fn validate(&self) -> Result<()> {
        check_board_size(self.board_size)?;

        if self.min_players == 0 || self.min_players > self.max_players {
            return Err(GameError::InvalidPlayerLimits {
                min: self.min_players,
                max: self.max_players,
            });
        }

        let amounts = [
            ("STARTING_MONEY", self.starting_money),
            ("PASS_GO_MONEY", self.pass_go_money),
            ("TAX_AMOUNT", self.tax_amount),
            ("FREE_PARKING_BONUS", self.free_parking_bonus),
        ];
        if let Some((name, _)) = amounts.iter().find(|(_, value)| *value <= 0) {
            return Err(GameError::NonPositiveSetting(*name));
        }

        if self.chance_outcomes.is_empty() {
            return Err(GameError::EmptyChanceOutcomes);
        }
        // Losses are paid as `-outcome`, which must not overflow.
        if let Some(&outcome) = self.chance_outcomes.iter().find(|&&o| o == i64::MIN) {
            return Err(GameError::ChanceOutcomeOutOfRange(outcome));
        }

        Ok(())
    }
}

/// Board sizes must split into four equal sides with room between corners.
pub(crate) fn check_board_size(size: usize) -> Result<()> {
    if size < 8 || size % 4 != 0 {
        return Err(GameError::InvalidBoardSize(size));
    }
    Ok(())
}

/// Per-instance overrides applied when a fresh game is created.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    /// Overrides `GameConfig::board_size` for this instance.
    pub board_size: Option<usize>,

    /// Image reference attached to every generated space of a kind.
    pub images: FxHashMap<SpaceKind, String>,
}

impl GameOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = Some(size);
        self
    }

    #[must_use]
    pub fn with_image(mut self, kind: SpaceKind, url: impl Into<String>) -> Self {
        self.images.insert(kind, url.into());
        self
    }
}
