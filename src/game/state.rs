//! Game phase, pending decisions and the read-only state snapshot.
//!
//! `StateSnapshot` is what a hosting layer serializes as its response
//! payload. Field names serialize in camelCase (`gameState`,
//! `currentPlayerName`, `pendingAction`, ...).

use serde::{Deserialize, Serialize};

use crate::board::{Space, SpaceKind, Tile};
use crate::core::Player;

/// Lifecycle of a game. Transitions only move forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Accepting joins.
    #[default]
    Waiting,
    /// Turn loop active.
    InProgress,
    /// Terminal.
    Finished,
}

/// Kinds of decisions a player can owe before play continues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PendingKind {
    BuyOrPass,
}

/// The single outstanding decision blocking turn advancement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingAction {
    pub player_name: String,
    pub kind: PendingKind,
    pub space_position: usize,
}

/// How a finished game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Exactly one player remained.
    Winner(String),
    /// The last remaining player went bankrupt.
    AllBankrupt,
}

/// Per-player view in a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub name: String,
    pub money: i64,
    /// Property names in purchase order.
    pub properties: Vec<String>,
    pub position: usize,
    pub bankrupt: bool,
}

/// Per-space view in a snapshot. Property fields are `None` for other kinds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceView {
    pub name: String,
    pub kind: SpaceKind,
    pub image: Option<String>,
    pub color: Option<String>,
    pub price: Option<i64>,
    pub rent: Option<i64>,
    /// Owner name; `null` when unowned.
    pub owner: Option<String>,
}

impl SpaceView {
    pub(crate) fn from_space(space: &Space) -> Self {
        let mut view = Self {
            name: space.name.clone(),
            kind: space.kind(),
            image: space.image.clone(),
            color: None,
            price: None,
            rent: None,
            owner: None,
        };
        if let Tile::Property(p) = &space.tile {
            view.color = Some(p.color.clone());
            view.price = Some(p.price);
            view.rent = Some(p.rent);
            view.owner = p.owner.clone();
        }
        view
    }
}

/// Everything a caller needs to render the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    pub game_state: Phase,
    pub players: Vec<PlayerView>,
    pub board: Vec<SpaceView>,
    /// Set only while in progress with at least one player.
    pub current_player_name: Option<String>,
    pub pending_action: Option<PendingAction>,
    /// Narration accumulated since the last drain.
    pub log: Vec<String>,
}

impl PlayerView {
    pub(crate) fn new(player: &Player, property_names: Vec<String>) -> Self {
        Self {
            name: player.name.clone(),
            money: player.money,
            properties: property_names,
            position: player.position,
            bankrupt: player.bankrupt,
        }
    }
}
