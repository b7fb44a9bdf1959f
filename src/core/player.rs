//! Per-participant state and its money/movement transactions.
//!
//! A player's name is its identity. Owned properties are held as board
//! positions (back-references); the board's `Property::owner` is the
//! authoritative record of ownership.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Property;

/// Board positions of the properties a player owns, in purchase order.
pub type OwnedPositions = SmallVec<[usize; 8]>;

/// A participant in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub money: i64,
    /// Index into the board, always in `0..board_size`.
    pub position: usize,
    pub properties: OwnedPositions,
    /// Set on a failed payment and never cleared.
    pub bankrupt: bool,
}

impl Player {
    /// Create a player at GO with the given money.
    pub fn new(name: impl Into<String>, money: i64) -> Self {
        Self {
            name: name.into(),
            money,
            position: 0,
            properties: SmallVec::new(),
            bankrupt: false,
        }
    }

    /// Advance `steps` spaces around a board of `board_size` spaces.
    ///
    /// Returns whether GO was passed, meaning the new position is strictly
    /// lower than the old one. A move that starts on GO and goes exactly once
    /// around ends on GO without registering a pass.
    pub fn move_by(&mut self, steps: usize, board_size: usize) -> bool {
        let old_position = self.position;
        self.position = (self.position + steps) % board_size;
        self.position < old_position
    }

    /// Pay `amount` in full, or go bankrupt.
    ///
    /// There is no partial payment: when `money < amount` the player's money
    /// drops to zero, they are flagged bankrupt, and `false` is returned.
    pub fn pay(&mut self, amount: i64) -> bool {
        if self.money >= amount {
            self.money -= amount;
            true
        } else {
            self.money = 0;
            self.bankrupt = true;
            false
        }
    }

    /// Unconditional credit.
    pub fn receive(&mut self, amount: i64) {
        self.money += amount;
    }

    /// Pay for `property` at `position` and take ownership of it.
    ///
    /// Ownership changes only if the payment succeeds.
    pub fn buy_property(&mut self, position: usize, property: &mut Property) -> bool {
        if !self.pay(property.price) {
            return false;
        }
        self.properties.push(position);
        property.owner = Some(self.name.clone());
        true
    }

    /// Whether this player owns every position in `group`.
    #[must_use]
    pub fn owns_all_properties_in_set(&self, group: &[usize]) -> bool {
        group.iter().all(|pos| self.properties.contains(pos))
    }
}
