//! Space-landing resolution and bankruptcy.
//!
//! Resolution runs once per roll and never recurses: GO_TO_JAIL teleports
//! without resolving the jail space.

use tracing::{info, warn};

use super::game::Game;
use super::state::{GameOutcome, PendingAction, PendingKind, Phase};
use crate::board::Tile;

impl Game {
    /// Apply the effect of the space player `i` is standing on.
    pub(super) fn resolve_landing(&mut self, i: usize) {
        let position = self.players[i].position;
        let name = self.players[i].name.clone();
        let space = &self.board.spaces()[position];

        match &space.tile {
            Tile::GoToJail => {
                let jail = self.board.jail_position();
                self.players[i].position = jail;
                info!(player = %name, jail, "Sent to jail");
                self.log.push(format!("{} goes directly to Jail!", name));
            }
            Tile::Property(property) => match property.owner.clone() {
                None => {
                    let price = property.price;
                    self.pending = Some(PendingAction {
                        player_name: name.clone(),
                        kind: PendingKind::BuyOrPass,
                        space_position: position,
                    });
                    self.log.push(format!(
                        "This property is unowned. You can buy it for ${}.",
                        price
                    ));
                    self.log.push(format!(
                        "Type '{}:!buy' to purchase or '{}:!pass' to skip.",
                        name, name
                    ));
                }
                Some(owner) if owner == name => {
                    self.log.push("You landed on your own property. No rent needed.");
                }
                Some(owner) => {
                    let color = property.color.clone();
                    let base_rent = property.rent;
                    self.charge_rent(i, &owner, &color, base_rent);
                }
            },
            Tile::Tax => {
                let tax = self.config.tax_amount;
                self.log.push(format!("You landed on a Tax space. You must pay ${}.", tax));
                if !self.players[i].pay(tax) {
                    self.handle_bankruptcy(i);
                }
            }
            Tile::FreeParking => {
                let bonus = self.config.free_parking_bonus;
                self.log.push(format!(
                    "You landed on Free Parking! You collect a bonus of ${}.",
                    bonus
                ));
                self.players[i].receive(bonus);
            }
            Tile::Chance => self.draw_chance(i),
            Tile::Go | Tile::Jail => {
                let msg = format!("Landed on {}. No special action.", space.name);
                self.log.push(msg);
            }
        }
    }

    /// Charge player `i` rent owed to `owner`, doubled when the owner holds
    /// the whole color group.
    fn charge_rent(&mut self, i: usize, owner: &str, color: &str, base_rent: i64) {
        let Some(&owner_idx) = self.index.get(owner) else {
            warn!(owner, "Property owned by a player who is not seated");
            return;
        };

        let mut rent = base_rent;
        if self.players[owner_idx].owns_all_properties_in_set(self.board.color_group(color)) {
            rent *= 2;
            self.log.push(format!(
                "!!! {} owns all {} properties. Rent is DOUBLED!",
                owner, color
            ));
        }

        self.log.push(format!(
            "This property is owned by {}. You owe ${} in rent.",
            owner, rent
        ));

        if self.players[i].pay(rent) {
            self.players[owner_idx].receive(rent);
            info!(payer = %self.players[i].name, owner, rent, "Rent paid");
            let payer = &self.players[i].name;
            let msg = format!("{} paid ${} to {}.", payer, rent, owner);
            self.log.push(msg);
        } else {
            self.handle_bankruptcy(i);
        }
    }

    fn draw_chance(&mut self, i: usize) {
        let Some(&outcome) = self.rng.choose(&self.config.chance_outcomes) else {
            self.log.push("Chance! Nothing happens.");
            return;
        };

        if outcome > 0 {
            self.log.push(format!("Chance! You found ${}.", outcome));
            self.players[i].receive(outcome);
        } else if outcome < 0 {
            self.log.push(format!("Chance! You lost ${}.", -outcome));
            if !self.players[i].pay(-outcome) {
                self.handle_bankruptcy(i);
            }
        } else {
            self.log.push("Chance! Nothing happens.");
        }
    }

    /// Remove player `i` from the game and release their properties.
    ///
    /// The turn passes to whoever would have gone next had nobody gone
    /// bankrupt: the bankrupt player's successor if it was their turn,
    /// otherwise the player whose turn it already was. The next player is
    /// tracked by identity across the removal rather than by index.
    pub(super) fn handle_bankruptcy(&mut self, i: usize) {
        let count = self.players.len();
        let next_up = if i == self.current {
            (count > 1).then(|| self.players[(i + 1) % count].name.clone())
        } else {
            Some(self.players[self.current].name.clone())
        };

        let player = self.players.remove(i);
        self.rebuild_index();

        for &position in &player.properties {
            if let Some(property) = self.board.property_mut(position) {
                property.owner = None;
            }
        }
        if self
            .pending
            .as_ref()
            .is_some_and(|p| p.player_name == player.name)
        {
            self.pending = None;
        }

        info!(player = %player.name, released = player.properties.len(), "Player bankrupt");
        self.log.push(format!("--- {} is bankrupt! ---", player.name));
        self.log.push(format!(
            "All properties of {} are now back on the market.",
            player.name
        ));

        match self.players.len() {
            0 => {
                self.current = 0;
                self.finish(GameOutcome::AllBankrupt);
                self.log.push("All players are bankrupt. The game is over with no winner.");
            }
            1 => {
                self.current = 0;
                let winner = self.players[0].name.clone();
                self.finish(GameOutcome::Winner(winner.clone()));
                self.log.push("--- GAME OVER ---");
                self.log.push(format!("The winner is {}!", winner));
                let status = self.status_line(0);
                self.log.push(format!("Final status: {}", status));
            }
            _ => {
                self.current = next_up
                    .and_then(|name| self.index.get(&name).copied())
                    .unwrap_or(0);
            }
        }
    }

    fn finish(&mut self, outcome: GameOutcome) {
        info!(?outcome, "Game finished");
        self.phase = Phase::Finished;
        self.pending = None;
        self.outcome = Some(outcome);
    }
}
