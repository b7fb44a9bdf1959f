//! Board cells.
//!
//! A `Space` is a name, an optional image reference and a `Tile` saying what
//! happens when a player lands there. Only `Tile::Property` carries mutable
//! state (its owner).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant of a `Tile`, used for dispatch, serialization and image
/// lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpaceKind {
    Go,
    Property,
    Chance,
    Tax,
    Jail,
    FreeParking,
    GoToJail,
}

/// A purchasable, rent-bearing space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Color group tag.
    pub color: String,
    pub price: i64,
    /// Base rent; doubled when the owner holds the whole color group.
    pub rent: i64,
    /// Name of the owning player, if any.
    pub owner: Option<String>,
}

impl Property {
    /// Create an unowned property.
    pub fn new(color: impl Into<String>, price: i64, rent: i64) -> Self {
        Self {
            color: color.into(),
            price,
            rent,
            owner: None,
        }
    }
}

/// What a space does when landed on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Go,
    Jail,
    FreeParking,
    GoToJail,
    Chance,
    Tax,
    Property(Property),
}

impl Tile {
    #[must_use]
    pub fn kind(&self) -> SpaceKind {
        match self {
            Tile::Go => SpaceKind::Go,
            Tile::Jail => SpaceKind::Jail,
            Tile::FreeParking => SpaceKind::FreeParking,
            Tile::GoToJail => SpaceKind::GoToJail,
            Tile::Chance => SpaceKind::Chance,
            Tile::Tax => SpaceKind::Tax,
            Tile::Property(_) => SpaceKind::Property,
        }
    }
}

/// One cell of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub name: String,
    pub image: Option<String>,
    pub tile: Tile,
}

impl Space {
    pub fn new(name: impl Into<String>, tile: Tile) -> Self {
        Self {
            name: name.into(),
            image: None,
            tile,
        }
    }

    pub fn go() -> Self {
        Self::new("GO", Tile::Go)
    }

    pub fn jail() -> Self {
        Self::new("Jail/Just Visiting", Tile::Jail)
    }

    pub fn free_parking() -> Self {
        Self::new("Free Parking", Tile::FreeParking)
    }

    pub fn go_to_jail() -> Self {
        Self::new("Go To Jail", Tile::GoToJail)
    }

    pub fn chance() -> Self {
        Self::new("Chance", Tile::Chance)
    }

    pub fn tax() -> Self {
        Self::new("Tax", Tile::Tax)
    }

    pub fn property(name: impl Into<String>, color: impl Into<String>, price: i64, rent: i64) -> Self {
        Self::new(name, Tile::Property(Property::new(color, price, rent)))
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> SpaceKind {
        self.tile.kind()
    }

    #[must_use]
    pub fn as_property(&self) -> Option<&Property> {
        match &self.tile {
            Tile::Property(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_property_mut(&mut self) -> Option<&mut Property> {
        match &mut self.tile {
            Tile::Property(p) => Some(p),
            _ => None,
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tile {
            Tile::Property(p) => {
                write!(
                    f,
                    "[{} ({}) - Price: ${}, Rent: ${}",
                    self.name, p.color, p.price, p.rent
                )?;
                if let Some(owner) = &p.owner {
                    write!(f, ", Owner: {}", owner)?;
                }
                write!(f, "]")
            }
            _ => write!(f, "[{}]", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_dispatch() {
        assert_eq!(Space::go().kind(), SpaceKind::Go);
        assert_eq!(Space::go_to_jail().kind(), SpaceKind::GoToJail);
        assert_eq!(Space::property("Coral Rd", "Orange", 100, 6).kind(), SpaceKind::Property);
        assert!(Space::chance().as_property().is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Space::tax().to_string(), "[Tax]");

        let mut space = Space::property("Coral Rd", "Orange", 100, 6);
        assert_eq!(space.to_string(), "[Coral Rd (Orange) - Price: $100, Rent: $6]");

        space.as_property_mut().unwrap().owner = Some("Bob".to_string());
        assert_eq!(
            space.to_string(),
            "[Coral Rd (Orange) - Price: $100, Rent: $6, Owner: Bob]"
        );
    }

    #[test]
    fn test_kind_serializes_screaming() {
        let json = serde_json::to_string(&SpaceKind::FreeParking).unwrap();
        assert_eq!(json, "\"FREE_PARKING\"");
        let kind: SpaceKind = serde_json::from_str("\"GO_TO_JAIL\"").unwrap();
        assert_eq!(kind, SpaceKind::GoToJail);
    }
}
