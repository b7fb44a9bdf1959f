//! Board layout and color-group index.
//!
//! ## Layout
//!
//! A board of `n` spaces (`n` a multiple of 4, at least 8) has its corners
//! fixed at the quartiles:
//!
//! | position | kind          |
//! |----------|---------------|
//! | 0        | GO            |
//! | n/4      | JAIL          |
//! | n/2      | FREE_PARKING  |
//! | 3n/4     | GO_TO_JAIL    |
//!
//! The remaining `n - 4` positions are filled from a shuffled pool of
//! roughly 65% properties, 20% chance spaces and the rest tax spaces.
//!
//! The layout never changes after construction; only property owners do.

use rustc_hash::FxHashMap;
use std::fmt;
use tracing::debug;

use super::space::{Property, Space, SpaceKind};
use crate::core::config::check_board_size;
use crate::core::error::{GameError, Result};
use crate::core::rng::GameRng;

/// Share of the non-corner spaces that are properties, in percent.
const PROPERTY_PERCENT: usize = 65;
/// Share of the non-corner spaces that are chance spaces, in percent.
const CHANCE_PERCENT: usize = 20;
/// Properties per generated color group.
const GROUP_SIZE: usize = 2;

const BASE_PRICE: i64 = 60;
const PRICE_STEP: i64 = 20;

const STREET_NAMES: &[&str] = &[
    "Cotton Street",
    "Bamboo Ave",
    "Coral Rd",
    "Amber Ln",
    "Pearl Sq",
    "Maple Row",
    "Cedar Ct",
    "Willow Way",
    "Birch Blvd",
    "Juniper Pl",
    "Ivory Walk",
    "Saffron St",
    "Indigo Dr",
    "Opal Ter",
    "Garnet Gate",
    "Jade Crescent",
];

const COLORS: &[&str] = &[
    "Brown",
    "Light Blue",
    "Pink",
    "Orange",
    "Red",
    "Yellow",
    "Green",
    "Dark Blue",
];

/// Ordered sequence of spaces plus the color-group index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    spaces: Vec<Space>,
    /// Color -> positions of every property with that color, ascending.
    color_groups: FxHashMap<String, Vec<usize>>,
}

impl Board {
    /// Generate a randomized board of `num_spaces` spaces.
    ///
    /// `images` attaches an image reference to every space of a kind.
    pub fn generate(
        num_spaces: usize,
        images: &FxHashMap<SpaceKind, String>,
        rng: &mut GameRng,
    ) -> Result<Self> {
        check_board_size(num_spaces)?;

        let mut slots: Vec<Option<Space>> = vec![None; num_spaces];
        for (position, kind) in corner_positions(num_spaces) {
            slots[position] = Some(corner_space(kind));
        }

        let mut pool = space_pool(num_spaces - 4);
        rng.shuffle(&mut pool);

        let mut pool = pool.into_iter();
        for slot in slots.iter_mut().filter(|s| s.is_none()) {
            *slot = pool.next();
        }

        let spaces = slots
            .into_iter()
            .flatten()
            .map(|space| match images.get(&space.kind()) {
                Some(url) => space.with_image(url.clone()),
                None => space,
            })
            .collect::<Vec<_>>();

        debug!(num_spaces, seed = rng.seed(), "Generated board");
        Self::from_spaces(spaces)
    }

    /// Build a board from a hand-made layout.
    ///
    /// The layout must have a valid size and the four corner kinds at the
    /// quartile positions. Every property starts unowned: owners are only
    /// ever assigned by play.
    pub fn from_spaces(mut spaces: Vec<Space>) -> Result<Self> {
        let size = spaces.len();
        check_board_size(size)?;

        for (position, expected) in corner_positions(size) {
            if spaces[position].kind() != expected {
                return Err(GameError::MisplacedCorner { position, expected });
            }
        }

        let mut color_groups: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (position, space) in spaces.iter_mut().enumerate() {
            if let Some(property) = space.as_property_mut() {
                property.owner = None;
                color_groups
                    .entry(property.color.clone())
                    .or_default()
                    .push(position);
            }
        }

        Ok(Self { spaces, color_groups })
    }

    /// Fixed 12-space layout with three color groups.
    pub fn classic() -> Self {
        let spaces = vec![
            Space::go(),
            Space::property("Cotton Street", "Light Blue", 60, 2),
            Space::chance(),
            Space::jail(),
            Space::property("Bamboo Ave", "Light Blue", 60, 4),
            Space::tax(),
            Space::free_parking(),
            Space::property("Coral Rd", "Orange", 100, 6),
            Space::property("Amber Ln", "Orange", 120, 8),
            Space::go_to_jail(),
            Space::property("Pearl Sq", "Pink", 140, 10),
            Space::chance(),
        ];
        Self::from_spaces(spaces).expect("classic layout is valid")
    }

    /// Number of spaces.
    #[must_use]
    pub fn size(&self) -> usize {
        self.spaces.len()
    }

    /// Position of the jail corner.
    #[must_use]
    pub fn jail_position(&self) -> usize {
        self.size() / 4
    }

    /// Look up a space.
    pub fn get_space(&self, position: usize) -> Result<&Space> {
        self.spaces.get(position).ok_or(GameError::PositionOutOfRange {
            position,
            size: self.size(),
        })
    }

    /// The property at `position`, if that space is one.
    #[must_use]
    pub fn property(&self, position: usize) -> Option<&Property> {
        self.spaces.get(position).and_then(Space::as_property)
    }

    pub(crate) fn property_mut(&mut self, position: usize) -> Option<&mut Property> {
        self.spaces.get_mut(position).and_then(Space::as_property_mut)
    }

    /// All spaces in board order.
    #[must_use]
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    /// Positions of every property in a color group (empty if unknown).
    #[must_use]
    pub fn color_group(&self, color: &str) -> &[usize] {
        self.color_groups.get(color).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The full color-group index.
    #[must_use]
    pub fn color_groups(&self) -> &FxHashMap<String, Vec<usize>> {
        &self.color_groups
    }

    /// Human-readable rendering, one `index: space` line per space.
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, space) in self.spaces.iter().enumerate() {
            writeln!(f, "{}: {}", i, space)?;
        }
        Ok(())
    }
}

/// Corner positions and kinds for a board of `size` spaces.
fn corner_positions(size: usize) -> [(usize, SpaceKind); 4] {
    [
        (0, SpaceKind::Go),
        (size / 4, SpaceKind::Jail),
        (size / 2, SpaceKind::FreeParking),
        (3 * size / 4, SpaceKind::GoToJail),
    ]
}

fn corner_space(kind: SpaceKind) -> Space {
    match kind {
        SpaceKind::Jail => Space::jail(),
        SpaceKind::FreeParking => Space::free_parking(),
        SpaceKind::GoToJail => Space::go_to_jail(),
        _ => Space::go(),
    }
}

/// Unshuffled pool of `count` non-corner spaces.
///
/// Rounding leftovers go to tax spaces.
fn space_pool(count: usize) -> Vec<Space> {
    let properties = count * PROPERTY_PERCENT / 100;
    let chances = count * CHANCE_PERCENT / 100;
    let taxes = count - properties - chances;

    let mut pool = Vec::with_capacity(count);
    pool.extend((0..properties).map(generated_property));
    pool.extend((0..chances).map(|_| Space::chance()));
    pool.extend((0..taxes).map(|_| Space::tax()));
    pool
}

/// The `index`th generated property. Consecutive pairs share a color, and
/// price rises with each group.
fn generated_property(index: usize) -> Space {
    let group = index / GROUP_SIZE;

    let name = cycled_name(STREET_NAMES, index);
    let color = cycled_name(COLORS, group);
    let price = BASE_PRICE + PRICE_STEP * group as i64;
    let rent = (price / 10).max(2);

    Space::property(name, color, price, rent)
}

/// `names[i]`, with a lap suffix once the list is exhausted.
fn cycled_name(names: &[&str], i: usize) -> String {
    let base = names[i % names.len()];
    match i / names.len() {
        0 => base.to_string(),
        lap => format!("{} {}", base, lap + 1),
    }
}
