//! The board: spaces, properties and color groups.
//!
//! Spaces are a tagged sum type (`Tile`) rather than a class hierarchy;
//! landing resolution in `game` dispatches on `SpaceKind`.

pub mod board;
pub mod space;

pub use board::Board;
pub use space::{Property, Space, SpaceKind, Tile};
