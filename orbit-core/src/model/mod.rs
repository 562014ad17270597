//! Persisted entities: players, items and the game map.

pub mod item;
pub mod map;
pub mod player;

pub use item::Item;
pub use map::{GameMap, Sector, SpaceObject};
pub use player::Player;
