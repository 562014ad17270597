//! # Orbit Core
//!
//! Persistence and identity layer for the Orbit text space game.
//!
//! Game state lives in three JSON documents:
//!
//! - **players**: accounts, health, location and inventory ([`Player`])
//! - **items**: the item catalogue, seeded with defaults on first run ([`Item`])
//! - **game map**: a single galaxy of sectors and space objects ([`GameMap`])
//!
//! Every document is mirrored in memory by a repository that validates each
//! entity before it is written, and rewrites the whole document after every
//! accepted change. [`AuthService`] adds registration and login on top of the
//! player repository, and [`GameData`] opens everything from an
//! [`OrbitConfig`].
//!
//! ```no_run
//! use orbit_core::{GameData, OrbitConfig};
//!
//! # fn main() -> orbit_core::Result<()> {
//! let config = OrbitConfig::from_file(std::path::Path::new("orbit.toml"))?;
//! let mut data = GameData::open(&config)?;
//! let player = data.auth.register("alice", "secret1")?;
//! assert_eq!(player.health(), 100);
//! # Ok(())
//! # }
//! ```

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod auth;
pub mod config;
pub mod error;
pub mod game;
pub mod model;
pub mod repository;
pub mod store;
pub mod telemetry;
pub mod types;
pub mod validation;

pub use auth::{AuthService, CredentialHasher};
pub use config::OrbitConfig;
pub use error::{OrbitError, Result, ValidationError};
pub use game::GameData;
pub use model::{GameMap, Item, Player, Sector, SpaceObject};
pub use repository::{GameMapStore, ItemRepository, PlayerRepository, Repository, SingletonStore};
pub use store::JsonStore;
pub use types::*;
pub use validation::Validate;
