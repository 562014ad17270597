//! CRUD repositories over JSON-backed collections.
//!
//! Each repository keeps an in-memory mirror of its document and rewrites the
//! whole document after every accepted mutation. Reads hand out clones, so a
//! caller can never reach into the mirror.
//!
//! | Repository          | Entity    | Key         |
//! |---------------------|-----------|-------------|
//! | [`PlayerRepository`] | `Player`  | `PlayerId`  |
//! | [`ItemRepository`]   | `Item`    | item name   |
//! | [`GameMapStore`]     | `GameMap` | none (single value) |

pub mod game_map;
pub mod item;
pub mod player;

pub use game_map::{GameMapStore, SingletonStore};
pub use item::ItemRepository;
pub use player::PlayerRepository;

use crate::error::Result;

/// Uniform CRUD contract for keyed entity collections.
pub trait Repository<T, Id: ?Sized> {
    /// Validate and append `entity`, persist the collection and return the
    /// stored value (with any generated identifier filled in).
    ///
    /// # Errors
    ///
    /// `Validation` for a broken entity, `Persistence`/`Serialization` if
    /// the document cannot be written.
    fn save(&mut self, entity: T) -> Result<T>;

    /// First record whose key equals `id`.
    fn find_by_id(&self, id: &Id) -> Option<T>;

    /// Snapshot of every record.
    fn find_all(&self) -> Vec<T>;

    /// Replace the record keyed by `id` wholesale.
    ///
    /// # Errors
    ///
    /// `Validation` for a broken entity, `NotFound` if no record has that
    /// key, `Persistence`/`Serialization` if the document cannot be written.
    fn update(&mut self, id: &Id, entity: T) -> Result<()>;

    /// Remove every record keyed by `id`. A missing key is a no-op.
    ///
    /// # Errors
    ///
    /// `Persistence`/`Serialization` if the document cannot be written.
    fn delete(&mut self, id: &Id) -> Result<()>;

    /// Whether a record with this key is stored.
    fn exists(&self, id: &Id) -> bool;

    /// Number of stored records.
    fn count(&self) -> usize {
        self.find_all().len()
    }
}
