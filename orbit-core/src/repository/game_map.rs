//! Single-value stores, used for the game map.
//!
//! The map is one JSON object rather than a keyed collection, so it gets its
//! own store type without an identifier parameter: there is at most one
//! value, and `save`/`update` both overwrite it.

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{OrbitError, Result};
use crate::model::{GameMap, Sector};
use crate::store::JsonStore;
use crate::validation::Validate;

/// Store for the game map document.
pub type GameMapStore = SingletonStore<GameMap>;

/// A validated single value mirrored from one JSON document.
#[derive(Debug)]
pub struct SingletonStore<T> {
    store: JsonStore,
    value: Option<T>,
}

impl<T> SingletonStore<T>
where
    T: Validate + Serialize + DeserializeOwned + Clone,
{
    /// Open the store at `path`. A missing or corrupt file means "no value".
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::with_store(JsonStore::new(path))
    }

    /// Open on an already configured store.
    #[must_use]
    pub fn with_store(store: JsonStore) -> Self {
        let value = store.load();
        debug!(path = %store.path().display(), present = value.is_some(), "Singleton store opened");
        Self { store, value }
    }

    /// A copy of the stored value.
    #[must_use]
    pub fn get(&self) -> Option<T> {
        self.value.clone()
    }

    /// Whether a value is stored.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.value.is_some()
    }

    /// Zero or one element.
    #[must_use]
    pub fn find_all(&self) -> Vec<T> {
        self.value.iter().cloned().collect()
    }

    /// Validate and store `value`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// `Validation` for a broken value, `Persistence`/`Serialization` if the
    /// document cannot be written.
    pub fn save(&mut self, value: T) -> Result<T> {
        value.validate()?;
        self.store.save(&value)?;
        self.value = Some(value.clone());
        Ok(value)
    }

    /// Same as [`save`](Self::save): the single value is overwritten.
    ///
    /// # Errors
    ///
    /// See [`save`](Self::save).
    pub fn update(&mut self, value: T) -> Result<()> {
        self.save(value).map(drop)
    }

    /// Drop the value and its document.
    ///
    /// # Errors
    ///
    /// `Persistence` if the document exists but cannot be removed.
    pub fn delete(&mut self) -> Result<()> {
        self.store.remove()?;
        self.value = None;
        Ok(())
    }
}

impl SingletonStore<GameMap> {
    /// A copy of the sector with `id`.
    #[must_use]
    pub fn find_sector(&self, id: &str) -> Option<Sector> {
        self.value.as_ref()?.sector(id).cloned()
    }

    /// Replace the sector that has the same id as `sector`.
    ///
    /// # Errors
    ///
    /// `NotFound` if no map is stored or it has no such sector; `Validation`
    /// if the resulting map is invalid; persistence errors as for
    /// [`save`](Self::save).
    pub fn update_sector(&mut self, sector: Sector) -> Result<()> {
        let not_found = || OrbitError::NotFound {
            kind: "sector",
            id: sector.id.clone(),
        };

        let mut map = self.value.clone().ok_or_else(not_found)?;
        let slot = map.sector_mut(&sector.id).ok_or_else(not_found)?;
        *slot = sector;
        self.save(map).map(drop)
    }
}
