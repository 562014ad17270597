//! Everything the game needs from disk, opened in one call.

use std::path::Path;

use tracing::info;

use crate::auth::AuthService;
use crate::config::OrbitConfig;
use crate::error::Result;
use crate::repository::{GameMapStore, ItemRepository, PlayerRepository, Repository};
use crate::store::JsonStore;

/// Accounts, item catalogue and game map, opened from the configured paths.
#[derive(Debug)]
pub struct GameData {
    /// Player accounts and progress.
    pub auth: AuthService,
    /// Item catalogue (seeded on first run).
    pub items: ItemRepository,
    /// The galaxy map.
    pub map: GameMapStore,
}

impl GameData {
    /// Open all three documents described by `config.storage`.
    ///
    /// # Errors
    ///
    /// [`OrbitError::Config`](crate::OrbitError::Config) for bad `[auth]`
    /// parameters, or a persistence error if the default item catalogue
    /// cannot be written.
    pub fn open(config: &OrbitConfig) -> Result<Self> {
        let storage = &config.storage;
        let store = |path: &Path| JsonStore::new(path).pretty(storage.pretty_json);

        let players = PlayerRepository::with_store(store(&storage.players_path));
        let auth = AuthService::from_config(players, &config.auth)?;
        let items = ItemRepository::with_store(store(&storage.items_path))?;
        let map = GameMapStore::with_store(store(&storage.game_map_path));

        info!(
            players = auth.players().count(),
            items = items.count(),
            has_map = map.exists(),
            "Game data opened"
        );
        Ok(Self { auth, items, map })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_directory_bootstraps() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = OrbitConfig::default().with_data_dir(dir.path());

        let data = GameData::open(&config).expect("open");
        assert_eq!(data.auth.players().count(), 0);
        assert_eq!(data.items.count(), 5);
        assert!(!data.map.exists());
    }

    #[test]
    fn compact_json_setting_reaches_the_stores() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut config = OrbitConfig::default().with_data_dir(dir.path());
        config.storage.pretty_json = false;

        GameData::open(&config).expect("open");
        let raw = std::fs::read_to_string(dir.path().join("items.json")).expect("read");
        assert!(!raw.contains('\n'));
    }

    #[test]
    fn invalid_auth_config_fails_to_open() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut config = OrbitConfig::default().with_data_dir(dir.path());
        config.auth.salt.clear();
        assert!(GameData::open(&config).is_err());
    }
}
