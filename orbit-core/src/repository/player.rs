//! Player repository, keyed by generated [`PlayerId`].

use std::path::Path;

use tracing::debug;

use crate::error::{OrbitError, Result, ValidationError};
use crate::model::Player;
use crate::repository::Repository;
use crate::store::JsonStore;
use crate::types::PlayerId;
use crate::validation::Validate;

/// All registered players, mirrored from a JSON array on disk.
#[derive(Debug)]
pub struct PlayerRepository {
    store: JsonStore,
    players: Vec<Player>,
}

impl PlayerRepository {
    /// Open the repository at `path`. A missing or corrupt file starts empty.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::with_store(JsonStore::new(path))
    }

    /// Open the repository on an already configured store.
    #[must_use]
    pub fn with_store(store: JsonStore) -> Self {
        let players: Vec<Player> = store.load_or_default();
        debug!(path = %store.path().display(), count = players.len(), "Player repository opened");
        Self { store, players }
    }

    /// First player whose username matches exactly (case-sensitive).
    #[must_use]
    pub fn find_by_username(&self, username: &str) -> Option<Player> {
        self.players
            .iter()
            .find(|p| p.username() == username)
            .cloned()
    }

    /// Players with at least `min_health` health.
    #[must_use]
    pub fn find_by_min_health(&self, min_health: i32) -> Vec<Player> {
        self.filter_by(|p| p.health() >= min_health)
    }

    /// Players currently in sector `sector_id`.
    #[must_use]
    pub fn find_in_sector(&self, sector_id: &str) -> Vec<Player> {
        self.filter_by(|p| p.current_sector() == Some(sector_id))
    }

    fn filter_by(&self, predicate: impl Fn(&Player) -> bool) -> Vec<Player> {
        self.players.iter().filter(|p| predicate(p)).cloned().collect()
    }

    /// Reject `username` if a player other than `owner` already holds it.
    fn ensure_username_free(&self, username: &str, owner: Option<&PlayerId>) -> Result<()> {
        let taken = self
            .players
            .iter()
            .any(|p| p.username() == username && (owner.is_none() || p.id() != owner));
        if taken {
            return Err(OrbitError::DuplicateUsername(username.to_string()));
        }
        Ok(())
    }

    fn position(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id() == Some(id))
    }

    /// Persist `next`, then adopt it as the in-memory mirror. On failure the
    /// mirror keeps matching what is on disk.
    fn commit(&mut self, next: Vec<Player>) -> Result<()> {
        self.store.save(&next)?;
        self.players = next;
        Ok(())
    }
}

impl Repository<Player, PlayerId> for PlayerRepository {
    fn save(&mut self, mut player: Player) -> Result<Player> {
        player.validate()?;
        if player.id().is_none_or(PlayerId::is_blank) {
            player.assign_id(PlayerId::generate());
        }
        self.ensure_username_free(player.username(), player.id())?;

        let mut next = self.players.clone();
        next.push(player.clone());
        self.commit(next)?;

        debug!(username = player.username(), count = self.players.len(), "Saved player");
        Ok(player)
    }

    fn find_by_id(&self, id: &PlayerId) -> Option<Player> {
        self.position(id).map(|i| self.players[i].clone())
    }

    fn find_all(&self) -> Vec<Player> {
        self.players.clone()
    }

    fn update(&mut self, id: &PlayerId, mut player: Player) -> Result<()> {
        player.validate()?;
        match player.id().cloned() {
            None => player.assign_id(id.clone()),
            Some(own) if &own != id => {
                return Err(ValidationError::new(
                    "id",
                    format!("player identifiers are immutable ({own} != {id})"),
                )
                .into());
            }
            Some(_) => {}
        }

        let index = self.position(id).ok_or_else(|| OrbitError::NotFound {
            kind: "player",
            id: id.to_string(),
        })?;
        self.ensure_username_free(player.username(), Some(id))?;

        let mut next = self.players.clone();
        next[index] = player;
        self.commit(next)
    }

    fn delete(&mut self, id: &PlayerId) -> Result<()> {
        if !self.exists(id) {
            return Ok(());
        }
        let next = self
            .players
            .iter()
            .filter(|p| p.id() != Some(id))
            .cloned()
            .collect();
        self.commit(next)
    }

    fn exists(&self, id: &PlayerId) -> bool {
        self.position(id).is_some()
    }

    fn count(&self) -> usize {
        self.players.len()
    }
}
