//! Configuration for the Orbit persistence core.
//!
//! Maps directly to `orbit.toml`. Every field has a default, so an empty file
//! (or no file at all) yields a working setup that stores data under `data/`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level Orbit configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrbitConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Where the JSON documents live and how they are written.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Credential hashing and password policy.
    #[serde(default)]
    pub auth: AuthConfig,
}

impl OrbitConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `OrbitError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::OrbitError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Point every storage path at a file inside `dir`, keeping the default
    /// file names. Handy for tests and per-profile save folders.
    #[must_use]
    pub fn with_data_dir(mut self, dir: &std::path::Path) -> Self {
        self.storage.players_path = dir.join("players.json");
        self.storage.items_path = dir.join("items.json");
        self.storage.game_map_path = dir.join("game_map.json");
        self
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General system settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// On-disk locations of the three persisted documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON array of players.
    #[serde(default = "default_players_path")]
    pub players_path: PathBuf,
    /// JSON array of items.
    #[serde(default = "default_items_path")]
    pub items_path: PathBuf,
    /// JSON object holding the single game map.
    #[serde(default = "default_game_map_path")]
    pub game_map_path: PathBuf,
    /// Write indented JSON (easier to hand-edit) instead of compact JSON.
    #[serde(default = "default_true")]
    pub pretty_json: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            players_path: default_players_path(),
            items_path: default_items_path(),
            game_map_path: default_game_map_path(),
            pretty_json: true,
        }
    }
}

/// Credential hashing parameters and password policy.
///
/// The salt is shared by every account. That is a known weakness of the save
/// format; it is configurable so it can at least be rotated per deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Application-wide PBKDF2 salt.
    #[serde(default = "default_salt")]
    pub salt: String,
    /// PBKDF2 iteration count.
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// Derived key length in bytes.
    #[serde(default = "default_key_length")]
    pub key_length: usize,
    /// Minimum accepted password length, in characters.
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            salt: default_salt(),
            iterations: default_iterations(),
            key_length: default_key_length(),
            min_password_length: default_min_password_length(),
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_true() -> bool { true }
fn default_log_level() -> String { "info".to_string() }
fn default_players_path() -> PathBuf { PathBuf::from("data/players.json") }
fn default_items_path() -> PathBuf { PathBuf::from("data/items.json") }
fn default_game_map_path() -> PathBuf { PathBuf::from("data/game_map.json") }
fn default_salt() -> String { "orbit-static-salt".to_string() }
fn default_iterations() -> u32 { 10_000 }
fn default_key_length() -> usize { 32 }
fn default_min_password_length() -> usize { 6 }
