//! Player accounts and their carried state.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::Item;
use crate::types::PlayerId;
use crate::validation::{
    MAX_HEALTH, require_capacity, require_health, require_inventory_size, require_non_blank,
};

/// Inventory slots a fresh player starts with.
pub const DEFAULT_INVENTORY_SIZE: usize = 10;

/// A registered player.
///
/// The password field only ever holds a credential digest; plaintext never
/// reaches this type. Fields are private so the setters can keep the
/// inventory-capacity and health invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(default)]
    id: Option<PlayerId>,
    username: String,
    password: String,
    #[serde(default = "default_health")]
    health: i32,
    // Signed on disk: older saves may hold a negative capacity, which must
    // fail validation for that record instead of failing the whole file.
    #[serde(default = "default_inventory_size")]
    inventory_size: i32,
    #[serde(default)]
    current_sector: Option<String>,
    #[serde(default, rename = "currentPlanet")]
    current_location: Option<String>,
    #[serde(default)]
    inventory: Vec<Item>,
}

fn default_health() -> i32 {
    MAX_HEALTH
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn default_inventory_size() -> i32 {
    DEFAULT_INVENTORY_SIZE as i32
}

impl Player {
    /// Create a player with full health, default capacity and no identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the username or digest is blank.
    pub fn new(username: &str, password_hash: &str) -> Result<Self, ValidationError> {
        require_non_blank("username", username)?;
        require_non_blank("password", password_hash)?;
        Ok(Self {
            id: None,
            username: username.to_string(),
            password: password_hash.to_string(),
            health: MAX_HEALTH,
            inventory_size: default_inventory_size(),
            current_sector: None,
            current_location: None,
            inventory: Vec::new(),
        })
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Identifier, once the player has been saved.
    #[must_use]
    pub fn id(&self) -> Option<&PlayerId> {
        self.id.as_ref()
    }

    /// Login name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Stored credential digest.
    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password
    }

    /// Current health, `0..=100`.
    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Inventory capacity. A negative stored capacity reads as zero.
    #[must_use]
    pub fn inventory_size(&self) -> usize {
        usize::try_from(self.inventory_size).unwrap_or(0)
    }

    /// Capacity exactly as stored, possibly negative in a hand-edited file.
    pub(crate) fn stored_inventory_size(&self) -> i32 {
        self.inventory_size
    }

    /// Id of the sector the player is in.
    #[must_use]
    pub fn current_sector(&self) -> Option<&str> {
        self.current_sector.as_deref()
    }

    /// Name of the space object the player is at.
    #[must_use]
    pub fn current_location(&self) -> Option<&str> {
        self.current_location.as_deref()
    }

    /// Carried items, in pickup order.
    #[must_use]
    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    /// Whether another item would exceed capacity.
    #[must_use]
    pub fn is_inventory_full(&self) -> bool {
        self.inventory.len() >= self.inventory_size()
    }

    /// Remaining inventory slots.
    #[must_use]
    pub fn free_slots(&self) -> usize {
        self.inventory_size().saturating_sub(self.inventory.len())
    }

    // ------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------

    pub(crate) fn assign_id(&mut self, id: PlayerId) {
        self.id = Some(id);
    }

    /// Change the login name.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `username` is blank.
    pub fn set_username(&mut self, username: &str) -> Result<(), ValidationError> {
        require_non_blank("username", username)?;
        self.username = username.to_string();
        Ok(())
    }

    /// Replace the stored credential digest.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `password_hash` is blank.
    pub fn set_password_hash(&mut self, password_hash: &str) -> Result<(), ValidationError> {
        require_non_blank("password", password_hash)?;
        self.password = password_hash.to_string();
        Ok(())
    }

    /// Set health.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `health` is outside `0..=100`.
    pub fn set_health(&mut self, health: i32) -> Result<(), ValidationError> {
        require_health(health)?;
        self.health = health;
        Ok(())
    }

    /// Resize the inventory.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the player already carries more
    /// than `size` items, or if `size` does not fit the stored format.
    /// Items are never dropped to fit.
    pub fn set_inventory_size(&mut self, size: usize) -> Result<(), ValidationError> {
        let stored = i32::try_from(size)
            .map_err(|_| ValidationError::new("inventorySize", format!("{size} is too large")))?;
        require_inventory_size(stored)?;
        require_capacity(self.inventory.len(), size)?;
        self.inventory_size = stored;
        Ok(())
    }

    /// Put an item in the inventory.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] on field `inventory` when full; the
    /// inventory is left as it was.
    pub fn add_item(&mut self, item: Item) -> Result<(), ValidationError> {
        if self.is_inventory_full() {
            return Err(ValidationError::new(
                "inventory",
                format!("inventory is full ({} items)", self.inventory_size),
            ));
        }
        self.inventory.push(item);
        Ok(())
    }

    /// Remove the first carried item called `name`.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        let pos = self.inventory.iter().position(|i| i.name() == name)?;
        Some(self.inventory.remove(pos))
    }

    /// Move to `object_name` inside `sector_id`.
    pub fn travel_to(&mut self, sector_id: &str, object_name: &str) {
        self.current_sector = Some(sector_id.to_string());
        self.current_location = Some(object_name.to_string());
    }

    /// Forget the current position.
    pub fn clear_location(&mut self) {
        self.current_sector = None;
        self.current_location = None;
    }
}
