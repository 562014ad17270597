//! Entity validators.
//!
//! Every rule lives here as a pure function. Model setters call the field
//! helpers, and repositories call [`Validate::validate`] again before anything
//! is written, so an entity that was deserialized or built field-by-field
//! still cannot reach the store in a broken state.

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::model::{GameMap, Item, Player};

/// Inclusive upper bound for player health.
pub const MAX_HEALTH: i32 = 100;

/// An entity that can check its own invariants.
pub trait Validate {
    /// Check every invariant, reporting the first violated field.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending field.
    fn validate(&self) -> Result<(), ValidationError>;
}

impl Validate for Player {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_player(self)
    }
}

impl Validate for Item {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_item(self)
    }
}

impl Validate for GameMap {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_game_map(self)
    }
}

// ---------------------------------------------------------------------------
// Field rules
// ---------------------------------------------------------------------------

/// Reject empty or whitespace-only text.
///
/// # Errors
///
/// Returns a [`ValidationError`] for `field` when `value` is blank.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "cannot be empty"));
    }
    Ok(())
}

/// Reject health outside `0..=MAX_HEALTH`.
///
/// # Errors
///
/// Returns a [`ValidationError`] on field `health`.
pub fn require_health(health: i32) -> Result<(), ValidationError> {
    if !(0..=MAX_HEALTH).contains(&health) {
        return Err(ValidationError::new(
            "health",
            format!("must be between 0 and {MAX_HEALTH}, got {health}"),
        ));
    }
    Ok(())
}

/// Reject a negative inventory capacity.
///
/// # Errors
///
/// Returns a [`ValidationError`] on field `inventorySize`.
pub fn require_inventory_size(size: i32) -> Result<(), ValidationError> {
    if size < 0 {
        return Err(ValidationError::new(
            "inventorySize",
            format!("cannot be negative, got {size}"),
        ));
    }
    Ok(())
}

/// Reject an inventory holding more items than its capacity.
///
/// # Errors
///
/// Returns a [`ValidationError`] on field `inventory`.
pub fn require_capacity(len: usize, capacity: usize) -> Result<(), ValidationError> {
    if len > capacity {
        return Err(ValidationError::new(
            "inventory",
            format!("holds {len} items but capacity is {capacity}"),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Entity rules
// ---------------------------------------------------------------------------

/// Player: credentials present, health in range, inventory within capacity.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_player(player: &Player) -> Result<(), ValidationError> {
    require_non_blank("username", player.username())?;
    require_non_blank("password", player.password_hash())?;
    require_health(player.health())?;
    require_inventory_size(player.stored_inventory_size())?;
    require_capacity(player.inventory().len(), player.inventory_size())?;
    for (i, item) in player.inventory().iter().enumerate() {
        validate_item(item)
            .map_err(|e| ValidationError::new(format!("inventory[{i}].{}", e.field), e.reason))?;
    }
    Ok(())
}

/// Item: name and type present.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_item(item: &Item) -> Result<(), ValidationError> {
    require_non_blank("name", item.name())?;
    require_non_blank("type", item.item_type())?;
    Ok(())
}

/// Game map: at least one sector, unique sector ids, named objects.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_game_map(map: &GameMap) -> Result<(), ValidationError> {
    if map.sectors().is_empty() {
        return Err(ValidationError::new("sectors", "map must contain at least one sector"));
    }

    let mut seen = HashSet::new();
    for (i, sector) in map.sectors().iter().enumerate() {
        if !seen.insert(sector.id.as_str()) {
            return Err(ValidationError::new(
                format!("sectors[{i}].id"),
                format!("duplicate sector id '{}'", sector.id),
            ));
        }
        for (j, object) in sector.objects.iter().enumerate() {
            require_non_blank(&format!("sectors[{i}].objects[{j}].name"), object.name())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Sector, SpaceObject};
    use crate::types::ObjectType;

    #[test]
    fn blank_text_is_rejected_with_field_name() {
        let err = require_non_blank("username", "   ").unwrap_err();
        assert_eq!(err.field, "username");
        assert!(require_non_blank("username", " a ").is_ok());
    }

    #[test]
    fn health_bounds_are_inclusive() {
        assert!(require_health(0).is_ok());
        assert!(require_health(100).is_ok());
        assert!(require_health(-1).is_err());
        assert!(require_health(101).is_err());
    }

    #[test]
    fn capacity_allows_full_inventory() {
        assert!(require_capacity(3, 3).is_ok());
        assert_eq!(require_capacity(4, 3).unwrap_err().field, "inventory");
    }

    #[test]
    fn negative_capacity_is_rejected() {
        assert!(require_inventory_size(0).is_ok());
        assert_eq!(require_inventory_size(-1).unwrap_err().field, "inventorySize");
    }

    #[test]
    fn empty_map_is_rejected() {
        let err = validate_game_map(&GameMap::default()).unwrap_err();
        assert_eq!(err.field, "sectors");
    }

    #[test]
    fn duplicate_sector_ids_are_rejected() {
        let map = GameMap::new(vec![
            Sector::new("alpha", "Alpha"),
            Sector::new("alpha", "Alpha Again"),
        ]);
        let err = validate_game_map(&map).unwrap_err();
        assert_eq!(err.field, "sectors[1].id");
    }

    #[test]
    fn map_with_named_objects_passes() {
        let mut sector = Sector::new("sol", "Sol");
        sector
            .objects
            .push(SpaceObject::new(ObjectType::Planet, "Mars").expect("object"));
        assert!(validate_game_map(&GameMap::new(vec![sector])).is_ok());
    }

    #[test]
    fn player_from_json_with_bad_health_fails_validation() {
        let player: Player = serde_json::from_str(
            r#"{"id":"p1","username":"bob","password":"h","health":150,"inventorySize":10,
                "currentSector":null,"currentPlanet":null,"inventory":[]}"#,
        )
        .expect("parse");
        assert_eq!(validate_player(&player).unwrap_err().field, "health");
    }

    #[test]
    fn player_with_overfull_inventory_fails_validation() {
        let player: Player = serde_json::from_str(
            r#"{"id":"p1","username":"bob","password":"h","health":50,"inventorySize":1,
                "inventory":[{"name":"A","type":"T","description":null},
                             {"name":"B","type":"T","description":null}]}"#,
        )
        .expect("parse");
        assert_eq!(validate_player(&player).unwrap_err().field, "inventory");
    }

    #[test]
    fn nested_item_error_names_its_position() {
        let player: Player = serde_json::from_str(
            r#"{"id":"p1","username":"bob","password":"h","health":50,"inventorySize":5,
                "inventory":[{"name":"A","type":" ","description":null}]}"#,
        )
        .expect("parse");
        assert_eq!(validate_player(&player).unwrap_err().field, "inventory[0].type");
    }
}
