//! Items: things a player can carry.
//!
//! An item's name is its identity: two items with the same (trimmed,
//! case-sensitive) name are the same entity regardless of type or description.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::ResourceType;
use crate::validation::require_non_blank;

/// Type tag given to items picked up from a space object's resources.
pub const RESOURCE_ITEM_TYPE: &str = "RESOURCE";

/// A collectable item.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    #[serde(rename = "type")]
    item_type: String,
    #[serde(default)]
    description: Option<String>,
}

impl Item {
    /// Create an item, trimming both fields.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the name or type is blank.
    pub fn new(name: &str, item_type: &str) -> Result<Self, ValidationError> {
        require_non_blank("name", name)?;
        require_non_blank("type", item_type)?;
        Ok(Self {
            name: name.trim().to_string(),
            item_type: item_type.trim().to_string(),
            description: None,
        })
    }

    /// The item produced by collecting `resource`: named after the resource,
    /// typed `RESOURCE`, described by its human-readable label.
    #[must_use]
    pub fn from_resource(resource: ResourceType) -> Self {
        Self {
            name: resource.name().to_string(),
            item_type: RESOURCE_ITEM_TYPE.to_string(),
            description: Some(resource.description().to_string()),
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.set_description(Some(description));
        self
    }

    /// Identity key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form category tag (`RESOURCE`, `TOOL`, ...).
    #[must_use]
    pub fn item_type(&self) -> &str {
        &self.item_type
    }

    /// Optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Rename the item.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `name` is blank; the item is unchanged.
    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        require_non_blank("name", name)?;
        self.name = name.trim().to_string();
        Ok(())
    }

    /// Change the category tag.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `item_type` is blank; the item is unchanged.
    pub fn set_item_type(&mut self, item_type: &str) -> Result<(), ValidationError> {
        require_non_blank("type", item_type)?;
        self.item_type = item_type.trim().to_string();
        Ok(())
    }

    /// Replace the description (trimmed), or clear it with `None`.
    pub fn set_description(&mut self, description: Option<&str>) {
        self.description = description.map(|d| d.trim().to_string());
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl std::hash::Hash for Item {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_trimmed() {
        let item = Item::new("  Space Map ", " TOOL ")
            .expect("item")
            .with_description("  Shows the way  ");
        assert_eq!(item.name(), "Space Map");
        assert_eq!(item.item_type(), "TOOL");
        assert_eq!(item.description(), Some("Shows the way"));
    }

    #[test]
    fn blank_name_or_type_is_rejected() {
        assert_eq!(Item::new(" ", "TOOL").unwrap_err().field, "name");
        assert_eq!(Item::new("Map", "").unwrap_err().field, "type");
    }

    #[test]
    fn failed_setter_leaves_item_untouched() {
        let mut item = Item::new("Fuel", "RESOURCE").expect("item");
        assert!(item.set_name("   ").is_err());
        assert!(item.set_item_type("").is_err());
        assert_eq!(item.name(), "Fuel");
        assert_eq!(item.item_type(), "RESOURCE");
    }

    #[test]
    fn identity_is_name_only() {
        let a = Item::new("Water", "RESOURCE").expect("item");
        let b = Item::new("Water", "TOOL").expect("item").with_description("odd");
        let c = Item::new("water", "RESOURCE").expect("item");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn resource_items() {
        let item = Item::from_resource(ResourceType::IronOxide);
        assert_eq!(item.name(), "IRON_OXIDE");
        assert_eq!(item.item_type(), RESOURCE_ITEM_TYPE);
        assert_eq!(item.description(), Some("Iron oxide"));
    }

    #[test]
    fn json_shape() {
        let item = Item::new("Fuel", "RESOURCE").expect("item");
        let json = serde_json::to_value(&item).expect("ser");
        assert_eq!(
            json,
            serde_json::json!({"name": "Fuel", "type": "RESOURCE", "description": null})
        );
    }
}
