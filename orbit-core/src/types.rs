//! Identifiers and closed enumerations shared by the data model.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Identity Types
// ---------------------------------------------------------------------------

/// Opaque player identifier, stored as a plain JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a new random player ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Space objects
// ---------------------------------------------------------------------------

/// Kind of celestial body or structure found in a sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectType {
    /// A major body orbiting a star.
    Planet,
    /// A small rocky body.
    Asteroid,
    /// An artificial structure; a hub for travellers.
    SpaceStation,
}

impl ObjectType {
    /// Human-readable label.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Planet => "Planet",
            Self::Asteroid => "Asteroid",
            Self::SpaceStation => "Space Station",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// Resource that can be collected from a space object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    /// Metallic ore from rocky planets and asteroids.
    Iron,
    /// Ore common in asteroids and planetary crusts.
    Nickel,
    /// Ore used in advanced construction.
    Titanium,
    /// Atmospheric gas used for terraforming.
    CarbonDioxide,
    /// Volcanic mineral.
    Sulfur,
    /// Buffer gas for breathable atmospheres.
    Nitrogen,
    /// Life support.
    Oxygen,
    /// Propulsion fuel.
    Hydrogen,
    /// Rare gas for scientific equipment.
    Helium,
    /// Hydrocarbon from gas giant atmospheres.
    Methane,
    /// Liquid water.
    Water,
    /// Mixed mineral deposits.
    Minerals,
    /// Rust-red compound of Mars-like worlds.
    IronOxide,
    /// Generic frozen volatiles.
    Ice,
    /// Frozen water from polar caps and comets.
    WaterIce,
    /// Chemical compound.
    Ammonia,
}

impl ResourceType {
    /// Every resource, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::Iron,
        Self::Nickel,
        Self::Titanium,
        Self::CarbonDioxide,
        Self::Sulfur,
        Self::Nitrogen,
        Self::Oxygen,
        Self::Hydrogen,
        Self::Helium,
        Self::Methane,
        Self::Water,
        Self::Minerals,
        Self::IronOxide,
        Self::Ice,
        Self::WaterIce,
        Self::Ammonia,
    ];

    /// Fixed human-readable description.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Iron => "Iron ore",
            Self::Nickel => "Nickel ore",
            Self::Titanium => "Titanium ore",
            Self::CarbonDioxide => "Carbon dioxide",
            Self::Sulfur => "Sulfur",
            Self::Nitrogen => "Nitrogen",
            Self::Oxygen => "Oxygen",
            Self::Hydrogen => "Hydrogen",
            Self::Helium => "Helium",
            Self::Methane => "Methane",
            Self::Water => "Water",
            Self::Minerals => "Mixed minerals",
            Self::IronOxide => "Iron oxide",
            Self::Ice => "Regular ice",
            Self::WaterIce => "Water ice",
            Self::Ammonia => "Ammonia",
        }
    }

    /// Stored enum name, as it appears in the JSON documents (`WATER_ICE`).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Iron => "IRON",
            Self::Nickel => "NICKEL",
            Self::Titanium => "TITANIUM",
            Self::CarbonDioxide => "CARBON_DIOXIDE",
            Self::Sulfur => "SULFUR",
            Self::Nitrogen => "NITROGEN",
            Self::Oxygen => "OXYGEN",
            Self::Hydrogen => "HYDROGEN",
            Self::Helium => "HELIUM",
            Self::Methane => "METHANE",
            Self::Water => "WATER",
            Self::Minerals => "MINERALS",
            Self::IronOxide => "IRON_OXIDE",
            Self::Ice => "ICE",
            Self::WaterIce => "WATER_ICE",
            Self::Ammonia => "AMMONIA",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_and_non_blank() {
        let a = PlayerId::generate();
        let b = PlayerId::generate();
        assert_ne!(a, b);
        assert!(!a.is_blank());
        assert!(PlayerId::from("  ").is_blank());
    }

    #[test]
    fn player_id_serializes_as_plain_string() {
        let id = PlayerId::from("abc-123");
        assert_eq!(serde_json::to_string(&id).expect("ser"), "\"abc-123\"");
    }

    #[test]
    fn resource_names_match_serde_representation() {
        for resource in ResourceType::ALL {
            let json = serde_json::to_string(&resource).expect("ser");
            assert_eq!(json, format!("\"{}\"", resource.name()));
        }
    }

    #[test]
    fn object_type_uses_upper_snake_case() {
        let json = serde_json::to_string(&ObjectType::SpaceStation).expect("ser");
        assert_eq!(json, "\"SPACE_STATION\"");
        assert_eq!(ObjectType::SpaceStation.to_string(), "Space Station");
    }

    #[test]
    fn resource_descriptions() {
        assert_eq!(ResourceType::Iron.description(), "Iron ore");
        assert_eq!(ResourceType::WaterIce.description(), "Water ice");
        assert_eq!(ResourceType::Minerals.to_string(), "Mixed minerals");
    }
}
