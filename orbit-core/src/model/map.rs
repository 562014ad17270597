//! The static game map: sectors and the space objects inside them.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::{ObjectType, ResourceType};
use crate::validation::require_non_blank;

/// The whole explorable universe, stored as one JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMap {
    #[serde(default)]
    sectors: Vec<Sector>,
}

impl GameMap {
    /// Build a map from its sectors.
    #[must_use]
    pub fn new(sectors: Vec<Sector>) -> Self {
        Self { sectors }
    }

    /// Sectors in display order.
    #[must_use]
    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    /// Append a sector.
    pub fn add_sector(&mut self, sector: Sector) {
        self.sectors.push(sector);
    }

    /// Remove the sector with `id`, returning it.
    pub fn remove_sector(&mut self, id: &str) -> Option<Sector> {
        let pos = self.sectors.iter().position(|s| s.id == id)?;
        Some(self.sectors.remove(pos))
    }

    /// Look up a sector by id.
    #[must_use]
    pub fn sector(&self, id: &str) -> Option<&Sector> {
        self.sectors.iter().find(|s| s.id == id)
    }

    pub(crate) fn sector_mut(&mut self, id: &str) -> Option<&mut Sector> {
        self.sectors.iter_mut().find(|s| s.id == id)
    }

    /// Resolve a player position (`sector id`, `object name`) to the object
    /// standing there.
    #[must_use]
    pub fn locate(&self, sector_id: &str, object_name: &str) -> Option<&SpaceObject> {
        self.sector(sector_id)?.object(object_name)
    }
}

/// A region of space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    /// Unique within a map.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Objects in display order.
    #[serde(default)]
    pub objects: Vec<SpaceObject>,
}

impl Sector {
    /// Create an empty sector.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            objects: Vec::new(),
        }
    }

    /// Add an object, builder style.
    #[must_use]
    pub fn with_object(mut self, object: SpaceObject) -> Self {
        self.objects.push(object);
        self
    }

    /// Look up an object by name.
    #[must_use]
    pub fn object(&self, name: &str) -> Option<&SpaceObject> {
        self.objects.iter().find(|o| o.name == name)
    }
}

/// A planet, asteroid or station. Identity is `(type, name)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceObject {
    #[serde(rename = "type")]
    object_type: ObjectType,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    resources: Vec<ResourceType>,
    #[serde(default)]
    facts: Vec<String>,
}

impl SpaceObject {
    /// Create an object with no description, resources or facts.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `name` is blank.
    pub fn new(object_type: ObjectType, name: &str) -> Result<Self, ValidationError> {
        require_non_blank("name", name)?;
        Ok(Self {
            object_type,
            name: name.trim().to_string(),
            description: None,
            resources: Vec::new(),
            facts: Vec::new(),
        })
    }

    /// Attach a description (trimmed).
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.trim().to_string());
        self
    }

    /// Set the collectable resources.
    #[must_use]
    pub fn with_resources(mut self, resources: impl IntoIterator<Item = ResourceType>) -> Self {
        self.resources = resources.into_iter().collect();
        self
    }

    /// Add a trivia line.
    #[must_use]
    pub fn with_fact(mut self, fact: impl Into<String>) -> Self {
        self.facts.push(fact.into());
        self
    }

    /// Planet, asteroid or station.
    #[must_use]
    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Flavour text.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Collectable resources.
    #[must_use]
    pub fn resources(&self) -> &[ResourceType] {
        &self.resources
    }

    /// Trivia lines.
    #[must_use]
    pub fn facts(&self) -> &[String] {
        &self.facts
    }

    /// Whether `resource` can be collected here.
    #[must_use]
    pub fn offers(&self, resource: ResourceType) -> bool {
        self.resources.contains(&resource)
    }
}

impl PartialEq for SpaceObject {
    fn eq(&self, other: &Self) -> bool {
        self.object_type == other.object_type && self.name == other.name
    }
}

impl Eq for SpaceObject {}
