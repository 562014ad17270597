//! Item catalogue, keyed by item name.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{OrbitError, Result};
use crate::model::Item;
use crate::repository::Repository;
use crate::store::JsonStore;
use crate::validation::Validate;

/// `(name, type)` pairs seeded into a fresh catalogue.
pub const DEFAULT_ITEMS: [(&str, &str); 5] = [
    ("Water", "RESOURCE"),
    ("Minerals", "RESOURCE"),
    ("Fuel", "RESOURCE"),
    ("Ancient Artifact", "ARTIFACT"),
    ("Space Map", "TOOL"),
];

/// Every known item, mirrored from a JSON array on disk.
///
/// Names are the lookup key but are not forced unique: saving a second item
/// with an existing name appends it, and [`Repository::delete`] removes all
/// records with that name.
#[derive(Debug)]
pub struct ItemRepository {
    store: JsonStore,
    items: Vec<Item>,
}

impl ItemRepository {
    /// Open the catalogue at `path`, seeding [`DEFAULT_ITEMS`] if the file is
    /// missing or unreadable.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the seeded catalogue cannot be written.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_store(JsonStore::new(path))
    }

    /// Open the catalogue on an already configured store.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the seeded catalogue cannot be written.
    pub fn with_store(store: JsonStore) -> Result<Self> {
        if let Some(items) = store.load::<Vec<Item>>() {
            debug!(path = %store.path().display(), count = items.len(), "Item repository opened");
            return Ok(Self { store, items });
        }

        let items = default_items()?;
        store.save(&items)?;
        info!(path = %store.path().display(), count = items.len(), "Seeded default items");
        Ok(Self { store, items })
    }

    /// Every item whose type equals `item_type` (exact match, duplicates kept).
    #[must_use]
    pub fn find_by_type(&self, item_type: &str) -> Vec<Item> {
        self.items
            .iter()
            .filter(|i| i.item_type() == item_type)
            .cloned()
            .collect()
    }

    fn commit(&mut self, next: Vec<Item>) -> Result<()> {
        self.store.save(&next)?;
        self.items = next;
        Ok(())
    }
}

fn default_items() -> Result<Vec<Item>> {
    DEFAULT_ITEMS
        .iter()
        .map(|(name, item_type)| Item::new(name, item_type).map_err(OrbitError::from))
        .collect()
}

impl Repository<Item, str> for ItemRepository {
    fn save(&mut self, item: Item) -> Result<Item> {
        item.validate()?;
        let mut next = self.items.clone();
        next.push(item.clone());
        self.commit(next)?;
        debug!(name = item.name(), count = self.items.len(), "Saved item");
        Ok(item)
    }

    fn find_by_id(&self, name: &str) -> Option<Item> {
        self.items.iter().find(|i| i.name() == name).cloned()
    }

    fn find_all(&self) -> Vec<Item> {
        self.items.clone()
    }

    fn update(&mut self, name: &str, item: Item) -> Result<()> {
        item.validate()?;
        let index = self
            .items
            .iter()
            .position(|i| i.name() == name)
            .ok_or_else(|| OrbitError::NotFound {
                kind: "item",
                id: name.to_string(),
            })?;

        let mut next = self.items.clone();
        next[index] = item;
        self.commit(next)
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        if !self.exists(name) {
            return Ok(());
        }
        let next = self
            .items
            .iter()
            .filter(|i| i.name() != name)
            .cloned()
            .collect();
        self.commit(next)
    }

    fn exists(&self, name: &str) -> bool {
        self.items.iter().any(|i| i.name() == name)
    }

    fn count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(dir: &tempfile::TempDir) -> ItemRepository {
        ItemRepository::open(dir.path().join("items.json")).expect("open")
    }

    #[test]
    fn missing_file_seeds_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let items = repo(&dir);

        assert_eq!(items.count(), 5);
        assert_eq!(items.find_by_type("RESOURCE").len(), 3);
        assert_eq!(items.find_by_type("ARTIFACT").len(), 1);
        assert_eq!(items.find_by_type("TOOL").len(), 1);
        assert!(dir.path().join("items.json").exists());
    }

    #[test]
    fn corrupt_file_seeds_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("items.json"), "not json").expect("write");
        assert_eq!(repo(&dir).count(), 5);
    }

    #[test]
    fn existing_empty_catalogue_is_respected() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("items.json"), "[]").expect("write");
        assert_eq!(repo(&dir).count(), 0);
    }

    #[test]
    fn seeding_does_not_repeat_on_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut items = repo(&dir);
        items.delete("Fuel").expect("delete");
        assert_eq!(repo(&dir).count(), 4);
    }

    #[test]
    fn crud_cycle() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut items = repo(&dir);

        let mut item = items
            .save(Item::new("Test Item", "RESOURCE").expect("item"))
            .expect("save");
        assert!(items.exists("Test Item"));
        assert_eq!(items.find_by_id("Test Item").expect("found").item_type(), "RESOURCE");

        item.set_item_type("ARTIFACT").expect("type");
        items.update("Test Item", item).expect("update");
        assert_eq!(repo(&dir).find_by_id("Test Item").expect("found").item_type(), "ARTIFACT");

        items.delete("Test Item").expect("delete");
        assert!(!items.exists("Test Item"));
    }

    #[test]
    fn find_by_type_keeps_duplicates() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut items = repo(&dir);
        items.save(Item::new("Water", "RESOURCE").expect("item")).expect("save");
        items.save(Item::new("Map", "TOOL").expect("item")).expect("save");

        let resources = items.find_by_type("RESOURCE");
        assert_eq!(resources.len(), 4);
        assert!(resources.iter().all(|i| i.item_type() == "RESOURCE"));
        assert!(items.find_by_type("resource").is_empty());
    }

    #[test]
    fn delete_removes_every_record_with_that_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut items = repo(&dir);
        items.save(Item::new("Water", "TOOL").expect("item")).expect("save");
        items.delete("Water").expect("delete");
        assert!(!items.exists("Water"));
        assert_eq!(items.count(), 4);
    }

    #[test]
    fn delete_missing_is_noop() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut items = repo(&dir);
        let before = items.find_all();
        items.delete("Nothing Here").expect("noop");
        assert_eq!(items.count(), before.len());
    }

    #[test]
    fn update_missing_item_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut items = repo(&dir);
        let err = items
            .update("Ghost", Item::new("Ghost", "TOOL").expect("item"))
            .unwrap_err();
        assert!(matches!(err, OrbitError::NotFound { kind: "item", .. }));
    }

    #[test]
    fn invalid_item_from_json_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut items = repo(&dir);
        let bad: Item =
            serde_json::from_str(r#"{"name":"","type":"TOOL","description":null}"#).expect("parse");
        let err = items.save(bad).unwrap_err();
        assert!(matches!(err, OrbitError::Validation(ref v) if v.field == "name"));
        assert_eq!(items.count(), 5);
    }

    #[test]
    fn seeding_failure_is_surfaced() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "file").expect("write");
        let err = ItemRepository::open(blocker.join("items.json")).unwrap_err();
        assert!(matches!(err, OrbitError::Persistence { .. }));
    }
}
