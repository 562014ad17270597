//! Fixtures shared by the Orbit benchmarks.

use orbit_core::model::{GameMap, Player, Sector, SpaceObject};
use orbit_core::types::{ObjectType, ResourceType};
use orbit_core::Item;

/// A map with `sectors` sectors of three objects each.
///
/// # Panics
///
/// Never in practice: every generated object name is non-blank.
#[must_use]
pub fn sample_map(sectors: usize) -> GameMap {
    let kinds = [ObjectType::Planet, ObjectType::Asteroid, ObjectType::SpaceStation];
    GameMap::new(
        (0..sectors)
            .map(|s| {
                kinds.iter().enumerate().fold(
                    Sector::new(format!("sector-{s}"), format!("Sector {s}")),
                    |sector, (o, kind)| {
                        let resources = ResourceType::ALL.iter().copied().skip(o * 3).take(3);
                        let object = SpaceObject::new(*kind, &format!("Object {s}-{o}"))
                            .expect("non-blank name")
                            .with_resources(resources)
                            .with_fact("Generated for benchmarking");
                        sector.with_object(object)
                    },
                )
            })
            .collect(),
    )
}

/// A player carrying `items` resource items (capacity grows to fit).
///
/// # Panics
///
/// Never in practice: the capacity is raised before items are added.
#[must_use]
pub fn sample_player(name: &str, items: usize) -> Player {
    let mut player = Player::new(name, "0f1e2d3c4b5a69788796a5b4c3d2e1f0").expect("valid player");
    player
        .set_inventory_size(items.max(10))
        .expect("empty inventory fits any size");
    for i in 0..items {
        let resource = ResourceType::ALL[i % ResourceType::ALL.len()];
        player
            .add_item(Item::from_resource(resource))
            .expect("capacity raised above");
    }
    player
}
