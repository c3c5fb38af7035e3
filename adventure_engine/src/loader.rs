//! Loader for the built-in game world.
//!
//! The world is a fixed set of three rooms. It's assembled here from constructors,
//! then validated so broken references surface at startup instead of mid-game.

use crate::{AdventureWorld, Enemy, Id, Item, Location, Place, WorldObject};

use anyhow::{Context, Result, bail};
use log::info;
use std::collections::HashSet;

/// Place the player starts in.
pub const START_PLACE: &str = "room1";

/// Build and validate the `AdventureWorld`.
///
/// # Errors
/// - if the world definition refers to places or items that don't exist
pub fn load_world() -> Result<AdventureWorld> {
    let mut world = AdventureWorld::new_empty();
    build_places(&mut world).context("while building places")?;
    place_items(&mut world).context("while placing items")?;
    place_enemies(&mut world).context("while placing enemies")?;
    info!("{} places added to AdventureWorld", world.places.len());
    info!("{} items added to AdventureWorld", world.items.len());
    info!("{} enemies added to AdventureWorld", world.enemies.len());

    world.player.location = Location::Place(START_PLACE.to_string());
    info!("player \"{}\" added to AdventureWorld at {START_PLACE}", world.player.name());

    validate_world(&world)?;
    Ok(world)
}

fn build_places(world: &mut AdventureWorld) -> Result<()> {
    world.add_place(Place::new("room1", "room1", "a dark room", None));
    world.add_place(Place::new("room2", "room2", "a mysterious room", Some("key".into())));
    world.add_place(Place::new(
        "room3",
        "room3",
        "a room with portals to either room1 or room2",
        Some("key".into()),
    ));

    world.connect("room1", "room2")?;
    world.connect("room2", "room1")?;
    world.connect("room2", "room3")?;
    world.connect("room3", "room1")?;
    world.connect("room3", "room2")?;
    Ok(())
}

fn place_items(world: &mut AdventureWorld) -> Result<()> {
    world.place_item("room1", Item::weapon("sword", "sword", "a sharp weapon", 10))?;
    world.place_item("room1", Item::locked_weapon("axe", "axe", "a heavy weapon", 15))?;
    world.place_item("room1", Item::key("key", "key", "a small key"))?;

    world.place_item("room2", Item::key("fake_key", "key", "might be for the exit"))?;
    world.place_item(
        "room2",
        Item::health_pack("health_crate", "healthCrate", "a big crate that restores health", 50),
    )?;

    // not placed anywhere; reachable through `:spawn`
    world.stash_item(Item::health_pack(
        "health_potion",
        "healthPotion",
        "a small potion that restores health",
        15,
    ));
    world.stash_item(Item::health_pack(
        "health_elixir",
        "healthElixir",
        "a pretty big jug of elixir juice that restores health",
        35,
    ));
    Ok(())
}

fn place_enemies(world: &mut AdventureWorld) -> Result<()> {
    world.place_enemy("room1", Enemy::new("goblin", "goblin", "an angry goblin", 50, 15, "axe"))?;
    world.place_enemy(
        "room2",
        Enemy::new(
            "skeleton_knight",
            "skeletonKnight",
            "a fearsome skeleton knight",
            100,
            10,
            "key",
        ),
    )?;
    Ok(())
}

/// Check that every id the world refers to resolves, and that item names don't collide
/// within a place. All problems are reported together.
///
/// # Errors
/// - one aggregated error listing every problem found
pub fn validate_world(world: &AdventureWorld) -> Result<()> {
    let mut errors = Vec::new();

    for place in world.places.values() {
        if let Some(key_id) = &place.required_key
            && !world.items.contains_key(key_id)
        {
            errors.push(format!("place '{}' requires unknown key '{key_id}'", place.id));
        }
        for exit in &place.exits {
            if !world.places.contains_key(exit) {
                errors.push(format!("place '{}' has exit to unknown place '{exit}'", place.id));
            }
        }
        let mut seen: HashSet<&str> = HashSet::new();
        for item_id in &place.items {
            match world.items.get(item_id) {
                Some(item) if !seen.insert(item.name.as_str()) => {
                    errors.push(format!("place '{}' holds two items named '{}'", place.id, item.name));
                },
                Some(_) => {},
                None => errors.push(format!("place '{}' holds unknown item '{item_id}'", place.id)),
            }
        }
        for enemy_id in &place.enemies {
            if !world.enemies.contains_key(enemy_id) {
                errors.push(format!("place '{}' holds unknown enemy '{enemy_id}'", place.id));
            }
        }
    }

    for enemy in world.enemies.values() {
        if !world.items.contains_key(&enemy.drop) {
            errors.push(format!("enemy '{}' drops unknown item '{}'", enemy.id, enemy.drop));
        }
    }

    match world.player_place_id() {
        Ok(id) if world.places.contains_key(id) => {},
        Ok(id) => errors.push(format!("player starts in unknown place '{id}'")),
        Err(e) => errors.push(e.to_string()),
    }

    if errors.is_empty() {
        return Ok(());
    }
    errors.sort();
    bail!("world failed validation:\n  {}", errors.join("\n  "))
}

/// Ids of every item in the world, sorted. Used for completions and dev commands.
pub fn item_ids(world: &AdventureWorld) -> Vec<Id> {
    let mut ids: Vec<Id> = world.items.keys().cloned().collect();
    ids.sort();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemKind;

    #[test]
    fn builds_three_rooms_with_player_in_room1() {
        let world = load_world().unwrap();
        assert_eq!(world.places.len(), 3);
        assert_eq!(world.player_place_id().unwrap(), "room1");
        assert_eq!(world.player.health.current_hp(), 100);
        assert_eq!(world.player.capacity, 5);
    }

    #[test]
    fn room_contents_match_layout() {
        let world = load_world().unwrap();
        assert_eq!(world.places["room1"].items, vec!["sword", "axe", "key"]);
        assert_eq!(world.places["room1"].enemies, vec!["goblin"]);
        assert_eq!(world.places["room1"].exits, vec!["room2"]);
        assert_eq!(world.places["room2"].items, vec!["fake_key", "health_crate"]);
        assert_eq!(world.places["room2"].exits, vec!["room1", "room3"]);
        assert_eq!(world.places["room3"].exits, vec!["room1", "room2"]);
        assert_eq!(world.places["room3"].required_key.as_deref(), Some("key"));
    }

    #[test]
    fn axe_starts_locked_and_goblin_drops_it() {
        let world = load_world().unwrap();
        assert!(matches!(
            world.items["axe"].kind,
            ItemKind::Weapon {
                damage: 15,
                equippable: false
            }
        ));
        assert_eq!(world.enemies["goblin"].drop, "axe");
        assert_eq!(world.enemies["skeleton_knight"].drop, "key");
    }

    #[test]
    fn unplaced_health_packs_are_nowhere() {
        let world = load_world().unwrap();
        assert_eq!(world.items["health_potion"].location, Location::Nowhere);
        assert!(item_ids(&world).contains(&"health_elixir".to_string()));
    }

    #[test]
    fn validation_reports_dangling_references() {
        let mut world = load_world().unwrap();
        world.enemies.get_mut("goblin").unwrap().drop = "crown".into();
        world.places.get_mut("room3").unwrap().required_key = Some("skeleton_key".into());
        let err = validate_world(&world).unwrap_err().to_string();
        assert!(err.contains("drops unknown item 'crown'"));
        assert!(err.contains("requires unknown key 'skeleton_key'"));
    }

    #[test]
    fn validation_rejects_duplicate_names_in_a_place() {
        let mut world = load_world().unwrap();
        world.place_item("room2", Item::key("spare_key", "key", "another key")).unwrap();
        let err = validate_world(&world).unwrap_err().to_string();
        assert!(err.contains("two items named 'key'"));
    }
}
