//! Place definitions and world-graph operations.
//!
//! A place is a node in the world graph. It holds items and enemies and has directed
//! exits to other places. A place may require a key: the key gates *entering* the place,
//! never leaving it.
//!
//! Operations that need more than the place itself (enemy health, the player's inventory)
//! take the [`AdventureWorld`].

use crate::health::LivingEntity;
use crate::item::ItemCategory;
use crate::{AdventureWorld, EntityId, Id, Location, WorldObject};

use anyhow::{Context, Result, anyhow};
use log::info;
use thiserror::Error;

/// Any visitable location in the game world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub id: Id,
    pub name: String,
    pub description: String,
    /// Key item the player must hold to enter this place.
    pub required_key: Option<Id>,
    /// Items lying here, in the order they were added.
    pub items: Vec<Id>,
    /// Enemies here, in the order they were added. Defeated ones are pruned lazily.
    pub enemies: Vec<Id>,
    /// Destination place ids, one per exit.
    pub exits: Vec<Id>,
    pub location: Location,
}
impl WorldObject for Place {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn location(&self) -> &Location {
        &self.location
    }
}

impl Place {
    /// Create an empty place. The name is lowercased, since exits are matched by name.
    pub fn new(id: impl Into<Id>, name: &str, description: &str, required_key: Option<Id>) -> Self {
        Self {
            id: id.into(),
            name: name.to_lowercase(),
            description: description.to_string(),
            required_key,
            items: Vec::new(),
            enemies: Vec::new(),
            exits: Vec::new(),
            location: Location::Nowhere,
        }
    }

    pub fn add_item(&mut self, item_id: Id) {
        if !self.holds_item(&item_id) {
            self.items.push(item_id);
        }
    }

    pub fn remove_item(&mut self, item_id: &str) {
        self.items.retain(|id| id != item_id);
    }

    pub fn holds_item(&self, item_id: &str) -> bool {
        self.items.iter().any(|id| id == item_id)
    }

    pub fn add_enemy(&mut self, enemy_id: Id) {
        self.enemies.push(enemy_id);
    }

    pub fn add_exit(&mut self, destination: Id) {
        self.exits.push(destination);
    }

    /// Look up something in this place by name: items first, then enemies.
    ///
    /// Matching is exact but case-insensitive. Defeated enemies are skipped.
    pub fn find_object(&self, world: &AdventureWorld, name: &str) -> Option<EntityId> {
        let lc_name = name.to_lowercase();
        self.items
            .iter()
            .find(|id| world.items.get(*id).is_some_and(|item| item.name == lc_name))
            .map(|id| EntityId::Item(id.clone()))
            .or_else(|| {
                self.enemies
                    .iter()
                    .find(|id| {
                        world
                            .enemies
                            .get(*id)
                            .is_some_and(|enemy| enemy.name == lc_name && !enemy.is_defeated())
                    })
                    .map(|id| EntityId::Enemy(id.clone()))
            })
    }

    /// Description of an item, but only while the item is lying in this place.
    pub fn examine<'a>(&self, world: &'a AdventureWorld, item_id: &str) -> Option<&'a str> {
        if !self.holds_item(item_id) {
            return None;
        }
        world.items.get(item_id).map(|item| item.description.as_str())
    }

    /// Returns true if any enemy in this place is still standing.
    pub fn has_live_enemies(&self, world: &AdventureWorld) -> bool {
        self.enemies
            .iter()
            .filter_map(|id| world.enemies.get(id))
            .any(|enemy| !enemy.is_defeated())
    }
}

/// Remove defeated enemies from a place, returning the ids that were removed.
///
/// # Errors
/// - if the place id is unknown
pub fn prune_defeated_enemies(world: &mut AdventureWorld, place_id: &str) -> Result<Vec<Id>> {
    let place = world
        .places
        .get_mut(place_id)
        .with_context(|| format!("pruning enemies in unknown place '{place_id}'"))?;
    let mut removed = Vec::new();
    place.enemies.retain(|id| {
        let defeated = world.enemies.get(id).is_none_or(|enemy| enemy.is_defeated());
        if defeated {
            removed.push(id.clone());
        }
        !defeated
    });
    for id in &removed {
        if let Some(enemy) = world.enemies.get_mut(id) {
            enemy.location = Location::Nowhere;
        }
        info!("removed defeated enemy '{id}' from {place_id}");
    }
    Ok(removed)
}

/// A successful move between places.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelOutcome {
    pub from: Id,
    pub to: Id,
    /// Key used up to enter the destination, if it needed one.
    pub consumed_key: Option<Id>,
}

/// Reasons the player can't take an exit. Display text is written for the player.
#[derive(Debug, Error)]
pub enum TravelError {
    #[error("Exit not found!")]
    ExitNotFound(String),
    #[error("You need the proper key to unlock this exit!")]
    ExitLocked(String),
    #[error("You can't leave while there are enemies in the room!")]
    RoomHasLiveEnemies,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Move the player through the exit leading to `exit_name`.
///
/// Checks, in order: the exit exists, the player holds the destination's key (if any),
/// and no live enemies remain here. On success the destination's key is removed from
/// the inventory and the player is moved. On failure nothing changes.
///
/// # Errors
/// - [`TravelError::ExitNotFound`], [`TravelError::ExitLocked`] or
///   [`TravelError::RoomHasLiveEnemies`] when the move is refused
pub fn travel(world: &mut AdventureWorld, exit_name: &str) -> Result<TravelOutcome, TravelError> {
    let from = world.player_place_id()?.to_string();
    prune_defeated_enemies(world, &from)?;

    let lc_name = exit_name.to_lowercase();
    let here = world.player_place_ref()?;
    let Some(destination) = here
        .exits
        .iter()
        .filter_map(|id| world.places.get(id))
        .find(|place| place.name == lc_name)
    else {
        info!("{} tried missing exit '{exit_name}' from {from}", world.player.name);
        return Err(TravelError::ExitNotFound(exit_name.to_string()));
    };

    if let Some(key_id) = &destination.required_key
        && !world.player.holds(key_id)
    {
        info!("{} denied entry to {}: missing key '{key_id}'", world.player.name, destination.id);
        return Err(TravelError::ExitLocked(destination.name.clone()));
    }

    if here.has_live_enemies(world) {
        info!("{} denied leaving {from}: enemies present", world.player.name);
        return Err(TravelError::RoomHasLiveEnemies);
    }

    let to = destination.id.clone();
    let consumed_key = destination.required_key.clone();
    if let Some(key_id) = &consumed_key {
        // the key is used up by the lock
        world.detach_item(key_id)?;
        info!("{} used up key '{key_id}' entering {to}", world.player.name);
    }
    world.player.location = Location::Place(to.clone());
    info!("{} moved from {from} to {to}", world.player.name);
    Ok(TravelOutcome { from, to, consumed_key })
}

/// One item line in a look-around listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedItem {
    pub name: String,
    pub category: ItemCategory,
}

/// Everything the player can see when looking around.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceListing {
    pub items: Vec<ListedItem>,
    pub enemies: Vec<String>,
    pub exits: Vec<String>,
}

/// Survey the player's place: visible items, live enemies and exits.
///
/// Locked weapons and items the player already holds are left out, as are exits that
/// loop back to the same place.
///
/// # Errors
/// - if the player's place can't be found
pub fn look_around(world: &mut AdventureWorld) -> Result<PlaceListing> {
    let place_id = world.player_place_id()?.to_string();
    prune_defeated_enemies(world, &place_id)?;
    let place = world.player_place_ref()?;

    let items: Vec<ListedItem> = place
        .items
        .iter()
        .filter(|id| !world.player.holds(id))
        .filter_map(|id| world.items.get(id))
        .filter(|item| item.is_equippable())
        .map(|item| ListedItem {
            name: item.name.clone(),
            category: item.category(),
        })
        .collect();
    let enemies: Vec<String> = place
        .enemies
        .iter()
        .filter_map(|id| world.enemies.get(id))
        .map(|enemy| enemy.name.clone())
        .collect();
    let exits: Vec<String> = place
        .exits
        .iter()
        .filter(|id| **id != place.id)
        .map(|id| {
            world
                .places
                .get(id)
                .map(|dest| dest.name.clone())
                .ok_or_else(|| anyhow!("exit from {} leads to unknown place '{id}'", place.id))
        })
        .collect::<Result<_>>()?;

    Ok(PlaceListing { items, enemies, exits })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Enemy, Item};

    fn two_rooms() -> AdventureWorld {
        let mut world = AdventureWorld::new_empty();
        world.add_place(Place::new("room1", "room1", "a dark room", None));
        world.add_place(Place::new("room2", "room2", "a mysterious room", Some("key".into())));
        world.connect("room1", "room2").unwrap();
        world.connect("room2", "room1").unwrap();
        world.place_item("room1", Item::key("key", "key", "a small key")).unwrap();
        world.player.location = Location::Place("room1".into());
        world
    }

    fn hold(world: &mut AdventureWorld, item_id: &str) {
        world.add_to_inventory(&EntityId::Item(item_id.into())).unwrap();
    }

    #[test]
    fn find_object_searches_items_before_enemies() {
        let mut world = two_rooms();
        world
            .place_enemy("room1", Enemy::new("key_mimic", "key", "a key with teeth", 10, 1, "key"))
            .unwrap();
        let place = world.player_place_ref().unwrap();
        assert_eq!(place.find_object(&world, "KEY"), Some(EntityId::Item("key".into())));
        assert_eq!(place.find_object(&world, "nothing"), None);
    }

    #[test]
    fn find_object_finds_live_enemies() {
        let mut world = two_rooms();
        world
            .place_enemy("room1", Enemy::new("goblin", "Goblin", "an angry goblin", 50, 15, "key"))
            .unwrap();
        let place = world.player_place_ref().unwrap();
        assert_eq!(place.find_object(&world, "goblin"), Some(EntityId::Enemy("goblin".into())));
    }

    #[test]
    fn examine_requires_item_in_place() {
        let mut world = two_rooms();
        assert_eq!(
            world.places["room1"].examine(&world, "key"),
            Some("a small key")
        );
        hold(&mut world, "key");
        assert_eq!(world.places["room1"].examine(&world, "key"), None);
    }

    #[test]
    fn prune_removes_only_defeated_enemies() {
        let mut world = two_rooms();
        world
            .place_enemy("room1", Enemy::new("goblin", "goblin", "", 50, 15, "key"))
            .unwrap();
        world.place_enemy("room1", Enemy::new("rat", "rat", "", 5, 1, "key")).unwrap();
        world.enemies.get_mut("rat").unwrap().health.damage(7);

        let removed = prune_defeated_enemies(&mut world, "room1").unwrap();
        assert_eq!(removed, vec!["rat".to_string()]);
        assert_eq!(world.places["room1"].enemies, vec!["goblin".to_string()]);
        assert_eq!(world.enemies["rat"].location, Location::Nowhere);
    }

    #[test]
    fn travel_to_missing_exit_stays_put() {
        let mut world = two_rooms();
        let err = travel(&mut world, "room9").unwrap_err();
        assert!(matches!(err, TravelError::ExitNotFound(_)));
        assert_eq!(world.player_place_id().unwrap(), "room1");
    }

    #[test]
    fn travel_without_key_stays_put_and_keeps_inventory() {
        let mut world = two_rooms();
        world.place_item("room1", Item::key("fake_key", "key", "might be for the exit")).unwrap();
        hold(&mut world, "fake_key");
        let inventory_before = world.player.inventory.clone();

        let err = travel(&mut world, "room2").unwrap_err();
        assert!(matches!(err, TravelError::ExitLocked(_)));
        assert_eq!(world.player_place_id().unwrap(), "room1");
        assert_eq!(world.player.inventory, inventory_before);
    }

    #[test]
    fn travel_blocked_by_live_enemy_keeps_key() {
        let mut world = two_rooms();
        hold(&mut world, "key");
        world
            .place_enemy("room1", Enemy::new("goblin", "goblin", "", 50, 15, "key"))
            .unwrap();

        let err = travel(&mut world, "room2").unwrap_err();
        assert!(matches!(err, TravelError::RoomHasLiveEnemies));
        assert_eq!(world.player_place_id().unwrap(), "room1");
        assert!(world.player.holds("key"));
    }

    #[test]
    fn defeated_enemies_do_not_block_travel() {
        let mut world = two_rooms();
        hold(&mut world, "key");
        world
            .place_enemy("room1", Enemy::new("goblin", "goblin", "", 50, 15, "key"))
            .unwrap();
        world.enemies.get_mut("goblin").unwrap().health.damage(60);

        let outcome = travel(&mut world, "room2").unwrap();
        assert_eq!(outcome.to, "room2");
        assert!(world.places["room1"].enemies.is_empty());
    }

    #[test]
    fn travel_with_key_consumes_it() {
        let mut world = two_rooms();
        hold(&mut world, "key");

        let outcome = travel(&mut world, "Room2").unwrap();
        assert_eq!(
            outcome,
            TravelOutcome {
                from: "room1".into(),
                to: "room2".into(),
                consumed_key: Some("key".into()),
            }
        );
        assert_eq!(world.player_place_id().unwrap(), "room2");
        assert!(!world.player.holds("key"));
        assert_eq!(world.items["key"].location, Location::Nowhere);
    }

    #[test]
    fn leaving_a_keyed_place_needs_no_key() {
        let mut world = two_rooms();
        hold(&mut world, "key");
        travel(&mut world, "room2").unwrap();
        let outcome = travel(&mut world, "room1").unwrap();
        assert_eq!(outcome.consumed_key, None);
        assert_eq!(world.player_place_id().unwrap(), "room1");
    }

    #[test]
    fn look_around_hides_locked_weapons_and_self_loops() {
        let mut world = two_rooms();
        world.connect("room1", "room1").unwrap();
        world
            .place_item("room1", Item::locked_weapon("axe", "axe", "a heavy weapon", 15))
            .unwrap();
        world
            .place_item("room1", Item::health_pack("crate", "healthCrate", "a big crate", 50))
            .unwrap();
        world
            .place_enemy("room1", Enemy::new("goblin", "goblin", "", 50, 15, "axe"))
            .unwrap();

        let listing = look_around(&mut world).unwrap();
        let names: Vec<_> = listing.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["key", "healthcrate"]);
        assert_eq!(listing.items[1].category, ItemCategory::HealthPack);
        assert_eq!(listing.enemies, vec!["goblin".to_string()]);
        assert_eq!(listing.exits, vec!["room2".to_string()]);
    }

    #[test]
    fn look_around_prunes_defeated_enemies() {
        let mut world = two_rooms();
        world
            .place_enemy("room1", Enemy::new("goblin", "goblin", "", 50, 15, "key"))
            .unwrap();
        world.enemies.get_mut("goblin").unwrap().health.damage(50);
        let listing = look_around(&mut world).unwrap();
        assert!(listing.enemies.is_empty());
        assert!(world.places["room1"].enemies.is_empty());
    }
}
