//! Development mode command handlers.
//!
//! These handlers back the `:`-prefixed commands that are only honored when the game
//! is built with the `dev-mode` feature (`DEV_MODE`). They change the world in ways
//! normal play can't, for testing and debugging the world layout.
//!
//! # Available Commands
//!
//! - [`dev_teleport_handler`] - instantly move the player to any place
//! - [`dev_spawn_item_handler`] - instantly move any item into the inventory
//!
//! # Logging
//!
//! All dev commands log at `warn` level, leaving an audit trail of what was changed
//! during a testing session.

use log::warn;

use crate::{
    AdventureWorld, Location, View, ViewItem,
    item::ItemKind,
    loader::item_ids,
    style::GameStyle,
};

use anyhow::{Result, anyhow};

/// Instantly teleports the player to any place by id (DEV_MODE only).
///
/// Keys, enemies and missing exits are all ignored. The new place is described as if
/// the player had walked in. An unknown id leaves the player where they are.
pub fn dev_teleport_handler(world: &mut AdventureWorld, view: &mut View, place_id: &str) {
    if let Some(place) = world.places.get(place_id) {
        warn!("DEV only command used: teleported player to {} ({place_id})", place.name);
        view.push(ViewItem::PlaceDescription {
            name: place.name.clone(),
            description: place.description.clone(),
        });
        world.player.location = Location::Place(place_id.to_string());
    } else {
        let mut known: Vec<&str> = world.places.keys().map(String::as_str).collect();
        known.sort_unstable();
        view.push(ViewItem::ActionFailure(format!(
            "No place with id '{}'. Known places: {}",
            place_id.error_style(),
            known.join(", ")
        )));
    }
}

/// Moves an item straight into the player's inventory by id (DEV_MODE only).
///
/// The item is taken from wherever it is, even another place. Capacity and locks are
/// ignored. A weapon is equipped if the player has none; a health pack is used at once.
///
/// # Errors
/// - if the item vanishes from the world while being moved
pub fn dev_spawn_item_handler(world: &mut AdventureWorld, view: &mut View, item_id: &str) -> Result<()> {
    if !world.items.contains_key(item_id) {
        view.push(ViewItem::ActionFailure(format!(
            "No item with id '{}'. Known items: {}",
            item_id.error_style(),
            item_ids(world).join(", ")
        )));
        return Ok(());
    }
    if world.player.holds(item_id) {
        view.push(ViewItem::ActionFailure(format!("You already hold '{item_id}'.")));
        return Ok(());
    }

    world.detach_item(item_id)?;
    let item = world
        .items
        .get_mut(item_id)
        .ok_or_else(|| anyhow!("item '{item_id}' vanished during spawn"))?;
    if let ItemKind::HealthPack { heal_amount } = item.kind {
        // used on the spot and left `Nowhere`, same as a normal pickup
        world.player.health.heal(heal_amount);
        warn!("DEV only command used: spawned health pack '{item_id}' (+{heal_amount} hp)");
        view.push(ViewItem::CharacterHealed {
            name: world.player.name.clone(),
            cause: item.name.clone(),
            amount: heal_amount,
            health: world.player.health,
        });
        return Ok(());
    }
    item.set_location(Location::Inventory);
    world.player.inventory.push(item_id.to_string());
    if let ItemKind::Weapon { damage, .. } = item.kind
        && world.player.equipped_weapon.is_none()
    {
        world.player.equip_weapon(item_id, damage);
    }
    warn!("DEV only command used: spawned item '{item_id}' into inventory");
    view.push(ViewItem::ActionSuccess(format!("Item '{item_id}' moved to inventory.")));
    Ok(())
}
