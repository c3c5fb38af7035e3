//! repl::inventory module
//!
//! Handlers for picking things up ("equip"), putting them down ("unequip") and
//! listing what the player carries.

use crate::player::{InventoryError, PickupOutcome};
use crate::repl::entity_not_found;
use crate::style::GameStyle;
use crate::view::InventoryLine;
use crate::{AdventureWorld, Id, View, ViewItem, WorldObject};

use anyhow::Result;
use log::info;

/// Show the player's inventory, capacity and health.
///
/// # Errors
/// - if an inventory entry refers to an unknown item
pub fn inv_handler(world: &AdventureWorld, view: &mut View) -> Result<()> {
    let lines = world
        .player
        .inventory
        .iter()
        .map(|id| {
            world
                .items
                .get(id)
                .map(|item| InventoryLine {
                    name: item.name.clone(),
                    category: item.category(),
                    equipped: world.player.equipped_weapon.as_ref() == Some(id),
                })
                .ok_or_else(|| anyhow::anyhow!("inventory holds unknown item '{id}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    view.push(ViewItem::Inventory {
        lines,
        capacity: world.player.capacity,
        health: world.player.health,
    });
    Ok(())
}

/// Pick up the named object from the player's place.
///
/// Weapons are equipped, health packs are used immediately, keys are stored.
///
/// # Errors
/// - if the world is inconsistent (e.g. the player's place is missing)
pub fn equip_handler(world: &mut AdventureWorld, view: &mut View, target: &str) -> Result<()> {
    let place = world.player_place_ref()?;
    let Some(entity) = place.find_object(world, target) else {
        entity_not_found(view, target);
        return Ok(());
    };
    let name = world.entity_name(&entity).to_string();

    match world.add_to_inventory(&entity) {
        Ok(PickupOutcome::Stored) => {
            view.push(ViewItem::ActionSuccess(format!(
                "You equip {} into your inventory!",
                name.item_style()
            )));
        },
        Ok(PickupOutcome::Equipped { damage }) => {
            view.push(ViewItem::ActionSuccess(format!(
                "You equip {} into your inventory! (damage: {damage})",
                name.weapon_style()
            )));
        },
        Ok(PickupOutcome::Consumed { healed }) => {
            view.push(ViewItem::ActionSuccess(format!(
                "You used the health pack and gained {healed} health!"
            )));
            view.push(ViewItem::CharacterHealed {
                name: world.player.name().to_string(),
                cause: name,
                amount: healed,
                health: world.player.health,
            });
        },
        Err(InventoryError::Internal(e)) => return Err(e),
        Err(e) => {
            info!("{} couldn't pick up '{name}': {e}", world.player.name());
            view.push(ViewItem::ActionFailure(e.to_string()));
        },
    }
    Ok(())
}

/// Put down the named item from the inventory, leaving it in the player's place.
///
/// # Errors
/// - if the world is inconsistent (e.g. the player's place is missing)
pub fn unequip_handler(world: &mut AdventureWorld, view: &mut View, target: &str) -> Result<()> {
    let Some(item_id) = held_item_named(world, target) else {
        // it exists here but isn't held
        if !target.is_empty() && world.player_place_ref()?.find_object(world, target).is_some() {
            let err = InventoryError::ItemNotInInventory(target.to_lowercase());
            view.push(ViewItem::ActionFailure(err.to_string()));
        } else {
            entity_not_found(view, target);
        }
        return Ok(());
    };

    match world.remove_from_inventory(&item_id) {
        Ok(()) => {
            let name = world.items.get(&item_id).map_or(target, |item| item.name.as_str());
            view.push(ViewItem::ActionSuccess(format!(
                "You remove {} from your inventory!",
                name.item_style()
            )));
        },
        Err(InventoryError::Internal(e)) => return Err(e),
        Err(e) => view.push(ViewItem::ActionFailure(e.to_string())),
    }
    Ok(())
}

/// Id of the first inventory item with the given name (case-insensitive).
fn held_item_named(world: &AdventureWorld, name: &str) -> Option<Id> {
    let lc_name = name.to_lowercase();
    world
        .player
        .inventory
        .iter()
        .find(|id| world.items.get(*id).is_some_and(|item| item.name == lc_name))
        .cloned()
}
