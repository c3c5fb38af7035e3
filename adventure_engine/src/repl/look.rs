//! repl::look module
//!
//! Contains repl loop handlers for commands that involve looking around or examining
//! things in the player's place.

use crate::place::look_around;
use crate::repl::entity_not_found;
use crate::{AdventureWorld, EntityId, View, ViewItem, WorldObject};

use anyhow::{Context, Result};
use log::info;

/// Show the visible items, live enemies and exits of the player's place.
///
/// # Errors
/// - if the player's place can't be found
pub fn look_around_handler(world: &mut AdventureWorld, view: &mut View) -> Result<()> {
    let listing = look_around(world)?;
    info!(
        "{} looked around {} ({} items, {} enemies, {} exits)",
        world.player.name(),
        world.player_place_id()?,
        listing.items.len(),
        listing.enemies.len(),
        listing.exits.len()
    );
    view.push(ViewItem::PlaceListing(listing));
    Ok(())
}

/// Show the description of something in the player's place.
///
/// Items can only be examined while they lie here; enemies also show their health.
///
/// # Errors
/// - if the player's place can't be found
pub fn examine_handler(world: &AdventureWorld, view: &mut View, target: &str) -> Result<()> {
    let place = world.player_place_ref()?;
    match place.find_object(world, target) {
        Some(EntityId::Item(item_id)) => {
            let description = place
                .examine(world, &item_id)
                .with_context(|| format!("item '{item_id}' found in {} but can't be examined", place.id))?;
            view.push(ViewItem::ItemDescription {
                name: world.entity_name(&EntityId::Item(item_id.clone())).to_string(),
                description: description.to_string(),
            });
            info!("{} examined item '{item_id}'", world.player.name());
        },
        Some(EntityId::Enemy(enemy_id)) => {
            let enemy = world
                .enemies
                .get(&enemy_id)
                .with_context(|| format!("place {} lists unknown enemy '{enemy_id}'", place.id))?;
            view.push(ViewItem::EnemyDescription {
                name: enemy.name.clone(),
                description: enemy.description.clone(),
                health: enemy.health,
            });
            info!("{} examined enemy '{enemy_id}'", world.player.name());
        },
        None => entity_not_found(view, target),
    }
    Ok(())
}
