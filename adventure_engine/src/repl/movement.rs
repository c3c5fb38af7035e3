//! repl::movement module
//!
//! Contains repl loop handlers for commands that involve player movement

use crate::place::{TravelError, travel};
use crate::repl::entity_not_found;
use crate::style::GameStyle;
use crate::{AdventureWorld, View, ViewItem};

use anyhow::Result;

/// Move the player through the exit to the named place.
///
/// On success the destination is described; if its key was used up, that's reported too.
///
/// # Errors
/// - if the world is inconsistent (e.g. an exit leads to a missing place)
pub fn goto_handler(world: &mut AdventureWorld, view: &mut View, target: &str) -> Result<()> {
    if target.is_empty() {
        entity_not_found(view, target);
        return Ok(());
    }
    match travel(world, target) {
        Ok(outcome) => {
            let destination = world.player_place_ref()?;
            view.push(ViewItem::ActionSuccess(format!(
                "You go to {} ({})",
                destination.name.place_style(),
                destination.description
            )));
            view.push(ViewItem::PlaceDescription {
                name: destination.name.clone(),
                description: destination.description.clone(),
            });
            if let Some(key_id) = outcome.consumed_key {
                let key_name = world.items.get(&key_id).map_or("key", |key| key.name.as_str());
                view.push(ViewItem::ActionSuccess(format!(
                    "The {} unlocks the way and is used up.",
                    key_name.key_style()
                )));
            }
        },
        Err(TravelError::Internal(e)) => return Err(e),
        Err(e) => view.push(ViewItem::ActionFailure(e.to_string())),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EntityId, load_world};

    #[test]
    fn locked_exit_keeps_player_in_place() {
        colored::control::set_override(false);
        let mut world = load_world().unwrap();
        let mut view = View::new();
        goto_handler(&mut world, &mut view, "room2").unwrap();
        assert_eq!(
            view.items[0].view_item,
            ViewItem::ActionFailure("You need the proper key to unlock this exit!".into())
        );
        assert_eq!(world.player_place_id().unwrap(), "room1");
    }

    #[test]
    fn missing_exit_is_reported() {
        let mut world = load_world().unwrap();
        let mut view = View::new();
        goto_handler(&mut world, &mut view, "room3").unwrap();
        assert_eq!(view.items[0].view_item, ViewItem::ActionFailure("Exit not found!".into()));
    }

    #[test]
    fn enemy_blocks_exit_even_with_key() {
        let mut world = load_world().unwrap();
        world.add_to_inventory(&EntityId::Item("key".into())).unwrap();
        let mut view = View::new();
        goto_handler(&mut world, &mut view, "room2").unwrap();
        assert_eq!(
            view.items[0].view_item,
            ViewItem::ActionFailure("You can't leave while there are enemies in the room!".into())
        );
        assert!(world.player.holds("key"));
    }

    #[test]
    fn successful_move_describes_destination() {
        colored::control::set_override(false);
        let mut world = load_world().unwrap();
        world.add_to_inventory(&EntityId::Item("key".into())).unwrap();
        world.places.get_mut("room1").unwrap().enemies.clear();
        let mut view = View::new();
        goto_handler(&mut world, &mut view, "room2").unwrap();
        let items: Vec<_> = view.items.iter().map(|e| e.view_item.clone()).collect();
        assert_eq!(items[0], ViewItem::ActionSuccess("You go to room2 (a mysterious room)".into()));
        assert!(items[1].is_place_description());
        assert_eq!(items.len(), 3);
        assert!(!world.player.holds("key"));
    }
}
