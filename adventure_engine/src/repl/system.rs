//! repl::system module
//!
//! Handlers for commands about the game session itself rather than the world.

use crate::command::Verb;
use crate::repl::ReplControl;
use crate::style::GameStyle;
use crate::view::HelpLine;
use crate::{AdventureWorld, View, ViewItem, WorldObject};

use anyhow::Result;
use log::info;

/// Shown once when the game starts.
pub const WELCOME_BANNER: &str = "Welcome to the Adventure Game!";

/// Show the list of commands. Developer commands are listed only when `DEV_MODE` is on.
pub fn help_handler(view: &mut View) {
    let mut lines: Vec<HelpLine> = Verb::ALL
        .iter()
        .map(|verb| HelpLine {
            usage: verb.usage().to_string(),
            description: verb.summary().to_string(),
        })
        .collect();
    if crate::DEV_MODE {
        lines.push(HelpLine {
            usage: ":port [place]".into(),
            description: "teleport to any place, ignoring keys and enemies".into(),
        });
        lines.push(HelpLine {
            usage: ":spawn [item]".into(),
            description: "put any item straight into your inventory".into(),
        });
    }
    view.push(ViewItem::Help(lines));
}

/// End the session at the player's request.
pub fn quit_handler(world: &AdventureWorld, view: &mut View) -> ReplControl {
    info!(
        "{} quit the game with {}/{} hp",
        world.player.name(),
        world.player.health.current_hp(),
        world.player.health.max_hp()
    );
    view.push(ViewItem::EngineMessage("Thanks for playing!".to_string()));
    ReplControl::Quit
}

/// Opening frame: banner and command list.
pub fn intro_handler(view: &mut View) {
    view.push(ViewItem::EngineMessage(WELCOME_BANNER.to_string()));
    help_handler(view);
}

/// Tell the player where they are when the game starts.
///
/// # Errors
/// - if the player's starting place can't be found
pub fn start_place_handler(world: &AdventureWorld, view: &mut View) -> Result<()> {
    let place = world.player_place_ref()?;
    info!("{} starts in {}", world.player.name(), place.id);
    view.push(ViewItem::PlaceDescription {
        name: place.name.clone(),
        description: place.description.clone(),
    });
    view.push(ViewItem::ActionSuccess(format!(
        "You are in {} ({})",
        place.name.place_style(),
        place.description
    )));
    Ok(())
}
