//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module owns the loop and the single
//! dispatch point, [`execute`]; the submodules implement the individual command handlers
//! that act on the [`AdventureWorld`].

pub mod combat;
pub mod dev;
mod input;
pub mod inventory;
pub mod look;
pub mod movement;
pub mod system;

pub use combat::*;
pub use dev::*;
pub use inventory::*;
pub use look::*;
pub use movement::*;
pub use system::*;

use crate::command::{Command, CommandError, DevCommand, Verb};
use crate::world::AdventureWorld;
use crate::{View, ViewItem};

use anyhow::Result;
use log::{info, warn};

use input::{InputManager, PlayerInput};

/// Control flow signal used by handlers to exit the REPL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    Quit,
}

/// Run the main read-eval-print loop until the game ends.
///
/// Handles prompting, command parsing and rendering. Returns when a handler signals
/// `Quit`: the player exits, input ends, or the player is defeated.
///
/// # Errors
/// - Propagates failures from handlers, such as a missing place for the player.
pub fn run_repl(world: &mut AdventureWorld) -> Result<()> {
    let mut view = View::new();
    let mut input = InputManager::for_world(world);
    let mut turn: usize = 0;

    loop {
        let command = match input.next_input() {
            Ok(PlayerInput::Command(command)) => command,
            Ok(PlayerInput::Canceled) => {
                view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                view.flush();
                continue;
            },
            Err(err) => {
                warn!("failed to read input: {err}");
                view.push(ViewItem::Error("Failed to read input. Try again.".to_string()));
                view.flush();
                continue;
            },
        };

        turn += 1;
        info!("================> BEGIN TURN {turn} <================");
        let control = execute(world, &mut view, &command)?;
        view.flush();
        if control == ReplControl::Quit {
            break;
        }
    }
    Ok(())
}

/// Carry out one parsed command against the world, pushing its output to `view`.
///
/// # Errors
/// - if the world is found in an inconsistent state while handling the command
pub fn execute(world: &mut AdventureWorld, view: &mut View, command: &Command) -> Result<ReplControl> {
    match command {
        Command::Empty => view.push(ViewItem::Error(CommandError::EmptyInput.to_string())),
        Command::Unknown { input, suggestion } => {
            info!("unrecognized command '{input}' (closest: {suggestion})");
            let error = CommandError::UnknownCommand {
                input: input.clone(),
                suggestion: *suggestion,
            };
            view.push(ViewItem::Error(error.to_string()));
            view.push(ViewItem::Suggestion(suggestion.keyword().to_string()));
        },
        Command::Dev(dev) => {
            if crate::DEV_MODE {
                match dev {
                    DevCommand::Teleport(place_id) => dev_teleport_handler(world, view, place_id),
                    DevCommand::Spawn(item_id) => dev_spawn_item_handler(world, view, item_id)?,
                }
            } else {
                warn!("developer command {dev:?} rejected: DEV_MODE is off");
                view.push(ViewItem::Error(
                    "Developer commands are not available in this build.".to_string(),
                ));
            }
        },
        Command::Action { verb, target } => return dispatch_verb(world, view, *verb, target),
    }
    Ok(ReplControl::Continue)
}

fn dispatch_verb(world: &mut AdventureWorld, view: &mut View, verb: Verb, target: &str) -> Result<ReplControl> {
    match verb {
        Verb::Help => help_handler(view),
        Verb::Inventory => inv_handler(world, view)?,
        Verb::Examine => examine_handler(world, view, target)?,
        Verb::Equip => equip_handler(world, view, target)?,
        Verb::Unequip => unequip_handler(world, view, target)?,
        Verb::Goto => goto_handler(world, view, target)?,
        Verb::Attack => return attack_handler(world, view, target),
        Verb::LookAround => look_around_handler(world, view)?,
        Verb::Exit => return Ok(quit_handler(world, view)),
    }
    Ok(ReplControl::Continue)
}

/// Feedback to player if a name doesn't match anything they can act on.
pub fn entity_not_found(view: &mut View, search_text: &str) {
    info!("no object matching \"{search_text}\"");
    view.push(ViewItem::Error(
        CommandError::ObjectNotFound(search_text.to_string()).to_string(),
    ));
}
