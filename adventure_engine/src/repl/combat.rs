//! repl::combat module
//!
//! Handler for `attack`. The whole fight is resolved at once and reported blow by blow.

use crate::combat::{CombatError, CombatOutcome, CombatReport, Loot, fight};
use crate::repl::{ReplControl, entity_not_found};
use crate::{AdventureWorld, EntityId, View, ViewItem, WorldObject};

use anyhow::{Result, anyhow};
use log::info;

/// Fight the named enemy in the player's place.
///
/// Returns `Quit` if the player is defeated.
///
/// # Errors
/// - if the world is inconsistent (e.g. the enemy's drop doesn't exist)
pub fn attack_handler(world: &mut AdventureWorld, view: &mut View, target: &str) -> Result<ReplControl> {
    let place = world.player_place_ref()?;
    let enemy_id = match place.find_object(world, target) {
        Some(EntityId::Enemy(id)) => id,
        Some(item @ EntityId::Item(_)) => {
            let name = world.entity_name(&item).to_string();
            info!("{} tried to attack item '{name}'", world.player.name());
            view.push(ViewItem::ActionFailure(format!("You can't attack the {name}!")));
            return Ok(ReplControl::Continue);
        },
        None => {
            entity_not_found(view, target);
            return Ok(ReplControl::Continue);
        },
    };

    let report = match fight(world, &enemy_id) {
        Ok(report) => report,
        Err(CombatError::NoWeaponEquipped) => {
            view.push(ViewItem::ActionFailure(CombatError::NoWeaponEquipped.to_string()));
            return Ok(ReplControl::Continue);
        },
        Err(CombatError::EnemyNotFound(id)) => return Err(anyhow!("enemy '{id}' found in place but not in world")),
        Err(CombatError::Internal(e)) => return Err(e),
    };
    Ok(show_report(world, view, report))
}

/// Push the blows, the outcome and any reward to the view.
fn show_report(world: &AdventureWorld, view: &mut View, report: CombatReport) -> ReplControl {
    for blow in report.blows {
        view.push(ViewItem::CharacterHarmed {
            name: blow.target,
            cause: blow.attacker,
            amount: blow.amount,
            health: blow.target_health,
        });
    }

    match report.outcome {
        CombatOutcome::PlayerWon => {
            view.push(ViewItem::CharacterDeath {
                name: report.enemy_name,
                cause: world.player.name().to_string(),
                is_player: false,
            });
            if let Some(reward) = report.reward {
                if reward.extra_slots > 0 {
                    view.push(ViewItem::InventoryUpgraded(reward.extra_slots));
                }
                view.push(match reward.loot {
                    Loot::WeaponUnlocked(name) => ViewItem::WeaponUnlocked(name),
                    Loot::ItemLooted(name) => ViewItem::ItemLooted(name),
                });
            }
            ReplControl::Continue
        },
        CombatOutcome::PlayerLost => {
            view.push(ViewItem::CharacterDeath {
                name: world.player.name().to_string(),
                cause: report.enemy_name,
                is_player: true,
            });
            view.push(ViewItem::EngineMessage("Game over.".to_string()));
            ReplControl::Quit
        },
        CombatOutcome::Ongoing => ReplControl::Continue,
    }
}
