//! Combat module
//!
//! A fight is an uninterrupted exchange of blows between the player and one enemy,
//! resolved within a single command. The player always strikes first. There is no
//! fleeing and nothing can be used mid-fight.

use crate::health::{HealthState, LivingEntity};
use crate::item::ItemKind;
use crate::{AdventureWorld, Id, Location, WorldObject, place};

use anyhow::anyhow;
use log::info;
use thiserror::Error;

/// State of a fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    Ongoing,
    PlayerWon,
    PlayerLost,
}

/// A single blow landed during a fight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blow {
    pub attacker: String,
    pub target: String,
    pub amount: i32,
    /// Target's health right after the blow.
    pub target_health: HealthState,
}

/// What the player gets for beating an enemy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reward {
    /// Extra inventory slots (the enemy's level).
    pub extra_slots: usize,
    pub loot: Loot,
}

/// How an enemy's drop reached the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loot {
    /// A weapon drop unlocks that weapon wherever it lies.
    WeaponUnlocked(String),
    /// Any other drop goes straight into the inventory.
    ItemLooted(String),
}

/// Full account of a fight, for the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatReport {
    pub enemy_name: String,
    pub blows: Vec<Blow>,
    pub outcome: CombatOutcome,
    pub reward: Option<Reward>,
}

/// Reasons a fight can't happen.
#[derive(Debug, Error)]
pub enum CombatError {
    #[error("You need to equip a weapon to attack!")]
    NoWeaponEquipped,
    #[error("no enemy with id '{0}' in the world")]
    EnemyNotFound(Id),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// One round: `attacker` hits `defender`; if the defender survives, it hits back.
///
/// Returns the state after the round. `Ongoing` means both are still standing.
pub fn exchange_blows<A, D>(attacker: &mut A, defender: &mut D, blows: &mut Vec<Blow>) -> CombatOutcome
where
    A: LivingEntity,
    D: LivingEntity,
{
    if strike(&*attacker, defender, blows) {
        return CombatOutcome::PlayerWon;
    }
    if strike(&*defender, attacker, blows) {
        return CombatOutcome::PlayerLost;
    }
    CombatOutcome::Ongoing
}

/// Land one blow; returns true if the target went down.
fn strike<A, D>(attacker: &A, target: &mut D, blows: &mut Vec<Blow>) -> bool
where
    A: LivingEntity,
    D: LivingEntity,
{
    let amount = attacker.attack_damage();
    target.health_mut().damage(amount);
    info!(
        "{} hits {} for {amount} ({} hp left)",
        attacker.name(),
        target.name(),
        target.health().current_hp()
    );
    blows.push(Blow {
        attacker: attacker.name().to_string(),
        target: target.name().to_string(),
        amount,
        target_health: *target.health(),
    });
    target.is_defeated()
}

/// Fight the enemy with the given id until one side is defeated.
///
/// On a win the reward is granted and the enemy is cleared from the player's place.
///
/// # Errors
/// - [`CombatError::NoWeaponEquipped`] if the player is unarmed; nothing changes
/// - [`CombatError::EnemyNotFound`] if the id doesn't name an enemy
pub fn fight(world: &mut AdventureWorld, enemy_id: &str) -> Result<CombatReport, CombatError> {
    if world.player.equipped_weapon.is_none() {
        return Err(CombatError::NoWeaponEquipped);
    }
    let enemy = world
        .enemies
        .get_mut(enemy_id)
        .ok_or_else(|| CombatError::EnemyNotFound(enemy_id.to_string()))?;
    info!("{} attacks {} ({enemy_id})", world.player.name, enemy.name);

    let mut blows = Vec::new();
    let mut outcome = CombatOutcome::Ongoing;
    while outcome == CombatOutcome::Ongoing {
        outcome = exchange_blows(&mut world.player, &mut *enemy, &mut blows);
    }
    let enemy_name = enemy.name.clone();

    let reward = match outcome {
        CombatOutcome::PlayerWon => {
            info!("{} defeated {enemy_name}", world.player.name);
            let reward = grant_reward(world, enemy_id)?;
            let place_id = world.player_place_id()?.to_string();
            place::prune_defeated_enemies(world, &place_id)?;
            Some(reward)
        },
        CombatOutcome::PlayerLost => {
            info!("{} was defeated by {enemy_name}", world.player.name);
            None
        },
        CombatOutcome::Ongoing => None,
    };

    Ok(CombatReport {
        enemy_name,
        blows,
        outcome,
        reward,
    })
}

/// Apply the spoils of a defeated enemy: extra slots equal to its level, then its drop.
///
/// The drop skips the usual pickup checks (a full inventory doesn't stop it).
///
/// # Errors
/// - if the enemy or its drop isn't in the world
pub fn grant_reward(world: &mut AdventureWorld, enemy_id: &str) -> Result<Reward, CombatError> {
    let enemy = world
        .enemies
        .get(enemy_id)
        .ok_or_else(|| CombatError::EnemyNotFound(enemy_id.to_string()))?;
    let extra_slots = enemy.level();
    let drop_id = enemy.drop.clone();
    world.player.upgrade_inventory(extra_slots);

    let drop_item = world
        .items
        .get_mut(&drop_id)
        .ok_or_else(|| anyhow!("enemy '{enemy_id}' drops unknown item '{drop_id}'"))?;
    let loot = if let ItemKind::Weapon { .. } = drop_item.kind {
        drop_item.unlock();
        Loot::WeaponUnlocked(drop_item.name.clone())
    } else {
        let name = drop_item.name.clone();
        if !world.player.holds(&drop_id) {
            world.detach_item(&drop_id)?;
            if let Some(item) = world.items.get_mut(&drop_id) {
                item.set_location(Location::Inventory);
            }
            world.player.inventory.push(drop_id.clone());
        }
        info!("{} looted '{name}' ({drop_id})", world.player.name);
        Loot::ItemLooted(name)
    };

    Ok(Reward { extra_slots, loot })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Enemy, EntityId, Item, Place, Player};

    fn arena() -> AdventureWorld {
        let mut world = AdventureWorld::new_empty();
        world.add_place(Place::new("arena", "arena", "sand everywhere", None));
        world.place_item("arena", Item::weapon("sword", "sword", "a sharp weapon", 10)).unwrap();
        world
            .place_item("arena", Item::locked_weapon("axe", "axe", "a heavy weapon", 15))
            .unwrap();
        world.stash_item(Item::key("key", "key", "a small key"));
        world.player.location = Location::Place("arena".into());
        world
    }

    fn armed_arena() -> AdventureWorld {
        let mut world = arena();
        world.add_to_inventory(&EntityId::Item("sword".into())).unwrap();
        world
    }

    #[test]
    fn rounds_trade_blows_until_enemy_falls() {
        let mut player = Player::default();
        player.equip_weapon("sword", 10);
        let mut enemy = Enemy::new("rat", "rat", "a big rat", 15, 5, "key");
        let mut blows = Vec::new();

        let first = exchange_blows(&mut player, &mut enemy, &mut blows);
        assert_eq!(first, CombatOutcome::Ongoing);
        assert_eq!(enemy.health.current_hp(), 5);
        assert_eq!(player.health.current_hp(), 95);

        let second = exchange_blows(&mut player, &mut enemy, &mut blows);
        assert_eq!(second, CombatOutcome::PlayerWon);
        assert_eq!(enemy.health.current_hp(), -5);
        assert_eq!(player.health.current_hp(), 95);
        assert_eq!(blows.len(), 3);
    }

    #[test]
    fn unarmed_player_cannot_fight() {
        let mut world = arena();
        world
            .place_enemy("arena", Enemy::new("rat", "rat", "", 15, 5, "key"))
            .unwrap();
        let err = fight(&mut world, "rat").unwrap_err();
        assert!(matches!(err, CombatError::NoWeaponEquipped));
        assert_eq!(world.enemies["rat"].health.current_hp(), 15);
        assert_eq!(world.player.health.current_hp(), 100);
    }

    #[test]
    fn winning_grants_slots_and_loot() {
        let mut world = armed_arena();
        world
            .place_enemy("arena", Enemy::new("knight", "skeletonKnight", "", 100, 10, "key"))
            .unwrap();
        let capacity = world.player.capacity;

        let report = fight(&mut world, "knight").unwrap();
        assert_eq!(report.outcome, CombatOutcome::PlayerWon);
        // ten player blows, nine from the knight
        assert_eq!(report.blows.len(), 19);
        assert_eq!(world.player.health.current_hp(), 10);
        assert_eq!(
            report.reward,
            Some(Reward {
                extra_slots: 2,
                loot: Loot::ItemLooted("key".into()),
            })
        );
        assert_eq!(world.player.capacity, capacity + 2);
        assert!(world.player.holds("key"));
        assert_eq!(world.items["key"].location, Location::Inventory);
        assert!(world.places["arena"].enemies.is_empty());
    }

    #[test]
    fn weapon_drop_is_unlocked_in_place() {
        let mut world = armed_arena();
        world
            .place_enemy("arena", Enemy::new("goblin", "goblin", "", 50, 15, "axe"))
            .unwrap();

        let report = fight(&mut world, "goblin").unwrap();
        assert_eq!(report.outcome, CombatOutcome::PlayerWon);
        assert_eq!(world.player.health.current_hp(), 40);
        assert!(world.items["axe"].is_equippable());
        assert!(world.places["arena"].holds_item("axe"));
        assert!(!world.player.holds("axe"));
    }

    #[test]
    fn loot_ignores_full_inventory() {
        let mut world = armed_arena();
        world.player.capacity = 1;
        world
            .place_enemy("arena", Enemy::new("rat", "rat", "", 15, 5, "key"))
            .unwrap();
        fight(&mut world, "rat").unwrap();
        assert_eq!(world.player.inventory, vec!["sword".to_string(), "key".to_string()]);
    }

    #[test]
    fn losing_ends_with_player_defeated() {
        let mut world = armed_arena();
        world
            .place_enemy("arena", Enemy::new("dragon", "dragon", "", 500, 60, "key"))
            .unwrap();
        let report = fight(&mut world, "dragon").unwrap();
        assert_eq!(report.outcome, CombatOutcome::PlayerLost);
        assert!(report.reward.is_none());
        assert!(world.player.is_defeated());
        assert_eq!(world.player.health.current_hp(), -20);
        assert_eq!(world.places["arena"].enemies, vec!["dragon".to_string()]);
    }
}
