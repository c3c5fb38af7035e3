//! Player -- module for the player character
//!
//! The player carries an ordered inventory with a limited number of slots, wields at most
//! one weapon (which must also be in the inventory), and is always in exactly one place.
use crate::health::{HealthState, LivingEntity};
use crate::item::ItemKind;
use crate::{Id, Item, Location, WorldObject};

use log::info;
use thiserror::Error;

/// Name given to the player at the start of a game.
pub const PLAYER_NAME: &str = "player";
/// Health the player starts with (also their maximum).
pub const STARTING_HEALTH: i32 = 100;
/// Inventory slots available at the start of a game.
pub const STARTING_CAPACITY: usize = 5;

#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub description: String,
    pub location: Location,
    pub health: HealthState,
    /// Damage per blow; equal to the equipped weapon's damage, or 0 when unarmed.
    pub damage: i32,
    /// Held item ids, in the order they were picked up.
    pub inventory: Vec<Id>,
    pub capacity: usize,
    pub equipped_weapon: Option<Id>,
}
impl Default for Player {
    fn default() -> Player {
        Self {
            name: PLAYER_NAME.into(),
            description: "the player".into(),
            location: Location::default(),
            health: HealthState::new_at_max(STARTING_HEALTH),
            damage: 0,
            inventory: Vec::new(),
            capacity: STARTING_CAPACITY,
            equipped_weapon: None,
        }
    }
}
impl WorldObject for Player {
    fn id(&self) -> &str {
        &self.name
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
impl LivingEntity for Player {
    fn health(&self) -> &HealthState {
        &self.health
    }
    fn health_mut(&mut self) -> &mut HealthState {
        &mut self.health
    }
    fn attack_damage(&self) -> i32 {
        self.damage
    }
}

impl Player {
    /// Returns true if the item is in the player's inventory.
    pub fn holds(&self, item_id: &str) -> bool {
        self.inventory.iter().any(|id| id == item_id)
    }

    /// Returns true if every inventory slot is taken.
    pub fn is_full(&self) -> bool {
        self.inventory.len() >= self.capacity
    }

    /// Add inventory slots (reward for defeating an enemy).
    pub fn upgrade_inventory(&mut self, slots: usize) {
        self.capacity = self.capacity.saturating_add(slots);
        info!("{} inventory capacity +{slots} (now {})", self.name, self.capacity);
    }

    /// Make the given weapon the active one and take on its damage.
    pub fn equip_weapon(&mut self, item_id: &str, damage: i32) {
        self.equipped_weapon = Some(item_id.to_string());
        self.damage = damage;
    }

    /// Put the active weapon away; the player is unarmed afterwards.
    pub fn unequip_weapon(&mut self) {
        self.equipped_weapon = None;
        self.damage = 0;
    }

    /// Check whether `item` may be added to the inventory, without changing anything.
    ///
    /// # Errors
    /// - [`InventoryError::InventoryFull`] if no slot is free
    /// - [`InventoryError::DuplicateItem`] if the item is already held
    /// - [`InventoryError::WeaponAlreadyEquipped`] if it's a weapon and one is already equipped
    /// - [`InventoryError::WeaponLocked`] if it's a weapon that hasn't been unlocked
    pub fn check_can_add(&self, item: &Item) -> Result<(), InventoryError> {
        if self.is_full() {
            return Err(InventoryError::InventoryFull);
        }
        if self.holds(&item.id) {
            return Err(InventoryError::DuplicateItem(item.name.clone()));
        }
        if let ItemKind::Weapon { equippable, .. } = item.kind {
            if self.equipped_weapon.is_some() {
                return Err(InventoryError::WeaponAlreadyEquipped(item.name.clone()));
            }
            if !equippable {
                return Err(InventoryError::WeaponLocked(item.name.clone()));
            }
        }
        Ok(())
    }

    /// Remove an item from the inventory, unequipping it first if it's the active weapon.
    ///
    /// # Errors
    /// - [`InventoryError::ItemNotInInventory`] if the item isn't held
    pub fn remove_from_inventory(&mut self, item_id: &str, item_name: &str) -> Result<(), InventoryError> {
        let Some(index) = self.inventory.iter().position(|id| id == item_id) else {
            return Err(InventoryError::ItemNotInInventory(item_name.to_string()));
        };
        if self.equipped_weapon.as_deref() == Some(item_id) {
            self.unequip_weapon();
        }
        self.inventory.remove(index);
        Ok(())
    }
}

/// What happened to an item the player picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupOutcome {
    /// Placed in the inventory.
    Stored,
    /// Placed in the inventory and wielded.
    Equipped { damage: i32 },
    /// Used on the spot (health packs); never takes a slot.
    Consumed { healed: i32 },
}

/// Reasons an item can't be moved into or out of the inventory.
///
/// Display text is written for the player.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Your inventory is full!")]
    InventoryFull,
    #[error("You already have the {0} in your inventory!")]
    DuplicateItem(String),
    #[error("You can't equip the {0} while you have another weapon equipped!")]
    WeaponAlreadyEquipped(String),
    #[error("You can't equip the {0} yet.")]
    WeaponLocked(String),
    #[error("You can't pick up the {0}, it's not in the same place as you!")]
    ItemNotInPlace(String),
    #[error("You can't pick up {0}, that's not an object!")]
    CannotCarryCharacter(String),
    #[error("You don't have the {0} in your inventory!")]
    ItemNotInInventory(String),
    #[error("You can't put the {0} down here, there's already a {0} in this place!")]
    NameTakenInPlace(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_player_matches_starting_constants() {
        let player = Player::default();
        assert_eq!(player.health.current_hp(), STARTING_HEALTH);
        assert_eq!(player.capacity, STARTING_CAPACITY);
        assert_eq!(player.damage, 0);
        assert!(player.equipped_weapon.is_none());
    }

    #[test]
    fn full_inventory_rejects_items() {
        let mut player = Player {
            capacity: 1,
            ..Player::default()
        };
        player.inventory.push("key".into());
        let other_key = Item::key("fake_key", "key", "might be for the exit");
        assert!(matches!(player.check_can_add(&other_key), Err(InventoryError::InventoryFull)));
        assert_eq!(player.inventory, vec!["key".to_string()]);
    }

    #[test]
    fn duplicate_items_are_rejected() {
        let mut player = Player::default();
        let key = Item::key("key", "key", "a small key");
        player.inventory.push(key.id.clone());
        assert!(matches!(player.check_can_add(&key), Err(InventoryError::DuplicateItem(_))));
    }

    #[test]
    fn second_weapon_is_rejected_and_first_stays_equipped() {
        let mut player = Player::default();
        player.inventory.push("sword".into());
        player.equip_weapon("sword", 10);

        let dagger = Item::weapon("dagger", "dagger", "short", 4);
        assert!(matches!(
            player.check_can_add(&dagger),
            Err(InventoryError::WeaponAlreadyEquipped(_))
        ));
        assert_eq!(player.equipped_weapon.as_deref(), Some("sword"));
        assert_eq!(player.damage, 10);
    }

    #[test]
    fn locked_weapon_is_rejected() {
        let player = Player::default();
        let axe = Item::locked_weapon("axe", "axe", "a heavy weapon", 15);
        assert!(matches!(player.check_can_add(&axe), Err(InventoryError::WeaponLocked(_))));
    }

    #[test]
    fn removing_equipped_weapon_disarms() {
        let mut player = Player::default();
        player.inventory.push("sword".into());
        player.equip_weapon("sword", 10);
        player.remove_from_inventory("sword", "sword").unwrap();
        assert!(player.inventory.is_empty());
        assert!(player.equipped_weapon.is_none());
        assert_eq!(player.damage, 0);
    }

    #[test]
    fn removing_unheld_item_fails() {
        let mut player = Player::default();
        let err = player.remove_from_inventory("key", "key").unwrap_err();
        assert_eq!(err.to_string(), "You don't have the key in your inventory!");
    }

    #[test]
    fn upgrade_adds_slots() {
        let mut player = Player::default();
        player.upgrade_inventory(2);
        assert_eq!(player.capacity, STARTING_CAPACITY + 2);
    }
}
