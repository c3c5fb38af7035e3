//! Data structures representing the game world.
//!
//! This module defines [`AdventureWorld`], the one owner of every place, item and enemy
//! plus the player. Handlers receive it as `&mut AdventureWorld`; nothing else holds game
//! state.

use crate::item::ItemKind;
use crate::player::{InventoryError, PickupOutcome};
use crate::{ADVENTURE_VERSION, Enemy, Id, Item, Place, Player};

use anyhow::{Result, anyhow};
use log::{info, warn};
use std::collections::HashMap;
use variantly::Variantly;

/// Kinds of places where a `WorldObject` may be located.
/// Consumed items and defeated enemies end up `Nowhere`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Variantly)]
pub enum Location {
    Place(Id),
    Inventory,
    #[default]
    Nowhere,
}

/// Methods common to any object in the world.
pub trait WorldObject {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn location(&self) -> &Location;
}

/// Result of looking a name up in a place: an item or an enemy, by id.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum EntityId {
    Item(Id),
    Enemy(Id),
}

/// Complete state of the running game.
#[derive(Debug, Clone, Default)]
pub struct AdventureWorld {
    pub places: HashMap<Id, Place>,
    pub items: HashMap<Id, Item>,
    pub enemies: HashMap<Id, Enemy>,
    pub player: Player,
    pub version: String,
}
impl AdventureWorld {
    /// Create a new empty world with a default player.
    pub fn new_empty() -> AdventureWorld {
        let world = Self {
            places: HashMap::new(),
            items: HashMap::new(),
            enemies: HashMap::new(),
            player: Player::default(),
            version: ADVENTURE_VERSION.to_string(),
        };
        info!("new, empty 'AdventureWorld' created");
        world
    }

    /// Add a place to the world.
    pub fn add_place(&mut self, place: Place) {
        self.places.insert(place.id.clone(), place);
    }

    /// Put an item into the world, inside the given place.
    ///
    /// # Errors
    /// - if the place does not exist
    pub fn place_item(&mut self, place_id: &str, mut item: Item) -> Result<()> {
        let place = self
            .places
            .get_mut(place_id)
            .ok_or_else(|| anyhow!("cannot put item '{}' in unknown place '{place_id}'", item.id))?;
        place.add_item(item.id.clone());
        item.set_location(Location::Place(place_id.to_string()));
        self.items.insert(item.id.clone(), item);
        Ok(())
    }

    /// Register an item that starts outside of any place (e.g. something only an enemy drops).
    pub fn stash_item(&mut self, mut item: Item) {
        item.set_location(Location::Nowhere);
        self.items.insert(item.id.clone(), item);
    }

    /// Put an enemy into the world, inside the given place.
    ///
    /// # Errors
    /// - if the place does not exist
    pub fn place_enemy(&mut self, place_id: &str, mut enemy: Enemy) -> Result<()> {
        let place = self
            .places
            .get_mut(place_id)
            .ok_or_else(|| anyhow!("cannot put enemy '{}' in unknown place '{place_id}'", enemy.id))?;
        place.add_enemy(enemy.id.clone());
        enemy.location = Location::Place(place_id.to_string());
        self.enemies.insert(enemy.id.clone(), enemy);
        Ok(())
    }

    /// Add a one-way exit between two existing places.
    ///
    /// # Errors
    /// - if either place does not exist
    pub fn connect(&mut self, from: &str, to: &str) -> Result<()> {
        if !self.places.contains_key(to) {
            return Err(anyhow!("exit from '{from}' leads to unknown place '{to}'"));
        }
        self.places
            .get_mut(from)
            .ok_or_else(|| anyhow!("exit starts in unknown place '{from}'"))?
            .add_exit(to.to_string());
        Ok(())
    }

    /// Id of the place the player occupies.
    /// # Errors
    /// - if the player isn't in a place
    pub fn player_place_id(&self) -> Result<&str> {
        match &self.player.location {
            Location::Place(id) => Ok(id.as_str()),
            other => Err(anyhow!("player not in a place - located at {other:?}")),
        }
    }

    /// Obtain a reference to the place the player occupies.
    /// # Errors
    /// - if player isn't in a place or the place's id is not found
    pub fn player_place_ref(&self) -> Result<&Place> {
        let id = self.player_place_id()?;
        self.places
            .get(id)
            .ok_or_else(|| anyhow!("player's place ({id}) not found in world"))
    }

    /// Obtain a mutable reference to the place the player occupies.
    /// # Errors
    /// - if player is not in a place or the place's id is not found
    pub fn player_place_mut(&mut self) -> Result<&mut Place> {
        let id = self.player_place_id()?.to_string();
        self.places
            .get_mut(&id)
            .ok_or_else(|| anyhow!("player's place ({id}) not found in world"))
    }

    /// Display name of any entity by id, or a placeholder if the id is dangling.
    pub fn entity_name(&self, entity: &EntityId) -> &str {
        match entity {
            EntityId::Item(id) => self.items.get(id).map_or("<unknown item>", |item| item.name.as_str()),
            EntityId::Enemy(id) => self.enemies.get(id).map_or("<unknown enemy>", |enemy| enemy.name.as_str()),
        }
    }

    /// Take an item out of whatever place or inventory holds it and leave it `Nowhere`.
    ///
    /// # Errors
    /// - if the item id is unknown
    pub fn detach_item(&mut self, item_id: &str) -> Result<()> {
        let item = self
            .items
            .get_mut(item_id)
            .ok_or_else(|| anyhow!("cannot detach unknown item '{item_id}'"))?;
        match std::mem::take(&mut item.location) {
            Location::Place(place_id) => {
                if let Some(place) = self.places.get_mut(&place_id) {
                    place.remove_item(item_id);
                } else {
                    warn!("item '{item_id}' claimed to be in missing place '{place_id}'");
                }
            },
            Location::Inventory => {
                self.player.inventory.retain(|id| id != item_id);
                if self.player.equipped_weapon.as_deref() == Some(item_id) {
                    self.player.unequip_weapon();
                }
            },
            Location::Nowhere => {},
        }
        Ok(())
    }

    /// Pick up an entity found in the player's place ("equip" at the prompt).
    ///
    /// Weapons become the equipped weapon, health packs are used on the spot, and
    /// everything else is stored in the inventory.
    ///
    /// # Errors
    /// - any [`InventoryError`] if the entity can't be picked up; the world is unchanged.
    pub fn add_to_inventory(&mut self, entity: &EntityId) -> Result<PickupOutcome, InventoryError> {
        let item_id = match entity {
            EntityId::Enemy(_) => {
                return Err(InventoryError::CannotCarryCharacter(self.entity_name(entity).to_string()));
            },
            EntityId::Item(id) => id,
        };
        let item = self
            .items
            .get(item_id)
            .ok_or_else(|| anyhow!("pickup of unknown item '{item_id}'"))?;
        self.player.check_can_add(item)?;

        let place_id = self.player_place_id()?.to_string();
        let in_place = self.places.get(&place_id).is_some_and(|place| place.holds_item(item_id));
        if !in_place {
            return Err(InventoryError::ItemNotInPlace(item.name.clone()));
        }

        let kind = item.kind;
        self.detach_item(item_id)?;
        let item = self
            .items
            .get_mut(item_id)
            .ok_or_else(|| anyhow!("item '{item_id}' vanished during pickup"))?;

        let outcome = match kind {
            ItemKind::HealthPack { heal_amount } => {
                // used up immediately: never occupies an inventory slot
                self.player.health.heal(heal_amount);
                PickupOutcome::Consumed { healed: heal_amount }
            },
            ItemKind::Weapon { damage, .. } => {
                item.set_location(Location::Inventory);
                self.player.inventory.push(item_id.clone());
                self.player.equip_weapon(item_id, damage);
                PickupOutcome::Equipped { damage }
            },
            ItemKind::Key => {
                item.set_location(Location::Inventory);
                self.player.inventory.push(item_id.clone());
                PickupOutcome::Stored
            },
        };
        info!("{} picked up '{}' ({item_id}): {outcome:?}", self.player.name, item.name);
        Ok(outcome)
    }

    /// Take an item out of inventory and leave it in the player's current place ("unequip").
    ///
    /// # Errors
    /// - [`InventoryError::ItemNotInInventory`] if the player doesn't hold the item
    /// - [`InventoryError::NameTakenInPlace`] if an item with the same name already lies here
    pub fn remove_from_inventory(&mut self, item_id: &str) -> Result<(), InventoryError> {
        let name = self
            .items
            .get(item_id)
            .map(|item| item.name.clone())
            .ok_or_else(|| anyhow!("removal of unknown item '{item_id}'"))?;
        if !self.player.holds(item_id) {
            return Err(InventoryError::ItemNotInInventory(name));
        }
        // item names stay unique within a place
        let place = self.player_place_ref()?;
        if place.find_object(self, &name).is_some_and(|found| found.is_item()) {
            info!("{} can't drop '{name}' in {}: name already taken", self.player.name, place.id);
            return Err(InventoryError::NameTakenInPlace(name));
        }
        self.player.remove_from_inventory(item_id, &name)?;

        let place_id = self.player_place_id()?.to_string();
        self.player_place_mut()?.add_item(item_id.to_string());
        if let Some(item) = self.items.get_mut(item_id) {
            item.set_location(Location::Place(place_id.clone()));
        }
        info!("{} dropped '{name}' ({item_id}) in {place_id}", self.player.name);
        Ok(())
    }
}
