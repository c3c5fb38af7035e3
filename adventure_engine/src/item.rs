//! Item types and related helpers.
//!
//! Everything the player can carry is an [`Item`]. What an item *does* is decided by its
//! [`ItemKind`]: weapons change the player's damage, keys open places, and health packs
//! are used up as soon as they're picked up.

use crate::{Id, Location, WorldObject};

use log::info;
use std::fmt::Display;

/// Anything in the world that can be picked up and carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// The stable id of this item, unique across the world.
    pub id: Id,
    /// Display name, normalized to lowercase. Not necessarily unique (two keys may share a name).
    pub name: String,
    /// Text shown by `examine`.
    pub description: String,
    /// Where the item currently is.
    pub location: Location,
    /// What kind of item this is, plus any kind-specific data.
    pub kind: ItemKind,
}

impl WorldObject for Item {
    fn id(&self) -> &str {
        &self.id
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

impl Item {
    /// Create a new item. The name is lowercased so lookups can be case-insensitive.
    pub fn new(id: impl Into<Id>, name: &str, description: &str, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            name: name.to_lowercase(),
            description: description.to_string(),
            location: Location::Nowhere,
            kind,
        }
    }

    /// Shorthand for an equippable weapon.
    pub fn weapon(id: impl Into<Id>, name: &str, description: &str, damage: i32) -> Self {
        Self::new(id, name, description, ItemKind::Weapon { damage, equippable: true })
    }

    /// Shorthand for a weapon that stays hidden and unusable until unlocked.
    pub fn locked_weapon(id: impl Into<Id>, name: &str, description: &str, damage: i32) -> Self {
        Self::new(id, name, description, ItemKind::Weapon { damage, equippable: false })
    }

    /// Shorthand for a key.
    pub fn key(id: impl Into<Id>, name: &str, description: &str) -> Self {
        Self::new(id, name, description, ItemKind::Key)
    }

    /// Shorthand for a health pack.
    pub fn health_pack(id: impl Into<Id>, name: &str, description: &str, heal_amount: i32) -> Self {
        Self::new(id, name, description, ItemKind::HealthPack { heal_amount })
    }

    /// Returns the damage this item deals when equipped, if it is a weapon.
    pub fn weapon_damage(&self) -> Option<i32> {
        match self.kind {
            ItemKind::Weapon { damage, .. } => Some(damage),
            _ => None,
        }
    }

    /// True unless this is a weapon that hasn't been unlocked yet.
    pub fn is_equippable(&self) -> bool {
        match self.kind {
            ItemKind::Weapon { equippable, .. } => equippable,
            _ => true,
        }
    }

    /// Make a locked weapon usable. Has no effect on other kinds of items.
    ///
    /// Returns true if the weapon was locked before this call.
    pub fn unlock(&mut self) -> bool {
        if let ItemKind::Weapon { equippable, .. } = &mut self.kind
            && !*equippable
        {
            *equippable = true;
            info!("weapon '{}' ({}) unlocked", self.name, self.id);
            return true;
        }
        false
    }

    /// Returns the display category of this item.
    pub fn category(&self) -> ItemCategory {
        match self.kind {
            ItemKind::Weapon { .. } => ItemCategory::Weapon,
            ItemKind::Key => ItemCategory::Key,
            ItemKind::HealthPack { .. } => ItemCategory::HealthPack,
        }
    }

    /// Move the item to a new location.
    pub fn set_location(&mut self, location: Location) {
        self.location = location;
    }
}

/// Kind-specific item data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Sets the player's damage while equipped. Locked weapons (`equippable == false`)
    /// can't be picked up and don't show up when looking around.
    Weapon { damage: i32, equippable: bool },
    /// Opens a place that requires it. Matched by item id, never by name.
    Key,
    /// Heals the player by `heal_amount` the moment it is picked up.
    HealthPack { heal_amount: i32 },
}

/// Coarse grouping used to color item names when they're listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCategory {
    Weapon,
    Key,
    HealthPack,
}
impl Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemCategory::Weapon => write!(f, "weapon"),
            ItemCategory::Key => write!(f, "key"),
            ItemCategory::HealthPack => write!(f, "health pack"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_lowercased() {
        let pack = Item::health_pack("elixir", "healthElixir", "a jug of elixir juice", 35);
        assert_eq!(pack.name, "healthelixir");
        assert_eq!(pack.description, "a jug of elixir juice");
    }

    #[test]
    fn unlock_makes_weapon_equippable_once() {
        let mut axe = Item::locked_weapon("axe", "axe", "a heavy weapon", 15);
        assert!(!axe.is_equippable());
        assert!(axe.unlock());
        assert!(axe.is_equippable());
        assert!(!axe.unlock());
        assert!(axe.is_equippable());
    }

    #[test]
    fn unlock_ignores_non_weapons() {
        let mut key = Item::key("key", "key", "a small key");
        assert!(!key.unlock());
        assert_eq!(key.kind, ItemKind::Key);
    }

    #[test]
    fn weapon_damage_only_for_weapons() {
        assert_eq!(Item::weapon("sword", "sword", "sharp", 10).weapon_damage(), Some(10));
        assert_eq!(Item::key("key", "key", "small").weapon_damage(), None);
    }

    #[test]
    fn categories_follow_kind() {
        assert_eq!(Item::weapon("s", "s", "", 1).category(), ItemCategory::Weapon);
        assert_eq!(Item::key("k", "k", "").category(), ItemCategory::Key);
        assert_eq!(Item::health_pack("h", "h", "", 5).category(), ItemCategory::HealthPack);
        assert_eq!(ItemCategory::HealthPack.to_string(), "health pack");
    }
}
