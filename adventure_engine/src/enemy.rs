//! Enemy module
//!
//! Enemies guard places: while any of them is alive in a place, the player can't leave it.
//! Beating one grants extra inventory slots (based on its level) and its drop.

use crate::health::{HealthState, LivingEntity};
use crate::{Id, Location, WorldObject};

/// A hostile character living in a place.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub location: Location,
    pub health: HealthState,
    /// Damage dealt by each of this enemy's blows.
    pub damage: i32,
    /// Item granted to the player when this enemy is defeated.
    pub drop: Id,
}
impl WorldObject for Enemy {
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
impl LivingEntity for Enemy {
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

impl Enemy {
    /// Create an enemy at full health. The name is lowercased for lookups.
    pub fn new(
        id: impl Into<Id>,
        name: &str,
        description: &str,
        max_hp: i32,
        damage: i32,
        drop: impl Into<Id>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.to_lowercase(),
            description: description.to_string(),
            location: Location::Nowhere,
            health: HealthState::new_at_max(max_hp),
            damage,
            drop: drop.into(),
        }
    }

    /// Difficulty score: `floor(damage * 0.1 + max_hp * 0.01)`.
    ///
    /// Also the number of inventory slots awarded for defeating this enemy.
    pub fn level(&self) -> usize {
        let points = self.damage.max(0) * 10 + self.health.max_hp().max(0);
        usize::try_from(points / 100).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_uses_damage_and_max_health() {
        let goblin = Enemy::new("goblin", "goblin", "an angry goblin", 50, 15, "axe");
        assert_eq!(goblin.level(), 2);
        let knight = Enemy::new("knight", "skeletonKnight", "a fearsome skeleton knight", 100, 10, "key");
        assert_eq!(knight.level(), 2);
        let rat = Enemy::new("rat", "rat", "a rat", 15, 5, "cheese");
        assert_eq!(rat.level(), 0);
    }

    #[test]
    fn level_ignores_current_health() {
        let mut goblin = Enemy::new("goblin", "goblin", "an angry goblin", 50, 15, "axe");
        goblin.health.damage(80);
        assert_eq!(goblin.level(), 2);
    }

    #[test]
    fn names_are_lowercased() {
        let knight = Enemy::new("knight", "skeletonKnight", "", 100, 10, "key");
        assert_eq!(knight.name, "skeletonknight");
    }
}
