//! Health Module
//!
//! Handles health for living entities (the player and enemies) and the proportional
//! health bar shown whenever someone's health changes.
//!
//! Health is signed: a heavy blow can push it below zero, and anything at or below zero
//! counts as defeated. Healing is not capped at the maximum.

use crate::WorldObject;

/// Number of cells in a rendered health bar.
pub const HEALTH_BAR_WIDTH: usize = 20;

/// Represents the state of a living entity's health.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HealthState {
    max_hp: i32,
    current_hp: i32,
}
impl HealthState {
    /// Create a `HealthState` at full health.
    pub fn new_at_max(max_hp: i32) -> HealthState {
        HealthState {
            max_hp,
            current_hp: max_hp,
        }
    }

    /// Get the maximum HP for this entity
    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    /// Get the current HP for this entity. May be negative after a lethal blow.
    pub fn current_hp(&self) -> i32 {
        self.current_hp
    }

    /// Return whether this entity is alive or dead.
    pub fn life_state(&self) -> LifeState {
        if self.current_hp > 0 {
            LifeState::Alive
        } else {
            LifeState::Dead
        }
    }

    /// Do damage to health. Does not stop at zero.
    pub fn damage(&mut self, amount: i32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    /// Heal the entity. Not capped at max health.
    pub fn heal(&mut self, amount: i32) {
        self.current_hp = self.current_hp.saturating_add(amount);
    }

    /// Fraction of max health remaining, clamped to `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        if self.current_hp <= 0 || self.max_hp <= 0 {
            return 0.0;
        }
        (f64::from(self.current_hp) / f64::from(self.max_hp)).min(1.0)
    }

    /// Layout of the health bar for the current health.
    pub fn bar(&self) -> HealthBar {
        HealthBar::from_fraction(self.fraction())
    }
}

/// Abilities common to game entities that are alive and can fight.
pub trait LivingEntity: WorldObject {
    fn health(&self) -> &HealthState;
    fn health_mut(&mut self) -> &mut HealthState;
    /// Damage dealt by one of this entity's blows.
    fn attack_damage(&self) -> i32;

    fn life_state(&self) -> LifeState {
        self.health().life_state()
    }
    fn is_defeated(&self) -> bool {
        self.life_state() == LifeState::Dead
    }
}

/// Possible life states for living entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeState {
    Alive,
    Dead,
}

/// A fixed-width bar showing the share of health left, and the color to draw it in.
///
/// The color slides from pure red (empty) to pure green (full).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthBar {
    /// Number of filled cells, `0..=HEALTH_BAR_WIDTH`.
    pub filled: usize,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}
impl HealthBar {
    /// Build a bar for a health fraction. Values outside `0.0..=1.0` are clamped.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn from_fraction(fraction: f64) -> HealthBar {
        let fraction = fraction.clamp(0.0, 1.0);
        let filled = ((fraction * HEALTH_BAR_WIDTH as f64).floor() as usize).min(HEALTH_BAR_WIDTH);
        HealthBar {
            filled,
            red: (255.0 * (1.0 - fraction)) as u8,
            green: (255.0 * fraction) as u8,
            blue: 0,
        }
    }

    /// The bar itself: filled cells followed by blanks, always `HEALTH_BAR_WIDTH` wide.
    pub fn cells(&self) -> String {
        let mut bar = "█".repeat(self.filled);
        bar.push_str(&" ".repeat(HEALTH_BAR_WIDTH - self.filled));
        bar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_can_go_below_zero() {
        let mut state = HealthState::new_at_max(15);
        state.damage(10);
        assert_eq!(state.current_hp(), 5);
        assert_eq!(state.life_state(), LifeState::Alive);
        state.damage(10);
        assert_eq!(state.current_hp(), -5);
        assert_eq!(state.life_state(), LifeState::Dead);
    }

    #[test]
    fn exactly_zero_is_dead() {
        let mut state = HealthState::new_at_max(10);
        state.damage(10);
        assert_eq!(state.life_state(), LifeState::Dead);
    }

    #[test]
    fn heal_is_not_capped() {
        let mut state = HealthState::new_at_max(100);
        state.damage(10);
        state.heal(15);
        assert_eq!(state.current_hp(), 105);
        assert_eq!(state.max_hp(), 100);
    }

    #[test]
    fn fraction_is_clamped() {
        let mut state = HealthState::new_at_max(100);
        state.heal(50);
        assert!((state.fraction() - 1.0).abs() < f64::EPSILON);
        state.damage(200);
        assert!(state.fraction().abs() < f64::EPSILON);
    }

    #[test]
    fn full_bar_is_green() {
        let bar = HealthState::new_at_max(100).bar();
        assert_eq!(bar.filled, HEALTH_BAR_WIDTH);
        assert_eq!((bar.red, bar.green, bar.blue), (0, 255, 0));
    }

    #[test]
    fn empty_bar_is_red() {
        let mut state = HealthState::new_at_max(100);
        state.damage(120);
        let bar = state.bar();
        assert_eq!(bar.filled, 0);
        assert_eq!((bar.red, bar.green, bar.blue), (255, 0, 0));
        assert_eq!(bar.cells(), " ".repeat(HEALTH_BAR_WIDTH));
    }

    #[test]
    fn half_bar_is_half_filled() {
        let mut state = HealthState::new_at_max(50);
        state.damage(25);
        let bar = state.bar();
        assert_eq!(bar.filled, 10);
        assert_eq!(bar.red, 127);
        assert_eq!(bar.green, 127);
        assert_eq!(bar.cells().chars().count(), HEALTH_BAR_WIDTH);
    }

    #[test]
    fn overhealed_bar_stays_in_bounds() {
        let mut state = HealthState::new_at_max(100);
        state.heal(35);
        assert_eq!(state.bar().cells().chars().count(), HEALTH_BAR_WIDTH);
    }
}
