#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const ADVENTURE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Developer commands (`:port`, `:spawn`) are only honored in builds with the `dev-mode` feature.
pub const DEV_MODE: bool = cfg!(feature = "dev-mode");

/// Stable identifier for places, items and enemies.
pub type Id = String;

// Core modules
pub mod combat;
pub mod command;
pub mod distance;
pub mod enemy;
pub mod health;
pub mod item;
pub mod loader;
pub mod place;
pub mod player;
pub mod repl;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use enemy::Enemy;
pub use item::Item;
pub use loader::load_world;
pub use place::Place;
pub use player::Player;
pub use repl::run_repl;
pub use view::{View, ViewItem};
pub use world::{AdventureWorld, EntityId, Location, WorldObject};
