//! ViewItem module
//!
//! A `ViewItem` is sent to the `View`, which collects them during a turn and renders them
//! by section once the command has been handled.

use variantly::Variantly;

use crate::health::HealthState;
use crate::item::ItemCategory;
use crate::place::PlaceListing;
use crate::view::Section;

/// Each kind of information or message that may be shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    ActionFailure(String),
    ActionSuccess(String),
    CharacterDeath {
        name: String,
        cause: String,
        is_player: bool,
    },
    CharacterHarmed {
        name: String,
        cause: String,
        amount: i32,
        health: HealthState,
    },
    CharacterHealed {
        name: String,
        cause: String,
        amount: i32,
        health: HealthState,
    },
    EnemyDescription {
        name: String,
        description: String,
        health: HealthState,
    },
    EngineMessage(String),
    Error(String),
    Help(Vec<HelpLine>),
    Inventory {
        lines: Vec<InventoryLine>,
        capacity: usize,
        health: HealthState,
    },
    InventoryUpgraded(usize),
    ItemDescription {
        name: String,
        description: String,
    },
    ItemLooted(String),
    PlaceDescription {
        name: String,
        description: String,
    },
    PlaceListing(PlaceListing),
    Suggestion(String),
    WeaponUnlocked(String),
}
impl ViewItem {
    /// Classify a view item into a top-level output section.
    pub fn section(&self) -> Section {
        match self {
            ViewItem::PlaceDescription { .. } | ViewItem::PlaceListing(_) => Section::Environment,
            ViewItem::ActionSuccess(_)
            | ViewItem::ActionFailure(_)
            | ViewItem::Error(_)
            | ViewItem::Suggestion(_)
            | ViewItem::ItemDescription { .. }
            | ViewItem::EnemyDescription { .. }
            | ViewItem::Inventory { .. } => Section::DirectResult,
            ViewItem::CharacterHarmed { .. }
            | ViewItem::CharacterHealed { .. }
            | ViewItem::CharacterDeath { .. }
            | ViewItem::InventoryUpgraded(_)
            | ViewItem::WeaponUnlocked(_)
            | ViewItem::ItemLooted(_) => Section::WorldResponse,
            ViewItem::Help(_) | ViewItem::EngineMessage(_) => Section::System,
        }
    }
}

/// Row data for the inventory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryLine {
    pub name: String,
    pub category: ItemCategory,
    pub equipped: bool,
}

/// One command in the help listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpLine {
    pub usage: String,
    pub description: String,
}
