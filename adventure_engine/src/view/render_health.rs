//! module Render Health
//!
//! Renderers for anything involving health: enemy details, the inventory/status
//! readout, and the blow-by-blow account of a fight with its rewards.

use colored::Colorize as _;
use textwrap::fill;

use crate::{
    View, ViewItem,
    health::HealthState,
    style::{GameStyle as _, category_style, health_bar_style, indented_block, normal_block},
    view::ViewEntry,
    view::icons::{ICON_DEATH, ICON_HARMED, ICON_HEALED, ICON_POSITIVE, ICON_UNLOCKED, ICON_VICTORY},
};

/// Colored health bar followed by the numbers, e.g. `[██████      ] 30/100`.
pub(super) fn health_readout(health: &HealthState) -> String {
    let bar = health.bar();
    format!(
        "[{}] {}/{}",
        health_bar_style(&bar.cells(), &bar),
        health.current_hp(),
        health.max_hp()
    )
}

pub(super) fn enemy_detail(view: &View) {
    for entry in &view.items {
        if let ViewItem::EnemyDescription {
            name,
            description,
            health,
        } = &entry.view_item
        {
            println!("{}", name.enemy_style().underline());
            println!("{}", fill(description, indented_block()).description_style());
            println!("   Health: {}", health_readout(health));
            println!();
        }
    }
}

pub(super) fn inventory(view: &View) {
    if let Some(ViewItem::Inventory {
        lines,
        capacity,
        health,
    }) = view.items.iter().find_map(|i| match i.view_item {
        ViewItem::Inventory { .. } => Some(&i.view_item),
        _ => None,
    }) {
        println!("{} ({}/{}):", "Inventory".subheading_style(), lines.len(), capacity);
        if lines.is_empty() {
            println!("   {}", "You have... nothing at all.".italic().dimmed());
        } else {
            for line in lines {
                let marker = if line.equipped { " (equipped)".dimmed().to_string() } else { String::new() };
                println!("   * {}{marker}", category_style(&line.name, line.category));
            }
        }
        println!("   Health: {}", health_readout(health));
        println!();
    }
}

/// Renders fight and reward messages in the order they happened.
pub(super) fn world_responses(entries: &[&ViewEntry]) {
    for entry in entries {
        match &entry.view_item {
            ViewItem::CharacterHarmed {
                name,
                cause,
                amount,
                health,
            } => println!(
                "{:<4}{} attacks {}! (-{} hp) {}",
                ICON_HARMED.bright_yellow(),
                cause.highlight(),
                name.highlight(),
                amount.to_string().bright_red(),
                health_readout(health)
            ),
            ViewItem::CharacterHealed {
                name,
                cause,
                amount,
                health,
            } => println!(
                "{:<4}{} healed by the {}! (+{} hp) {}",
                ICON_HEALED.bright_blue(),
                name.highlight(),
                cause.health_pack_style(),
                amount.to_string().bright_green(),
                health_readout(health)
            ),
            ViewItem::CharacterDeath { name, cause, is_player } => {
                let line = if *is_player {
                    format!("{:<4}You were defeated by {}!", ICON_DEATH.red(), cause.enemy_style())
                } else {
                    format!("{:<4}You defeated {}!", ICON_VICTORY.bright_green(), name.enemy_style())
                };
                println!("{}", fill(&line, normal_block()));
            },
            ViewItem::InventoryUpgraded(slots) => println!(
                "{:<4}Inventory size increased by {} slots!",
                ICON_POSITIVE.bright_green(),
                slots.to_string().highlight()
            ),
            ViewItem::WeaponUnlocked(name) => println!(
                "{:<4}You can now equip {}!",
                ICON_UNLOCKED.bright_blue(),
                name.weapon_style()
            ),
            ViewItem::ItemLooted(name) => {
                println!("{:<4}You picked up {}!", ICON_POSITIVE.bright_green(), name.item_style());
            },
            _ => {},
        }
    }
    println!();
}
