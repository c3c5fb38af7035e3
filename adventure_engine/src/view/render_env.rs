//! # Render Env(ironment) Module
//!
//! Renderers for the "scene" section of an output frame: where the player is and
//! what they can see there.

use colored::Colorize as _;
use textwrap::fill;

use crate::{
    View, ViewItem,
    style::{GameStyle as _, category_style, indented_block, normal_block},
};

/// Name and description of the player's place.
pub(super) fn place_description(view: &View) {
    if let Some(ViewItem::PlaceDescription { name, description }) = view.items.iter().find_map(|i| match i.view_item {
        ViewItem::PlaceDescription { .. } => Some(&i.view_item),
        _ => None,
    }) {
        println!("{:^width$}", name.place_titlebar_style(), width = view.width);
        println!("{}", fill(description, normal_block()).description_style());
        println!();
    }
}

/// The look-around listing: items colored by kind, then enemies, then exits.
pub(super) fn place_listing(view: &View) {
    if let Some(ViewItem::PlaceListing(listing)) = view.items.iter().find_map(|i| match i.view_item {
        ViewItem::PlaceListing(_) => Some(&i.view_item),
        _ => None,
    }) {
        println!("{}", "You look around and you see:".subheading_style());
        if listing.items.is_empty() && listing.enemies.is_empty() && listing.exits.is_empty() {
            println!("    {}", "nothing at all.".italic().dimmed());
        }
        for item in &listing.items {
            println!("    * {}", category_style(&item.name, item.category));
        }
        for enemy in &listing.enemies {
            println!("    * {}", enemy.enemy_style());
        }
        for exit in &listing.exits {
            println!("    > {}", exit.exit_style());
        }
        println!();
    }
}

pub(super) fn item_detail(view: &View) {
    for entry in &view.items {
        if let ViewItem::ItemDescription { name, description } = &entry.view_item {
            println!("{}", name.item_style().underline());
            println!("{}", fill(description, indented_block()).description_style());
            println!();
        }
    }
}
