//! module Render System
//!
//! Renderers for messages about the game itself rather than its world: the help
//! listing and engine notices.

use colored::Colorize as _;
use textwrap::fill;

use crate::{
    View, ViewItem,
    style::normal_block,
    view::icons::ICON_ENGINE,
};

/// Used for generic messages from the engine.
pub(super) fn engine_message(view: &View) {
    let engine_msgs: Vec<_> = view.items.iter().filter(|i| i.view_item.is_engine_message()).collect();
    for msg in &engine_msgs {
        if let ViewItem::EngineMessage(text) = &msg.view_item {
            println!("{}", fill(format!("{ICON_ENGINE:<4}{text}").as_str(), normal_block()));
        }
    }
    if !engine_msgs.is_empty() {
        println!();
    }
}

pub(super) fn show_help(view: &View) {
    if let Some(ViewItem::Help(commands)) = view.items.iter().find_map(|i| match i.view_item {
        ViewItem::Help(_) => Some(&i.view_item),
        _ => None,
    }) {
        // developer commands are ':'-prefixed
        let (dev_cmds, normal_cmds): (Vec<_>, Vec<_>) = commands.iter().partition(|c| c.usage.starts_with(':'));

        println!("{}", "Available commands:".bold().yellow());
        println!();
        for command in &normal_cmds {
            let formatted_line = format!("{} - {}", command.usage.bold().green(), command.description.italic());
            println!("{}", fill(&formatted_line, normal_block()));
        }

        if !dev_cmds.is_empty() {
            println!();
            println!("{}", "Developer Commands (DEV_MODE):".bold().yellow());
            println!();
            for command in &dev_cmds {
                let formatted_line = format!("{} - {}", command.usage.bold().green(), command.description.italic());
                println!("{}", fill(&formatted_line, normal_block()));
            }
        }
        println!();
    }
}
