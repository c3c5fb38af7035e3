//! View module.
//! This contains the view to the game world / messages.
//! Handlers never print directly. They push `ViewItem`s, which the view organizes by section
//! and displays at the end of the turn.

pub mod icons;
mod render_action;
mod render_env;
mod render_health;
mod render_system;
pub mod view_item;

pub use view_item::{HelpLine, InventoryLine, ViewItem};

use textwrap::termwidth;

use crate::style::GameStyle;

/// View aggregates information to be displayed on each pass through the REPL and then organizes
/// and displays the result.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewEntry>,
    pub sequence: usize,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Create a new empty view.
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
            sequence: 0,
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(ViewEntry {
            section: item.section(),
            view_item: item,
            sequence: self.sequence,
        });
        self.sequence += 1;
    }

    /// Compose and display all message contents in the current frame / turn.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth();

        if self.has_section(Section::Environment) {
            println!("{:.>width$}\n", "scene".section_style(), width = self.width);
            render_env::place_description(self);
            render_env::place_listing(self);
        }
        if self.has_section(Section::DirectResult) {
            println!("{:.>width$}\n", "results".section_style(), width = self.width);
            render_env::item_detail(self);
            render_health::enemy_detail(self);
            render_health::inventory(self);
            render_action::action_success(self);
            render_action::action_failure(self);
            render_action::errors(self);
            render_action::suggestions(self);
        }
        if self.has_section(Section::WorldResponse) {
            println!("{:.>width$}\n", "responses".section_style(), width = self.width);
            render_health::world_responses(&self.entries_in(Section::WorldResponse));
        }
        if self.has_section(Section::System) {
            println!("{:.>width$}\n", "game".section_style(), width = self.width);
            render_system::show_help(self);
            render_system::engine_message(self);
        }

        // clear the buffer for the next turn
        self.reset();

        // create a little space before the next prompt
        println!();
    }

    /// Entries belonging to one section, in the order they were pushed.
    pub fn entries_in(&self, section: Section) -> Vec<&ViewEntry> {
        let mut entries: Vec<&ViewEntry> = self.items.iter().filter(|entry| entry.section == section).collect();
        entries.sort_by_key(|entry| entry.sequence);
        entries
    }

    fn has_section(&self, section: Section) -> bool {
        self.items.iter().any(|entry| entry.section == section)
    }

    /// Clears the View's buffer.
    pub fn reset(&mut self) {
        self.items.clear();
    }
}

/// Subsections of the output.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Section {
    /// Place description and what can be seen there.
    Environment,
    /// Direct results of the player's command.
    DirectResult,
    /// Fights, healing and rewards that follow from the command.
    WorldResponse,
    /// Help and engine messages.
    System,
}

/// A `ViewItem` tagged with its section and the order it arrived in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry {
    pub section: Section,
    pub view_item: ViewItem,
    pub sequence: usize,
}
