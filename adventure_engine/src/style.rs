//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};
use textwrap::{Options, termwidth};

use crate::health::HealthBar;
use crate::item::ItemCategory;

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn item_style(&self) -> ColoredString;
    fn weapon_style(&self) -> ColoredString;
    fn key_style(&self) -> ColoredString;
    fn health_pack_style(&self) -> ColoredString;
    fn enemy_style(&self) -> ColoredString;
    fn exit_style(&self) -> ColoredString;
    fn place_style(&self) -> ColoredString;
    fn place_titlebar_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn highlight(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn denied_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn section_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn item_style(&self) -> ColoredString {
        self.white()
    }
    fn weapon_style(&self) -> ColoredString {
        self.blue()
    }
    fn key_style(&self) -> ColoredString {
        self.yellow()
    }
    fn health_pack_style(&self) -> ColoredString {
        self.green()
    }
    fn enemy_style(&self) -> ColoredString {
        self.red()
    }
    fn exit_style(&self) -> ColoredString {
        self.truecolor(255, 165, 0)
    }
    fn place_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10)
    }
    fn place_titlebar_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn prompt_style(&self) -> ColoredString {
        self.bold().truecolor(150, 150, 150)
    }
    fn highlight(&self) -> ColoredString {
        self.bold().truecolor(230, 230, 30)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn denied_style(&self) -> ColoredString {
        self.italic().truecolor(230, 30, 30)
    }
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
    fn section_style(&self) -> ColoredString {
        let bracketed = format!("[{self}]");
        bracketed.truecolor(75, 80, 75)
    }
}

impl GameStyle for String {
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn weapon_style(&self) -> ColoredString {
        self.as_str().weapon_style()
    }
    fn key_style(&self) -> ColoredString {
        self.as_str().key_style()
    }
    fn health_pack_style(&self) -> ColoredString {
        self.as_str().health_pack_style()
    }
    fn enemy_style(&self) -> ColoredString {
        self.as_str().enemy_style()
    }
    fn exit_style(&self) -> ColoredString {
        self.as_str().exit_style()
    }
    fn place_style(&self) -> ColoredString {
        self.as_str().place_style()
    }
    fn place_titlebar_style(&self) -> ColoredString {
        self.as_str().place_titlebar_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn highlight(&self) -> ColoredString {
        self.as_str().highlight()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn denied_style(&self) -> ColoredString {
        self.as_str().denied_style()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
    fn section_style(&self) -> ColoredString {
        self.as_str().section_style()
    }
}

/// Style an item name by its category.
pub fn category_style(name: &str, category: ItemCategory) -> ColoredString {
    match category {
        ItemCategory::Weapon => name.weapon_style(),
        ItemCategory::Key => name.key_style(),
        ItemCategory::HealthPack => name.health_pack_style(),
    }
}

/// Paint text in a health bar's color.
pub fn health_bar_style(text: &str, bar: &HealthBar) -> ColoredString {
    text.truecolor(bar.red, bar.green, bar.blue)
}

/// Wrapping options for ordinary paragraphs at the current terminal width.
pub fn normal_block() -> Options<'static> {
    Options::new(termwidth())
}

/// Wrapping options for paragraphs indented under a heading.
pub fn indented_block() -> Options<'static> {
    Options::new(termwidth()).initial_indent("   ").subsequent_indent("   ")
}
