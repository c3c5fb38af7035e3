//! Command module
//!
//! Turns a line of player input into a [`Command`]. Input is lowercased and split on
//! whitespace: the first word is the verb and the rest, re-joined with single spaces, is
//! the name of whatever the verb acts on.
//!
//! Verbs come from a fixed table ([`Verb::ALL`]). A word that isn't in the table gets
//! the nearest verb by edit distance as a suggestion; suggestions are never run.

use crate::distance::closest_match;

use log::warn;
use std::fmt::Display;
use thiserror::Error;
use variantly::Variantly;

/// Every verb the game understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Help,
    Inventory,
    Examine,
    Equip,
    Unequip,
    Goto,
    Attack,
    LookAround,
    Exit,
}
impl Verb {
    /// All verbs, in the order they are listed by `help` and searched for suggestions.
    pub const ALL: [Verb; 9] = [
        Verb::Help,
        Verb::Inventory,
        Verb::Examine,
        Verb::Equip,
        Verb::Unequip,
        Verb::Goto,
        Verb::Attack,
        Verb::LookAround,
        Verb::Exit,
    ];

    /// The word typed at the prompt for this verb.
    pub fn keyword(self) -> &'static str {
        match self {
            Verb::Help => "help",
            Verb::Inventory => "inventory",
            Verb::Examine => "examine",
            Verb::Equip => "equip",
            Verb::Unequip => "unequip",
            Verb::Goto => "goto",
            Verb::Attack => "attack",
            Verb::LookAround => "lookaround",
            Verb::Exit => "exit",
        }
    }

    /// Exact (already lowercased) keyword lookup.
    pub fn from_keyword(word: &str) -> Option<Verb> {
        Verb::ALL.into_iter().find(|verb| verb.keyword() == word)
    }

    /// True for verbs that act on a named object or place.
    pub fn takes_target(self) -> bool {
        matches!(
            self,
            Verb::Examine | Verb::Equip | Verb::Unequip | Verb::Goto | Verb::Attack
        )
    }

    /// Usage line shown by `help`.
    pub fn usage(self) -> &'static str {
        match self {
            Verb::Help => "help",
            Verb::Inventory => "inventory",
            Verb::Examine => "examine [object]",
            Verb::Equip => "equip [object]",
            Verb::Unequip => "unequip [object]",
            Verb::Goto => "goto [place]",
            Verb::Attack => "attack [enemy]",
            Verb::LookAround => "lookaround",
            Verb::Exit => "exit",
        }
    }

    /// One-line description shown by `help`.
    pub fn summary(self) -> &'static str {
        match self {
            Verb::Help => "shows you the list of commands",
            Verb::Inventory => "lists the objects in your inventory",
            Verb::Examine => "examine an object",
            Verb::Equip => "put an object into your inventory",
            Verb::Unequip => "remove an object from your inventory",
            Verb::Goto => "go to a place",
            Verb::Attack => "attack an enemy",
            Verb::LookAround => "look around the place",
            Verb::Exit => "exit the game",
        }
    }
}
impl Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// How a typed verb was matched against the verb table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum Resolution {
    /// The word is a known verb.
    Exact(Verb),
    /// The word isn't known; this is the closest verb.
    Suggested(Verb),
}

/// Match a (lowercased) word to a verb: exactly if possible, otherwise the nearest one.
pub fn resolve_verb(word: &str) -> Resolution {
    if let Some(verb) = Verb::from_keyword(word) {
        return Resolution::Exact(verb);
    }
    let nearest = closest_match(word, Verb::ALL.iter().map(|verb| verb.keyword()))
        .and_then(Verb::from_keyword)
        .unwrap_or(Verb::Help);
    Resolution::Suggested(nearest)
}

/// Commands that are only available in builds with the `dev-mode` feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DevCommand {
    /// Move straight to any place by id.
    Teleport(String),
    /// Put any item straight into the inventory by id.
    Spawn(String),
}

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    /// A known verb plus the (possibly empty) target text.
    Action { verb: Verb, target: String },
    Dev(DevCommand),
    /// Nothing but whitespace was entered.
    Empty,
    /// The verb wasn't recognized.
    Unknown { input: String, suggestion: Verb },
}

/// Parses an input line into a [`Command`].
pub fn parse_command(input: &str) -> Command {
    let lowered = input.to_lowercase();
    if lowered.trim_start().starts_with(':')
        && let Some(dev) = parse_dev_command(lowered.trim_start())
    {
        return Command::Dev(dev);
    }

    let mut words = lowered.split_whitespace();
    let Some(first) = words.next() else {
        return Command::Empty;
    };
    let target = words.collect::<Vec<_>>().join(" ");
    match resolve_verb(first) {
        Resolution::Exact(verb) => Command::Action { verb, target },
        Resolution::Suggested(suggestion) => Command::Unknown {
            input: first.to_string(),
            suggestion,
        },
    }
}

/// Parse `:`-prefixed developer commands.
///
/// Returns `None` for anything that isn't a well-formed developer command.
pub fn parse_dev_command(input: &str) -> Option<DevCommand> {
    let words: Vec<&str> = input.trim_start_matches(':').split_whitespace().collect();
    let command = match words.as_slice() {
        ["teleport" | "port", place_id] => DevCommand::Teleport((*place_id).to_string()),
        ["spawn" | "item", item_id] => DevCommand::Spawn((*item_id).to_string()),
        _ => return None,
    };
    if !crate::DEV_MODE {
        warn!("player attempted developer command '{command:?}' with DEV_MODE = false");
    }
    Some(command)
}

/// Reasons a line of input can't be acted on. Display text is written for the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("You must enter a command!")]
    EmptyInput,
    #[error("Invalid command!")]
    UnknownCommand { input: String, suggestion: Verb },
    #[error("Object not found!")]
    ObjectNotFound(String),
}
