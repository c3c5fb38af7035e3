//! Terminal input handling for the game's REPL.
//!
//! Reads one line per turn and hands back a parsed [`Command`]. Interactive terminals
//! get a rustyline editor that completes verbs and the names of things in the world;
//! anything else is read as plain stdin.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::AdventureWorld;
use crate::command::{Command, Verb, parse_command};
use crate::style::GameStyle;

/// One turn's worth of input.
#[derive(Debug, PartialEq, Eq)]
pub enum PlayerInput {
    Command(Command),
    /// Ctrl-C: the line was thrown away.
    Canceled,
}

/// Raw outcome of reading a line, before it means anything to the game.
#[derive(Debug, PartialEq, Eq)]
enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

impl From<InputEvent> for PlayerInput {
    fn from(event: InputEvent) -> Self {
        match event {
            InputEvent::Line(line) => PlayerInput::Command(parse_command(&line)),
            // end of input leaves the game the same way `exit` does
            InputEvent::Eof => PlayerInput::Command(Command::Action {
                verb: Verb::Exit,
                target: String::new(),
            }),
            InputEvent::Interrupted => PlayerInput::Canceled,
        }
    }
}

const DEV_COMMANDS: &[&str] = &[":port", ":teleport", ":spawn", ":item"];

type ReplEditor = rustyline::Editor<AdventureHelper, DefaultHistory>;

/// Completion source: verbs for the first word, world names after it.
#[derive(Debug, Default)]
struct AdventureHelper {
    verbs: Vec<String>,
    targets: Vec<String>,
}

impl AdventureHelper {
    fn new(targets: Vec<String>) -> Self {
        let mut verbs: Vec<String> = Verb::ALL.iter().map(|verb| verb.keyword().to_string()).collect();
        if crate::DEV_MODE {
            verbs.extend(DEV_COMMANDS.iter().map(ToString::to_string));
        }
        let mut targets: Vec<String> = targets.into_iter().map(|t| t.to_lowercase()).collect();
        targets.sort_unstable();
        targets.dedup();
        Self { verbs, targets }
    }

    /// Every place, item and enemy name the player might type after a verb.
    fn for_world(world: &AdventureWorld) -> Self {
        let names = world
            .places
            .values()
            .map(|place| place.name.clone())
            .chain(world.items.values().map(|item| item.name.clone()))
            .chain(world.enemies.values().map(|enemy| enemy.name.clone()))
            .collect();
        Self::new(names)
    }

    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let (start, prefix) = current_word(line, pos);
        let first_word = line[..start].trim().is_empty();
        let pool = if first_word { &self.verbs } else { &self.targets };
        if prefix.is_empty() && first_word {
            return (start, Vec::new());
        }
        let lower = prefix.to_lowercase();
        let matches = pool.iter().filter(|term| term.starts_with(&lower)).cloned().collect();
        (start, matches)
    }
}

impl Helper for AdventureHelper {}

impl Completer for AdventureHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, terms) = self.candidates(line, pos);
        let pairs = terms
            .into_iter()
            .map(|term| Pair {
                display: term.clone(),
                replacement: term,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for AdventureHelper {
    type Hint = String;
}

impl Highlighter for AdventureHelper {}

impl Validator for AdventureHelper {}

/// Start offset and text of the word under the cursor.
fn current_word(line: &str, pos: usize) -> (usize, &str) {
    let slice = &line[..pos];
    let start = slice
        .char_indices()
        .rev()
        .find(|(_, ch)| ch.is_whitespace())
        .map_or(0, |(idx, ch)| idx + ch.len_utf8());
    (start, &slice[start..])
}

/// Reads the player's commands, one per turn.
///
/// Uses rustyline on an interactive terminal and plain stdin otherwise, or after the
/// editor fails.
pub struct InputManager {
    editor: Option<Box<GameEditor>>,
    prompt: String,
}

impl InputManager {
    /// Set up input for a game in `world`; its names are offered for completion.
    pub fn for_world(world: &AdventureWorld) -> Self {
        let editor = if io::stdin().is_terminal() {
            match GameEditor::new(AdventureHelper::for_world(world)) {
                Ok(editor) => {
                    info!("using rustyline-backed REPL input");
                    Some(Box::new(editor))
                },
                Err(err) => {
                    warn!("failed to initialize rustyline ({err}), falling back to basic stdin");
                    None
                },
            }
        } else {
            info!("stdin is not a TTY; using basic input mode");
            None
        };
        Self {
            editor,
            prompt: "> ".prompt_style().to_string(),
        }
    }

    /// Read and parse the next line.
    ///
    /// If the editor reports an unrecoverable error, it is dropped for good and the line
    /// is read again from plain stdin.
    ///
    /// # Errors
    /// - if reading from plain stdin fails
    pub fn next_input(&mut self) -> io::Result<PlayerInput> {
        if let Some(editor) = self.editor.as_mut() {
            match editor.read_line(&self.prompt) {
                Ok(event) => return Ok(event.into()),
                Err(err) => {
                    warn!("rustyline input failed: {err} -- switching to basic stdin");
                    self.editor = None;
                },
            }
        }
        read_plain_line(&self.prompt).map(PlayerInput::from)
    }
}

/// rustyline editor plus the file its history is kept in.
struct GameEditor {
    editor: ReplEditor,
    history_path: Option<PathBuf>,
}

impl GameEditor {
    fn new(helper: AdventureHelper) -> io::Result<Self> {
        let mut editor = ReplEditor::new().map_err(readline_to_io)?;
        editor.set_helper(Some(helper));
        let history_path = history_file_path();

        if let Some(path) = history_path.as_ref() {
            if let Some(dir) = path.parent()
                && let Err(err) = fs::create_dir_all(dir)
            {
                warn!("failed to create history directory {}: {err}", dir.display());
            }
            match editor.load_history(path) {
                Ok(()) => {},
                Err(ReadlineError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                    info!("no command history at {} yet", path.display());
                },
                Err(err) => warn!("failed to load history from {}: {err}", path.display()),
            }
        }

        Ok(Self { editor, history_path })
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        let line = match self.editor.readline(prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => return Ok(InputEvent::Interrupted),
            Err(ReadlineError::Eof) => return Ok(InputEvent::Eof),
            Err(err) => return Err(readline_to_io(err)),
        };
        // only real commands go into the history
        if !line.trim().is_empty() {
            if let Err(err) = self.editor.add_history_entry(line.as_str()) {
                warn!("failed to append to history: {err}");
            }
            if let Some(path) = self.history_path.as_ref()
                && let Err(err) = self.editor.save_history(path)
            {
                warn!("failed to persist history to {}: {err}", path.display());
            }
        }
        Ok(InputEvent::Line(line))
    }
}

fn read_plain_line(prompt: &str) -> io::Result<InputEvent> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(InputEvent::Eof);
    }
    Ok(InputEvent::Line(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn readline_to_io(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(io_err) => io_err,
        other => io::Error::other(other),
    }
}

fn history_file_path() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| build_history_path(&base))
}

fn build_history_path(base: &Path) -> PathBuf {
    base.join(env!("CARGO_PKG_NAME")).join("history.txt")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load_world;

    fn helper() -> AdventureHelper {
        AdventureHelper::new(vec!["room2".into(), "Sword".into(), "skeletonKnight".into(), "sword".into()])
    }

    #[test]
    fn end_of_input_exits_and_ctrl_c_cancels() {
        assert_eq!(
            PlayerInput::from(InputEvent::Eof),
            PlayerInput::Command(Command::Action {
                verb: Verb::Exit,
                target: String::new(),
            })
        );
        assert_eq!(PlayerInput::from(InputEvent::Interrupted), PlayerInput::Canceled);
    }

    #[test]
    fn lines_are_parsed_into_commands() {
        assert_eq!(
            PlayerInput::from(InputEvent::Line("attack Goblin".into())),
            PlayerInput::Command(Command::Action {
                verb: Verb::Attack,
                target: "goblin".into(),
            })
        );
    }

    #[test]
    fn history_lives_under_the_crate_name() {
        let path = build_history_path(Path::new("/tmp/adventure-test"));
        assert!(path.ends_with(Path::new("adventure_engine/history.txt")));
    }

    #[test]
    fn world_names_are_offered_for_completion() {
        let world = load_world().unwrap();
        let helper = AdventureHelper::for_world(&world);
        for name in ["room2", "sword", "skeletonknight", "healthcrate"] {
            assert!(helper.targets.iter().any(|n| n == name), "missing {name}");
        }
        // both keys share one entry
        assert_eq!(helper.targets.iter().filter(|n| *n == "key").count(), 1);
    }

    #[test]
    fn first_word_completes_verbs() {
        let (start, terms) = helper().candidates("un", 2);
        assert_eq!(start, 0);
        assert_eq!(terms, vec!["unequip".to_string()]);
        let (_, terms) = helper().candidates("e", 1);
        assert_eq!(terms, vec!["examine".to_string(), "equip".to_string(), "exit".to_string()]);
    }

    #[test]
    fn later_words_complete_world_names() {
        let (start, terms) = helper().candidates("attack sk", 9);
        assert_eq!(start, 7);
        assert_eq!(terms, vec!["skeletonknight".to_string()]);
        let (_, terms) = helper().candidates("equip S", 7);
        assert_eq!(terms, vec!["skeletonknight".to_string(), "sword".to_string()]);
    }

    #[test]
    fn wide_whitespace_splits_words_on_char_boundaries() {
        // U+00A0 is two bytes in UTF-8
        let line = "equip\u{a0}sw";
        assert_eq!(current_word(line, line.len()), (7, "sw"));
        let (start, terms) = helper().candidates(line, line.len());
        assert_eq!(start, 7);
        assert_eq!(terms, vec!["sword".to_string()]);
    }

    #[test]
    fn empty_line_offers_nothing() {
        let (_, terms) = helper().candidates("", 0);
        assert!(terms.is_empty());
    }
}
