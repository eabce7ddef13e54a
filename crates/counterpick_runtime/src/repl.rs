//! The command REPL.
//!
//! Each line is one command that drives the [`Session`] the way a pointer
//! would: drags by token, clicks on entities and containers, and set/slot
//! edits. Destructive commands ask for confirmation through the editor
//! unless auto-confirm is on.

use std::fmt::Write as _;
use std::io::{self, Write};

use counterpick_engine::Container;
use counterpick_foundation::{EntityId, Error, Result};
use counterpick_storage::{Direction, SetId, SlotId};

use crate::confirm::{Confirm, Prompt};
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;
use crate::share::{Clipboard, MemoryClipboard};
use crate::store::KeyValueStore;

const HELP: &str = "\
Commands:
  show                          Print every set
  json                          Print the render model as JSON
  pool SET                      List the pool of a set
  drag SRC [DEST|-]             Drag a token onto another (- or nothing: outside)
  click entity SET ID           Select or deselect an entity
  click slot SET SLOT           Move the selection into a slot
  click pool SET                Return the selection to the pool
  set add                       Append a set
  set rm|up|down SET            Delete or move a set
  set rename SET [NAME...]      Rename a set (blank restores the default)
  slot add SET AFTER [LABEL...] Insert a slot after another
  slot rm|up|down SET SLOT      Delete or move a slot
  slot rename SET SLOT LABEL... Relabel a slot
  share                         Print a share link
  keep                          Discard the shared roster and reload your own
  adopt                         Save the shared roster over your own
  reset                         Delete every set and the saved data
  quit                          Exit";

/// The interactive REPL.
pub struct Repl<S: KeyValueStore, E: LineEditor = RustylineEditor> {
    /// The line editor for input and confirmations.
    editor: E,

    /// Roster session.
    session: Session<S>,

    /// Receives share links.
    clipboard: Box<dyn Clipboard>,

    /// Fixed answer to every confirmation, if set.
    auto_confirm: Option<bool>,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl<S: KeyValueStore> Repl<S, RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session<S>) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<S: KeyValueStore, E: LineEditor> Repl<S, E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E, session: Session<S>) -> Self {
        Self {
            editor,
            session,
            clipboard: Box::new(MemoryClipboard::new()),
            auto_confirm: None,
            show_banner: true,
            prompt: "counterpick> ".to_string(),
        }
    }

    /// Answers every confirmation with `answer` instead of asking.
    #[must_use]
    pub fn with_auto_confirm(mut self, answer: bool) -> Self {
        self.auto_confirm = Some(answer);
        self
    }

    /// Sets where share links are delivered.
    #[must_use]
    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session<S> {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session<S> {
        &mut self.session
    }

    /// Returns the editor.
    #[must_use]
    pub const fn editor(&self) -> &E {
        &self.editor
    }

    /// Runs the REPL loop until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(true),
            ReadResult::Eof => return Ok(false),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }
        self.editor.add_history(trimmed);

        if matches!(trimmed, "quit" | "exit") {
            return Ok(false);
        }

        match self.eval(trimmed) {
            Ok(output) if output.is_empty() => {}
            Ok(output) => println!("{output}"),
            Err(e) => print_error(&e),
        }
        Ok(true)
    }

    /// Evaluates one command and returns its output.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands, bad arguments, and failed
    /// shares. Rejected moves and edits are not errors.
    pub fn eval(&mut self, line: &str) -> Result<String> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => Ok(String::new()),
            ["help"] => Ok(HELP.to_string()),
            ["show"] => Ok(self.render()),
            ["json"] => self.session.view().to_json(),
            ["pool", set] => self.pool(&set_id(set)?),
            ["drag", source] | ["drag", source, "-"] => Ok(self.drag(source, None)),
            ["drag", source, destination] => Ok(self.drag(source, Some(*destination))),
            ["click", rest @ ..] => self.click(rest),
            ["set", rest @ ..] => self.edit_set(rest),
            ["slot", rest @ ..] => self.edit_slot(rest),
            ["share"] => self.session.share(&mut *self.clipboard),
            ["keep"] => Ok(report(self.session.keep_own_data(), "Showing your own data.")),
            ["adopt"] => {
                let mut confirm = EditorConfirm::new(&mut self.editor, self.auto_confirm);
                let adopted = self.session.adopt_preview(&mut confirm);
                Ok(report(adopted, "Shared data saved."))
            }
            ["reset"] => {
                let mut confirm = EditorConfirm::new(&mut self.editor, self.auto_confirm);
                let reset = self.session.reset(&mut confirm);
                Ok(report(reset, "All sets deleted."))
            }
            [command, ..] => Err(Error::usage(format!(
                "unknown command or arguments: {command} (try `help`)"
            ))),
        }
    }

    fn drag(&mut self, source: &str, destination: Option<&str>) -> String {
        self.session.on_drag_start(source);
        let moved = self.session.on_drag_end(destination);
        report(moved, "Moved.")
    }

    fn click(&mut self, args: &[&str]) -> Result<String> {
        match args {
            ["entity", set, entity] => {
                self.session.on_entity_click(&set_id(set)?, entity_id(entity)?);
                Ok(self.describe_selection())
            }
            ["slot", set, slot] => {
                let container = Container::Slot(slot_id(slot)?);
                let moved = self.session.on_container_click(&set_id(set)?, &container);
                Ok(self.after_click(moved))
            }
            ["pool", set] => {
                let moved = self.session.on_container_click(&set_id(set)?, &Container::Pool);
                Ok(self.after_click(moved))
            }
            _ => Err(Error::usage(
                "usage: click entity SET ID | click slot SET SLOT | click pool SET",
            )),
        }
    }

    fn after_click(&self, moved: bool) -> String {
        if moved {
            "Moved.".to_string()
        } else {
            self.describe_selection()
        }
    }

    fn edit_set(&mut self, args: &[&str]) -> Result<String> {
        let changed = match args {
            ["add"] => {
                let id = self.session.add_set();
                return Ok(format!("Added set {id}."));
            }
            ["rm", set] => {
                let mut confirm = EditorConfirm::new(&mut self.editor, self.auto_confirm);
                self.session.delete_set(&set_id(set)?, &mut confirm)?
            }
            ["up", set] => self.session.move_set(&set_id(set)?, Direction::Up)?,
            ["down", set] => self.session.move_set(&set_id(set)?, Direction::Down)?,
            ["rename", set, name @ ..] => {
                self.session.rename_set(&set_id(set)?, &name.join(" "))?
            }
            _ => {
                return Err(Error::usage(
                    "usage: set add | set rm|up|down SET | set rename SET [NAME...]",
                ));
            }
        };
        Ok(report(changed, "Done."))
    }

    fn edit_slot(&mut self, args: &[&str]) -> Result<String> {
        let changed = match args {
            ["add", set, after, label @ ..] => {
                let added = self.session.add_slot_after(
                    &set_id(set)?,
                    &slot_id(after)?,
                    &label.join(" "),
                )?;
                return Ok(added.map_or_else(
                    || "No change.".to_string(),
                    |id| format!("Added slot {id}."),
                ));
            }
            ["rm", set, slot] => {
                let mut confirm = EditorConfirm::new(&mut self.editor, self.auto_confirm);
                self.session.delete_slot(&set_id(set)?, &slot_id(slot)?, &mut confirm)?
            }
            ["up", set, slot] => {
                self.session.move_slot(&set_id(set)?, &slot_id(slot)?, Direction::Up)?
            }
            ["down", set, slot] => {
                self.session.move_slot(&set_id(set)?, &slot_id(slot)?, Direction::Down)?
            }
            ["rename", set, slot, label @ ..] => {
                self.session.rename_slot(&set_id(set)?, &slot_id(slot)?, &label.join(" "))?
            }
            _ => {
                return Err(Error::usage(
                    "usage: slot add SET AFTER [LABEL...] | slot rm|up|down SET SLOT \
                     | slot rename SET SLOT LABEL...",
                ));
            }
        };
        Ok(report(changed, "Done."))
    }

    fn pool(&self, set: &SetId) -> Result<String> {
        let roster = self.session.roster();
        let catalog = roster.catalog();
        let pool = roster.pool(set)?;
        let mut out = String::new();
        for &id in &pool {
            if let Some(entity) = catalog.get(id) {
                let _ = writeln!(out, "{:>4} {}", id.get(), entity.name);
            }
        }
        let _ = write!(out, "{} in pool", pool.len());
        Ok(out)
    }

    fn render(&self) -> String {
        let roster = self.session.roster();
        let catalog = roster.catalog();
        let selection = self.session.selection();
        let mut out = String::new();

        if self.session.is_previewing() {
            out.push_str("\x1b[33mPreviewing shared data (keep / adopt)\x1b[0m\n");
        }
        if roster.is_empty() {
            out.push_str("No sets. Use `set add`.");
            return out;
        }

        for (index, set) in roster.sets().iter().enumerate() {
            let _ = writeln!(
                out,
                "\x1b[1m[{}] {}\x1b[0m",
                set.id(),
                set.display_name(index, roster.labels())
            );
            for slot in set.slots() {
                let members: Vec<String> = slot
                    .members()
                    .iter()
                    .map(|&id| {
                        let name = catalog.get(id).map_or("?", |e| e.name.as_str());
                        let selected =
                            selection.is_some_and(|s| &s.set == set.id() && s.entity == id);
                        let marker = if selected { "*" } else { "" };
                        format!("{marker}{name}({})", id.get())
                    })
                    .collect();
                let _ = writeln!(out, "  {} {}: {}", slot.id(), slot.label(), members.join(", "));
            }
            let _ = writeln!(out, "  pool: {} entities", set.pool(catalog).len());
        }
        out.trim_end().to_string()
    }

    fn describe_selection(&self) -> String {
        match self.session.selection() {
            Some(selection) => {
                let name = self
                    .session
                    .roster()
                    .catalog()
                    .get(selection.entity)
                    .map_or("?", |e| e.name.as_str());
                format!("Selected {name}({}) in {}.", selection.entity.get(), selection.set)
            }
            None => "Nothing selected.".to_string(),
        }
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mcounterpick\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Type `help` for commands. Use Ctrl+D to exit.\n");

        let _ = io::stdout().flush();
    }
}

/// Asks through the line editor, or answers with a fixed value.
struct EditorConfirm<'a, E: LineEditor> {
    editor: &'a mut E,
    answer: Option<bool>,
}

impl<'a, E: LineEditor> EditorConfirm<'a, E> {
    fn new(editor: &'a mut E, answer: Option<bool>) -> Self {
        Self { editor, answer }
    }
}

impl<E: LineEditor> Confirm for EditorConfirm<'_, E> {
    fn confirm(&mut self, prompt: &Prompt) -> bool {
        if let Some(answer) = self.answer {
            return answer;
        }
        match self.editor.read_line(&format!("{prompt} [y/N] ")) {
            Ok(ReadResult::Line(line)) => {
                matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
            }
            _ => false,
        }
    }
}

fn report(changed: bool, message: &str) -> String {
    if changed {
        message.to_string()
    } else {
        "No change.".to_string()
    }
}

fn set_id(raw: &str) -> Result<SetId> {
    SetId::new(raw)
}

fn slot_id(raw: &str) -> Result<SlotId> {
    SlotId::new(raw)
}

fn entity_id(raw: &str) -> Result<EntityId> {
    raw.parse().map_err(|_| Error::invalid_identifier(raw))
}

fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}
