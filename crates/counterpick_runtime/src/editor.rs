//! Line editor abstraction for the REPL.
//!
//! The REPL reads through [`LineEditor`] so the interactive rustyline editor
//! can be swapped for a [`ScriptedEditor`] in batch runs and tests.

use std::borrow::Cow;
use std::collections::VecDeque;

use counterpick_foundation::{Error, ErrorKind, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

/// Result of reading a line from the editor.
#[derive(Debug, PartialEq, Eq)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D, or the script ran out.
    Eof,
}

/// Source of input lines.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);
}

/// Top-level commands offered for completion.
pub const COMMANDS: &[&str] = &[
    "help", "show", "json", "pool", "drag", "click", "set", "slot", "share", "keep", "adopt",
    "reset", "quit",
];

const SET_COMMANDS: &[&str] = &["add", "rm", "up", "down", "rename"];
const CLICK_COMMANDS: &[&str] = &["entity", "slot", "pool"];

#[derive(Helper, Completer, Hinter, Validator)]
struct CommandHelper {
    #[rustyline(Completer)]
    completer: CommandCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for CommandHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        false
    }
}

/// Completes command words by position.
struct CommandCompleter;

impl CommandCompleter {
    fn candidates(line: &str, pos: usize) -> (usize, Vec<&'static str>) {
        let head = &line[..pos];
        let start = head.rfind(char::is_whitespace).map_or(0, |i| i + 1);
        let word = &head[start..];
        let previous: Vec<&str> = head[..start].split_whitespace().collect();

        let words: &[&'static str] = match previous.as_slice() {
            [] => COMMANDS,
            ["set" | "slot"] => SET_COMMANDS,
            ["click"] => CLICK_COMMANDS,
            _ => &[],
        };
        let matches = words.iter().copied().filter(|w| w.starts_with(word)).collect();
        (start, matches)
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = Self::candidates(line, pos);
        let pairs = words
            .into_iter()
            .map(|w| Pair {
                display: w.to_string(),
                replacement: w.to_string(),
            })
            .collect();
        Ok((start, pairs))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<CommandHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?
            .build();

        let helper = CommandHelper {
            completer: CommandCompleter,
            hinter: HistoryHinter::new(),
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Io(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

/// Replays a fixed list of lines, then reports EOF.
#[derive(Debug, Default)]
pub struct ScriptedEditor {
    lines: VecDeque<String>,
    history: Vec<String>,
    echo: bool,
}

impl ScriptedEditor {
    /// Creates an editor that will return `lines` in order.
    pub fn new<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            history: Vec::new(),
            echo: false,
        }
    }

    /// Creates an editor from a script, one command per line.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    #[must_use]
    pub fn from_script(script: &str) -> Self {
        Self::new(
            script
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        )
    }

    /// Prints each line after its prompt as it is read.
    #[must_use]
    pub fn echoing(mut self) -> Self {
        self.echo = true;
        self
    }

    /// Returns the lines added to history so far.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.lines.pop_front() {
            Some(line) => {
                if self.echo {
                    println!("{prompt}{line}");
                }
                Ok(ReadResult::Line(line))
            }
            None => Ok(ReadResult::Eof),
        }
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }
}
