// src/session.rs
//! Line-oriented edit session.
//!
//! Mirrors the workflow of a small editing window: open a file, look at the
//! two pre-filled fields, change either of them, then apply.

use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use anyhow::Result;
use file_times_domain::{ApplyOutcome, DISPLAY_PATTERN};
use file_times_ports::TimestampStore;
use file_times_shared_kernel::{PresentationError, PresentationResult};
use file_times_usecase::TimestampEditor;

const PROMPT: &str = "> ";
const HELP: &str = "\
commands:
  open <path>        select a file and load its timestamps
  show               print the pending creation/modification fields
  created <date>     edit the creation field
  modified <date>    edit the modification field
  apply              write both fields to the file
  close              forget the selected file
  help               show this text
  quit               leave the session";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Open(PathBuf),
    Show,
    Created(String),
    Modified(String),
    Apply,
    Close,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse one line; blank lines yield `None`.
    pub fn parse(line: &str) -> PresentationResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };
        let command = match head.to_ascii_lowercase().as_str() {
            "open" => Self::Open(PathBuf::from(required(head, "path", rest)?)),
            "show" => Self::Show,
            "created" => Self::Created(required(head, "date", rest)?.to_string()),
            "modified" => Self::Modified(required(head, "date", rest)?.to_string()),
            "apply" => Self::Apply,
            "close" => Self::Close,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => return Err(PresentationError::UnknownCommand { command: head.to_string() }),
        };
        Ok(Some(command))
    }
}

fn required<'l>(command: &str, argument: &str, value: &'l str) -> PresentationResult<&'l str> {
    if value.is_empty() {
        return Err(PresentationError::MissingArgument { command: command.to_string(), argument: argument.to_string() });
    }
    Ok(value)
}

/// Editor plus the two editable fields shown to the user.
pub struct Session<'a> {
    editor: TimestampEditor<'a>,
    created: String,
    modified: String,
}

impl<'a> Session<'a> {
    pub fn new(store: &'a dyn TimestampStore) -> Self {
        Self { editor: TimestampEditor::new(store), created: String::new(), modified: String::new() }
    }

    /// Read commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<()> {
        writeln!(out, "Date format: {DISPLAY_PATTERN} (type 'help' for commands)")?;
        prompt(&mut out)?;
        for line in input.lines() {
            let line = line?;
            match SessionCommand::parse(&line) {
                Ok(Some(SessionCommand::Quit)) => break,
                Ok(Some(command)) => self.execute(command, &mut out)?,
                Ok(None) => {}
                Err(err) => writeln!(out, "error: {err}")?,
            }
            prompt(&mut out)?;
        }
        writeln!(out)?;
        Ok(())
    }

    pub fn execute(&mut self, command: SessionCommand, out: &mut impl Write) -> Result<()> {
        match command {
            SessionCommand::Open(path) => {
                self.editor.select_file(&path);
                self.reload();
                if let Some(handle) = self.editor.current_file() {
                    writeln!(out, "opened {}", handle.name())?;
                }
                self.show(out)?;
            }
            SessionCommand::Show => self.show(out)?,
            SessionCommand::Created(text) => self.created = text,
            SessionCommand::Modified(text) => self.modified = text,
            SessionCommand::Apply => {
                let outcome = self.editor.apply_dates(&self.created, &self.modified);
                writeln!(out, "{}", outcome.message())?;
                if outcome == ApplyOutcome::Success {
                    self.reload();
                }
            }
            SessionCommand::Close => {
                self.editor.clear_selection();
                self.reload();
                writeln!(out, "No file selected.")?;
            }
            SessionCommand::Help => writeln!(out, "{HELP}")?,
            SessionCommand::Quit => {}
        }
        Ok(())
    }

    /// Pending text of the creation and modification fields.
    pub fn fields(&self) -> (&str, &str) {
        (&self.created, &self.modified)
    }

    fn reload(&mut self) {
        self.created = self.editor.read_created().map(String::from).unwrap_or_default();
        self.modified = self.editor.read_modified().map(String::from).unwrap_or_default();
    }

    fn show(&self, out: &mut impl Write) -> Result<()> {
        match self.editor.current_file() {
            Some(handle) => writeln!(out, "file:      {}", handle.display())?,
            None => writeln!(out, "file:      No File Selected")?,
        }
        writeln!(out, "created:   {}", self.created)?;
        writeln!(out, "modified:  {}", self.modified)?;
        Ok(())
    }
}

fn prompt(out: &mut impl Write) -> std::io::Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush()
}
