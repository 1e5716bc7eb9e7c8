//! Interactive browse session.
//!
//! Drives a [`GalleryNavigator`] from a line-oriented command stream (a
//! terminal, a pipe, or a script file) and prints the resulting view after
//! every change. This is the same event loop a browser runs for the
//! lightbox: one command in, one synchronous transition, one re-render.
//!
//! ```text
//! filter portrait     set the category filter (labels from config work too)
//! open 3              open the lightbox on artwork #3
//! next | n            next artwork in the filtered list (wraps)
//! prev | p            previous artwork (wraps)
//! zoom                toggle zoom
//! pointer 0.2 0.8     move the zoom focus (fractions, clamped)
//! key Escape          send a key: Escape, ArrowLeft, ArrowRight
//! close               close the lightbox
//! view                print the current view
//! json                print the current view as JSON
//! help                list commands
//! quit                end the session
//! ```
//!
//! Bad input prints an error line and the session continues.

use crate::config::LabelsConfig;
use crate::navigator::{GalleryNavigator, Key, PointerFraction};
use crate::output;
use std::io::{BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{0}' needs {1}")]
    MissingArgument(&'static str, &'static str),
    #[error("'{0}' is not a number")]
    InvalidNumber(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Filter(String),
    Open(u32),
    Close,
    Next,
    Prev,
    Zoom,
    Pointer(f64, f64),
    Key(Key),
    View,
    Json,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines and `#` comments parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "filter" | "f" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("filter", "a category"));
                }
                Command::Filter(rest.to_string())
            }
            "open" | "o" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("open", "an artwork id"));
                }
                Command::Open(parse_number(rest)?)
            }
            "close" | "c" => Command::Close,
            "next" | "n" => Command::Next,
            "prev" | "previous" | "p" => Command::Prev,
            "zoom" | "z" => Command::Zoom,
            "pointer" => {
                let mut parts = rest.split_whitespace();
                let (Some(x), Some(y)) = (parts.next(), parts.next()) else {
                    return Err(CommandError::MissingArgument("pointer", "x and y fractions"));
                };
                Command::Pointer(parse_number(x)?, parse_number(y)?)
            }
            "key" | "k" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("key", "a key name"));
                }
                Command::Key(Key::parse(rest))
            }
            "view" | "v" => Command::View,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(verb.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_number<T: std::str::FromStr>(s: &str) -> Result<T, CommandError> {
    s.parse()
        .map_err(|_| CommandError::InvalidNumber(s.to_string()))
}

const HELP: &str = "\
Commands:
  filter <category>   set the category filter
  open <id>           open the lightbox on an artwork
  next | prev         step through the filtered list
  zoom                toggle zoom
  pointer <x> <y>     move the zoom focus (0.0-1.0)
  key <name>          Escape, ArrowLeft or ArrowRight
  close               close the lightbox
  view | json         print the current view
  quit                end the session";

/// Apply one command. Returns whether the view changed.
pub fn apply(nav: &mut GalleryNavigator, labels: &LabelsConfig, command: &Command) -> bool {
    match command {
        Command::Filter(name) => {
            let filter = labels.parse_filter(name);
            let changed = *nav.active_category() != filter;
            nav.set_category(filter);
            changed
        }
        Command::Open(id) => nav.open(*id),
        Command::Close => nav.close(),
        Command::Next => nav.next(),
        Command::Prev => nav.previous(),
        Command::Zoom => nav.toggle_zoom(),
        Command::Pointer(x, y) => nav.update_pointer(PointerFraction::new(*x, *y)),
        Command::Key(key) => nav.handle_key(*key),
        Command::View | Command::Json | Command::Help | Command::Quit => false,
    }
}

/// Run commands from `input` until EOF or `quit`, writing views to `out`.
pub fn run_session<R: BufRead, W: Write>(
    nav: &mut GalleryNavigator,
    labels: &LabelsConfig,
    input: R,
    out: &mut W,
) -> Result<(), SessionError> {
    for line in input.lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };
        tracing::debug!(?command, "session command");

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Json => {
                let json = serde_json::to_string_pretty(&nav.view())?;
                writeln!(out, "{json}")?;
            }
            Command::View => write_view(nav, labels, out)?,
            ref other => {
                if apply(nav, labels, other) {
                    write_view(nav, labels, out)?;
                } else {
                    writeln!(out, "(no change)")?;
                }
            }
        }
    }
    Ok(())
}

fn write_view<W: Write>(
    nav: &GalleryNavigator,
    labels: &LabelsConfig,
    out: &mut W,
) -> Result<(), SessionError> {
    for line in output::format_view(&nav.view(), labels) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
