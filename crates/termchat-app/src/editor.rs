//! Command-line editor.
//!
//! This module owns all text input state (buffer, cursor, submission history)
//! and handles character-level key events. Submitted lines are handed to
//! [`App::submit`](crate::App::submit) on Enter.
//!
//! History is append-only: Up browses toward older entries without wrapping
//! past the oldest, Down toward newer, and stepping past the newest leaves
//! browsing mode and clears the buffer. Tab completes against the fixed
//! command list when the current buffer prefixes exactly one candidate.

use crate::{App, AppAction, COMMAND_NAMES, KeyInput};

/// Input state for the command line.
#[derive(Debug, Default)]
pub struct Editor {
    /// Text buffer for user input.
    buffer: String,
    /// Byte cursor position within the buffer.
    cursor: usize,
    /// Every submitted line, oldest first.
    history: Vec<String>,
    /// History browse position. `None` = not browsing.
    browse: Option<usize>,
}

impl Editor {
    /// Create a new empty editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text in the input buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Current byte cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Submitted lines, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Handle a key input event.
    ///
    /// Returns actions to process (may be empty for keys that change
    /// nothing, or carry interpreter actions after Enter).
    pub fn handle_key(&mut self, key: KeyInput, app: &mut App) -> Vec<AppAction> {
        match key {
            KeyInput::Char(c) => {
                self.buffer.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                vec![AppAction::Render]
            },
            KeyInput::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                }
                vec![AppAction::Render]
            },
            KeyInput::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                }
                vec![AppAction::Render]
            },
            KeyInput::Left => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                }
                vec![AppAction::Render]
            },
            KeyInput::Right => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
                vec![AppAction::Render]
            },
            KeyInput::Home => {
                self.cursor = 0;
                vec![AppAction::Render]
            },
            KeyInput::End => {
                self.cursor = self.buffer.len();
                vec![AppAction::Render]
            },
            KeyInput::Up => self.history_older(),
            KeyInput::Down => self.history_newer(),
            KeyInput::Tab => self.complete(),
            KeyInput::Enter => self.handle_enter(app),
            KeyInput::Esc => vec![AppAction::Quit],
        }
    }

    /// Handle Enter: record history, clear the buffer, run the interpreter.
    fn handle_enter(&mut self, app: &mut App) -> Vec<AppAction> {
        let line = std::mem::take(&mut self.buffer).trim().to_owned();
        self.cursor = 0;
        self.browse = None;

        if line.is_empty() {
            return vec![];
        }

        self.history.push(line.clone());
        app.submit(&line)
    }

    /// Up arrow: browse toward older entries, clamped at the oldest.
    fn history_older(&mut self) -> Vec<AppAction> {
        if self.history.is_empty() {
            return vec![];
        }

        let index = match self.browse {
            None => self.history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.recall(index)
    }

    /// Down arrow: browse toward newer entries; past the newest clears.
    fn history_newer(&mut self) -> Vec<AppAction> {
        let Some(current) = self.browse else {
            return vec![];
        };

        let next = current + 1;
        if next >= self.history.len() {
            self.browse = None;
            self.buffer.clear();
            self.cursor = 0;
            vec![AppAction::Render]
        } else {
            self.recall(next)
        }
    }

    fn recall(&mut self, index: usize) -> Vec<AppAction> {
        self.browse = Some(index);
        self.buffer = self.history[index].clone();
        self.cursor = self.buffer.len();
        vec![AppAction::Render]
    }

    /// Tab: complete when the buffer prefixes exactly one command name.
    fn complete(&mut self) -> Vec<AppAction> {
        let mut matches = COMMAND_NAMES.iter().filter(|name| name.starts_with(&self.buffer));

        match (matches.next(), matches.next()) {
            (Some(only), None) => {
                self.buffer = format!("{only} ");
                self.cursor = self.buffer.len();
                vec![AppAction::Render]
            },
            // Zero or several matches: no change, no cycling.
            _ => vec![],
        }
    }
}

fn prev_char_boundary(s: &str, from: usize) -> usize {
    s[..from].char_indices().next_back().map_or(0, |(i, _)| i)
}

fn next_char_boundary(s: &str, from: usize) -> usize {
    s[from..].chars().next().map_or(from, |c| from + c.len_utf8())
}
