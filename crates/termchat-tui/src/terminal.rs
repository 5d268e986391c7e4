//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering. The messaging channel is any
//! [`MessageChannel`] implementation; production wiring uses the in-process
//! [`crate::RelayChannel`].

use std::io::{self, Stdout, stdout};
use std::time::Duration;

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use termchat_app::{App, AppAction, AppEvent, Driver, Editor, KeyInput};
use termchat_core::{Animation, ChannelError, ChannelEvent, Message, MessageChannel};
use thiserror::Error;

use crate::{Playground, ui};

/// Tick cadence driving playground frames and idle redraws.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Messaging channel error.
    #[error("channel error: {0}")]
    Channel(#[from] ChannelError),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Handles terminal I/O (crossterm), rendering (ratatui), and the messaging
/// channel. Owns the playground so animation triggers stay local to the
/// shell.
pub struct TerminalDriver<C> {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    channel: C,
    playground: Playground,
}

impl<C: MessageChannel> TerminalDriver<C> {
    /// Create a new terminal driver over the given channel.
    pub fn new(channel: C) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();

        Ok(Self { terminal, event_stream, channel, playground: Playground::new() })
    }

    /// Convert crossterm `KeyCode` to `KeyInput`.
    fn convert_key(code: KeyCode) -> Option<KeyInput> {
        match code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Backspace => Some(KeyInput::Backspace),
            KeyCode::Delete => Some(KeyInput::Delete),
            KeyCode::Tab => Some(KeyInput::Tab),
            KeyCode::Esc => Some(KeyInput::Esc),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            KeyCode::Up => Some(KeyInput::Up),
            KeyCode::Down => Some(KeyInput::Down),
            KeyCode::Home => Some(KeyInput::Home),
            KeyCode::End => Some(KeyInput::End),
            _ => None,
        }
    }
}

impl<C: MessageChannel> Driver for TerminalDriver<C> {
    type Error = TerminalError;

    async fn poll_event(
        &mut self,
        app: &mut App,
        editor: &mut Editor,
    ) -> Result<Vec<AppAction>, Self::Error> {
        tokio::select! {
            biased;

            // Terminal events
            maybe_event = self.event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) if key_event.kind == KeyEventKind::Press => {
                        match Self::convert_key(key_event.code) {
                            Some(key_input) => Ok(editor.handle_key(key_input, app)),
                            None => Ok(vec![]),
                        }
                    },
                    Some(Ok(Event::Resize(cols, rows))) => {
                        Ok(app.handle(AppEvent::Resize(cols, rows)))
                    },
                    Some(Err(e)) => Err(TerminalError::Io(e)),
                    _ => Ok(vec![]),
                }
            }

            // Tick timeout
            () = tokio::time::sleep(TICK_INTERVAL) => {
                self.playground.advance();
                Ok(app.handle(AppEvent::Tick))
            }
        }
    }

    async fn publish(&mut self, message: Message) -> Result<(), Self::Error> {
        self.channel.emit(ChannelEvent::Message { message })?;
        Ok(())
    }

    async fn recv_channel(&mut self) -> Option<ChannelEvent> {
        self.channel.poll()
    }

    fn trigger_animation(&mut self, animation: Animation) {
        self.playground.trigger(animation);
    }

    fn is_connected(&self) -> bool {
        self.channel.is_connected()
    }

    fn render(&mut self, app: &App, editor: &Editor) -> Result<(), Self::Error> {
        let playground = &self.playground;
        self.terminal.draw(|frame| {
            ui::render(frame, app, editor, playground);
        })?;
        Ok(())
    }

    fn stop(&mut self) {}
}

impl<C> Drop for TerminalDriver<C> {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
