//! Application state machine.
//!
//! This module defines the [`App`] state machine: the view controller and
//! command interpreter for the terminal chat, completely decoupled from I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! submitted input lines, and produces [`crate::AppAction`] instructions for
//! the runtime to execute.
//!
//! # Responsibilities
//!
//! - Owns the append-only message and draft logs.
//! - Tracks the current view, room, theme, and session user.
//! - Interprets submitted input lines (slash commands, the `figlet ` send
//!   prefix, plain-text drafts).
//! - Mirrors the channel's connection signal for UI feedback.

use termchat_core::{Animation, Message, Theme, User, default_theme, lookup_theme, theme_names};

use crate::{AppAction, AppEvent, Command};

/// The sidebar's display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Show the chat message log.
    #[default]
    Chat,
    /// Show the draft list.
    Draft,
}

/// The `figlet ` send prefix: exactly seven characters, case-sensitive,
/// trailing space required.
const SEND_PREFIX: &str = "figlet ";

/// Static help text shown by `/help`.
const HELP_TEXT: &str = "Available commands:
figlet [text] - Send message to chat (prefix required)
/d - Toggle between chat and draft view
/c [friend] - Open friend's chat
/meow - Show ASCII cat in playground
/nyan - Nyan cat animation in playground
/fire - Fire animation in playground
/train - Train animation in playground
/themes - List available themes
/theme [name] - Change terminal theme
/join [room] - Join chat room
/help - Show this help

Note: Messages without 'figlet' prefix are saved to drafts";

/// Application state machine.
///
/// Pure state machine that processes events and input lines. No I/O
/// dependencies - fully testable without a terminal or a transport.
#[derive(Debug, Clone)]
pub struct App {
    /// Current sidebar view.
    view: View,
    /// Current room name.
    room: String,
    /// Active theme, by reference into the closed registry.
    theme: &'static Theme,
    /// Session user. Set exactly once, before any command is accepted.
    user: Option<User>,
    /// Append-only chat log. All origins land here in processing order.
    messages: Vec<Message>,
    /// Append-only draft list.
    drafts: Vec<String>,
    /// Mirror of the channel's connection signal.
    connected: bool,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a fresh App: chat view, room `general`, default theme, no user.
    pub fn new() -> Self {
        Self {
            view: View::Chat,
            room: "general".to_owned(),
            theme: default_theme(),
            user: None,
            messages: Vec::new(),
            drafts: Vec::new(),
            connected: false,
            terminal_size: (80, 24),
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            // Keys are routed through the editor, not the state machine.
            AppEvent::Key(_) => vec![],
            AppEvent::Tick => vec![AppAction::Render],
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::ChannelUp => {
                self.connected = true;
                vec![AppAction::Render]
            },
            AppEvent::ChannelDown => {
                self.connected = false;
                vec![AppAction::Render]
            },
            AppEvent::MessageReceived { message } => {
                self.push_message(message);
                vec![AppAction::Render]
            },
            AppEvent::UserJoined { username } => {
                self.push_message(Message::system(format!("{username} joined the chat")));
                vec![AppAction::Render]
            },
        }
    }

    /// Interpret a submitted input line.
    ///
    /// The line must already be trimmed and non-empty. Dispatch order: no
    /// session user rejects silently; a leading `/` dispatches a command; the
    /// literal `figlet ` prefix sends a plain message; anything else is saved
    /// as a draft.
    pub fn submit(&mut self, line: &str) -> Vec<AppAction> {
        let Some(user) = self.user.clone() else {
            tracing::debug!("input before session start dropped");
            return vec![];
        };

        if let Some(rest) = line.strip_prefix('/') {
            return self.run_command(Command::parse(rest));
        }

        if let Some(content) = line.strip_prefix(SEND_PREFIX) {
            let message = Message::new(user.username, content, false);
            self.push_message(message.clone());
            return vec![AppAction::Publish { message }, AppAction::Render];
        }

        self.drafts.push(line.to_owned());
        self.push_message(Message::system(format!("Message saved to drafts: \"{line}\"")));
        vec![AppAction::Render]
    }

    /// Dispatch a parsed slash command.
    fn run_command(&mut self, command: Command) -> Vec<AppAction> {
        match command {
            Command::ToggleDraft => {
                if self.view == View::Draft {
                    self.view = View::Chat;
                    self.push_message(Message::system("Switched to chat view"));
                } else {
                    self.view = View::Draft;
                    self.push_message(Message::system("Switched to draft messages"));
                }
                vec![AppAction::Render]
            },
            Command::OpenChat { friend: Some(friend) } => {
                self.room = friend.clone();
                self.view = View::Chat;
                self.push_message(Message::system(format!("Opened chat with {friend}")));
                vec![AppAction::Render]
            },
            Command::OpenChat { friend: None } => {
                self.push_message(Message::system("Usage: /c [friend_name]"));
                vec![AppAction::Render]
            },
            Command::Figlet { words } if !words.is_empty() => {
                // Sender is present: submit() already checked the session.
                let sender = self.user.as_ref().map(|u| u.username.clone()).unwrap_or_default();
                let message = Message::new(sender, words.join(" "), true);
                self.push_message(message.clone());
                vec![AppAction::Publish { message }, AppAction::Render]
            },
            Command::Figlet { .. } => {
                self.push_message(Message::system("Usage: /figlet [your message]"));
                vec![AppAction::Render]
            },
            Command::Themes => {
                let list: Vec<_> = theme_names().collect();
                self.push_message(Message::system(format!(
                    "Available themes: {}",
                    list.join(", ")
                )));
                vec![AppAction::Render]
            },
            Command::Theme { name: Some(name) } => {
                if let Some(theme) = lookup_theme(&name) {
                    self.theme = theme;
                    self.push_message(Message::system(format!("Theme changed to {name}")));
                } else {
                    self.push_message(Message::system(
                        "Invalid theme. Use /themes to see available options.",
                    ));
                }
                vec![AppAction::Render]
            },
            Command::Theme { name: None } => {
                self.push_message(Message::system(
                    "Invalid theme. Use /themes to see available options.",
                ));
                vec![AppAction::Render]
            },
            Command::Join { room: Some(room) } => {
                self.room = room.clone();
                self.push_message(Message::system(format!("Joined room: {room}")));
                vec![AppAction::Render]
            },
            // Missing room is a silent no-op.
            Command::Join { room: None } => vec![],
            Command::Draft => {
                self.view = View::Draft;
                self.push_message(Message::system("Switched to draft view"));
                vec![AppAction::Render]
            },
            Command::Chat => {
                self.view = View::Chat;
                self.push_message(Message::system("Switched to chat view"));
                vec![AppAction::Render]
            },
            Command::Meow => self.animate(Animation::Cat, "Meow! ASCII cat appeared in playground"),
            Command::Nyan => {
                self.animate(Animation::Nyan, "Nyan cat is flying in the playground!")
            },
            Command::Fire => self.animate(Animation::Fire, "Fire is burning in the playground!"),
            Command::Train => {
                self.animate(Animation::Train, "Choo choo! Train is moving in playground")
            },
            Command::Help => {
                self.push_message(Message::system(HELP_TEXT));
                vec![AppAction::Render]
            },
            Command::Unknown { name } => {
                tracing::debug!(command = %name, "unknown command");
                self.push_message(Message::system(format!(
                    "Unknown command: {name}. Type /help for available commands."
                )));
                vec![AppAction::Render]
            },
        }
    }

    fn animate(&mut self, animation: Animation, note: &str) -> Vec<AppAction> {
        self.push_message(Message::system(note));
        vec![AppAction::Animate { animation }, AppAction::Render]
    }

    /// Set the session user. Accepted once; later calls are ignored.
    pub fn login(&mut self, user: User) {
        if self.user.is_none() {
            tracing::info!(username = %user.username, "session started");
            self.user = Some(user);
        }
    }

    /// Append a message to the chat log.
    ///
    /// The single append path for every origin: local sends, system
    /// confirmations, and inbound channel traffic.
    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Append a draft.
    pub fn push_draft(&mut self, draft: impl Into<String>) {
        self.drafts.push(draft.into());
    }

    /// Set the sidebar view.
    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// Set the current room.
    pub fn set_room(&mut self, room: impl Into<String>) {
        self.room = room.into();
    }

    /// Set the active theme.
    pub fn set_theme(&mut self, theme: &'static Theme) {
        self.theme = theme;
    }

    /// Current sidebar view.
    pub fn view(&self) -> View {
        self.view
    }

    /// Current room name.
    pub fn room(&self) -> &str {
        &self.room
    }

    /// Active theme.
    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    /// Session user, if the session has started.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The chat log, in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The draft list, in insertion order.
    pub fn drafts(&self) -> &[String] {
        &self.drafts
    }

    /// Channel connection indicator.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}
