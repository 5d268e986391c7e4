//! Application layer for termchat
//!
//! Pure state machines for the terminal chat UI, completely decoupled from
//! terminal I/O and transport mechanics:
//!
//! - [`App`]: view controller and command interpreter (chat/draft logs,
//!   room, theme, session user)
//! - [`Editor`]: command-line editor (buffer, history, tab completion)
//! - [`Driver`]: trait for platform-specific I/O abstraction
//! - [`Runtime`]: generic orchestration loop using Driver
//!
//! Everything observable happens through `handle(event) -> Vec<AppAction>`
//! style transitions, so the same code is testable in plain unit tests and
//! runs unmodified under the real terminal shell.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod command;
mod driver;
mod editor;
mod event;
mod input;
mod runtime;

pub use action::AppAction;
pub use app::{App, View};
pub use command::{Command, COMMAND_NAMES};
pub use driver::Driver;
pub use editor::Editor;
pub use event::AppEvent;
pub use input::KeyInput;
pub use runtime::Runtime;
