//! Terminal UI for termchat
//!
//! A thin shell over [`termchat_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`termchat_app::Runtime`];
//! this crate handles rendering, keyboard events, the animation playground,
//! and the in-process relay standing in for a real transport.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod playground;
pub mod relay;
pub mod terminal;
pub mod ui;

pub use playground::Playground;
pub use relay::RelayChannel;
pub use termchat_app::{App, AppAction, AppEvent, Driver, Editor, KeyInput, Runtime};
pub use terminal::{TerminalDriver, TerminalError};
