//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.
//! Outbound channel traffic and animation triggers leave the interpreter as
//! typed actions; nothing is broadcast through ambient signals.

use termchat_core::{Animation, Message};

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Emit a message on the messaging channel.
    Publish {
        /// The message to emit. Already appended to the local log.
        message: Message,
    },

    /// Trigger a playground animation.
    Animate {
        /// The animation to start.
        animation: Animation,
    },
}
