//! Application input events.
//!
//! This module defines [`AppEvent`], the full set of inputs that drive the
//! [`crate::App`] state machine.
//!
//! Events originate from two distinct sources:
//! - User interactions (keyboard, resize) and periodic ticks.
//! - Messaging channel notifications translated by the runtime.

use termchat_core::Message;

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Periodic tick.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// The messaging channel came up.
    ChannelUp,

    /// The messaging channel went down.
    ChannelDown,

    /// Message received from the channel.
    MessageReceived {
        /// The inbound message record.
        message: Message,
    },

    /// A user joined the chat.
    UserJoined {
        /// Display name of the joining user.
        username: String,
    },
}
