//! Core data model for termchat
//!
//! Plain data types and capability traits shared by the application state
//! machines and the terminal shell: messages and users, the theme registry,
//! animation names, and the pluggable [`MessageChannel`] transport seam.
//!
//! This crate is deliberately I/O-free. Everything here is constructible and
//! inspectable in plain unit tests; transports and terminals live upstack.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod channel;
mod message;
mod theme;

pub use animation::Animation;
pub use channel::{ChannelError, ChannelEvent, MessageChannel, MockChannel};
pub use message::{Message, User, SYSTEM_SENDER};
pub use theme::{Theme, default_theme, lookup_theme, theme_names};
