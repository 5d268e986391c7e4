//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific I/O, while the generic [`crate::Runtime`] handles all
//! orchestration.
//!
//! The messaging channel and the animation dispatcher are reached only
//! through this trait: the state machines produce typed actions and the
//! driver executes them, so no part of the core holds a transport or a
//! renderer.

use std::future::Future;

use termchat_core::{Animation, ChannelEvent, Message};

use crate::{App, AppAction, Editor};

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. This ensures the
/// same orchestration code runs under the production terminal and in
/// deterministic tests.
///
/// # Implementations
///
/// - **TUI**: crossterm for terminal events, ratatui for rendering, a relay
///   channel for transport
/// - **Tests**: scripted events and recorded effects, no I/O at all
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Poll for the next input event and feed it through the editor or the
    /// app, returning the resulting actions.
    fn poll_event(
        &mut self,
        app: &mut App,
        editor: &mut Editor,
    ) -> impl Future<Output = Result<Vec<AppAction>, Self::Error>> + Send;

    /// Emit a message on the messaging channel. Fire-and-forget; failures
    /// are reported but carry no delivery obligation.
    fn publish(&mut self, message: Message) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Take the next inbound channel event, if one is ready. Must not block.
    fn recv_channel(&mut self) -> impl Future<Output = Option<ChannelEvent>> + Send;

    /// Trigger a playground animation. Fire-and-forget, no return value.
    fn trigger_animation(&mut self, animation: Animation);

    /// Current channel connection signal.
    fn is_connected(&self) -> bool;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App, editor: &Editor) -> Result<(), Self::Error>;

    /// Stop the connection and clean up resources.
    fn stop(&mut self);
}
