//! Messaging channel capability.
//!
//! [`MessageChannel`] is the pluggable publish/subscribe seam between the
//! application core and whatever transport carries chat traffic. The core
//! never talks to a socket directly: it emits events fire-and-forget and
//! polls for inbound ones, with a boolean connection signal and no delivery
//! guarantee.
//!
//! Two implementations ship with the workspace: [`MockChannel`] here (pure
//! in-memory queues, used by tests) and the tui crate's relay adapter over
//! tokio channels. A networked backend would add a third without touching
//! the core.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Message, User};

/// Events carried on the messaging channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum ChannelEvent {
    /// A chat message.
    Message {
        /// The message record, serialized as the payload.
        message: Message,
    },
    /// A user joined the chat.
    UserJoined {
        /// The joining user.
        user: User,
    },
}

/// Errors raised by channel adapters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChannelError {
    /// The channel's peer is gone.
    #[error("channel closed")]
    Closed,
    /// The adapter could not hand the event to its transport.
    #[error("send failed: {0}")]
    Send(String),
}

/// Fire-and-forget publish/subscribe transport for chat traffic.
pub trait MessageChannel: Send {
    /// Emit an event. No acknowledgement, no delivery guarantee.
    fn emit(&mut self, event: ChannelEvent) -> Result<(), ChannelError>;

    /// Take the next inbound event, if one is ready. Never blocks.
    fn poll(&mut self) -> Option<ChannelEvent>;

    /// Current connection status signal.
    fn is_connected(&self) -> bool;
}

/// In-memory channel stub.
///
/// Emitted events accumulate for inspection; inbound events are injected by
/// the test and drained through [`MessageChannel::poll`]. Nothing ever leaves
/// the process.
#[derive(Debug, Default)]
pub struct MockChannel {
    connected: bool,
    sent: Vec<ChannelEvent>,
    inbound: VecDeque<ChannelEvent>,
}

impl MockChannel {
    /// Create a connected mock channel.
    pub fn new() -> Self {
        Self { connected: true, sent: Vec::new(), inbound: VecDeque::new() }
    }

    /// Create a mock channel reporting as disconnected.
    pub fn disconnected() -> Self {
        Self { connected: false, ..Self::new() }
    }

    /// Flip the connection status signal.
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Queue an inbound event for the next [`MessageChannel::poll`].
    pub fn inject(&mut self, event: ChannelEvent) {
        self.inbound.push_back(event);
    }

    /// Everything emitted so far, in emission order.
    pub fn sent(&self) -> &[ChannelEvent] {
        &self.sent
    }
}

impl MessageChannel for MockChannel {
    fn emit(&mut self, event: ChannelEvent) -> Result<(), ChannelError> {
        if !self.connected {
            return Err(ChannelError::Closed);
        }
        self.sent.push(event);
        Ok(())
    }

    fn poll(&mut self) -> Option<ChannelEvent> {
        self.inbound.pop_front()
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_records_in_order() {
        let mut channel = MockChannel::new();
        channel.emit(ChannelEvent::Message { message: Message::new("alice", "one", false) }).unwrap();
        channel.emit(ChannelEvent::Message { message: Message::new("alice", "two", true) }).unwrap();

        let contents: Vec<_> = channel
            .sent()
            .iter()
            .map(|event| match event {
                ChannelEvent::Message { message } => message.content.clone(),
                ChannelEvent::UserJoined { user } => user.username.clone(),
            })
            .collect();
        assert_eq!(contents, ["one", "two"]);
    }

    #[test]
    fn disconnected_emit_is_closed() {
        let mut channel = MockChannel::disconnected();
        let err = channel.emit(ChannelEvent::Message { message: Message::system("x") });
        assert_eq!(err, Err(ChannelError::Closed));
        assert!(!channel.is_connected());
    }

    #[test]
    fn poll_drains_injected_events_fifo() {
        let mut channel = MockChannel::new();
        assert!(channel.poll().is_none());

        channel.inject(ChannelEvent::UserJoined { user: User::named("bob") });
        channel.inject(ChannelEvent::Message { message: Message::new("bob", "hi", false) });

        assert!(matches!(channel.poll(), Some(ChannelEvent::UserJoined { .. })));
        assert!(matches!(channel.poll(), Some(ChannelEvent::Message { .. })));
        assert!(channel.poll().is_none());
    }

    #[test]
    fn events_serialize_with_tag() {
        let event = ChannelEvent::UserJoined { user: User::named("bob") };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event\":\"user-joined\""));
    }
}
