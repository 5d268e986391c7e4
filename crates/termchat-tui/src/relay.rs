//! In-process message relay.
//!
//! Stands in for a real chat backend: frames flow through tokio mpsc
//! channels instead of a socket, so the whole channel path is exercised
//! without any network. A networked backend would replace this module and
//! nothing else — the core only sees the [`MessageChannel`] trait.
//!
//! The relay announces one synthetic peer join shortly after startup so the
//! inbound user-joined path runs end to end; outbound messages are accepted
//! and dropped, since there is nobody else in the process to deliver to.

use std::time::Duration;

use termchat_core::{ChannelError, ChannelEvent, MessageChannel, User};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::{TryRecvError, TrySendError};

/// Queue depth for each direction of the relay.
const RELAY_CAPACITY: usize = 32;

/// Delay before the synthetic peer announces itself.
const PEER_JOIN_DELAY: Duration = Duration::from_millis(500);

/// Channel adapter connected to the in-process relay task.
///
/// Dropping the adapter closes the queues and stops the relay.
pub struct RelayChannel {
    to_relay: mpsc::Sender<ChannelEvent>,
    from_relay: mpsc::Receiver<ChannelEvent>,
    abort_handle: tokio::task::AbortHandle,
}

impl RelayChannel {
    /// Spawn the relay task and return the connected adapter.
    pub fn spawn() -> Self {
        let (outbound_tx, mut outbound_rx) = mpsc::channel::<ChannelEvent>(RELAY_CAPACITY);
        let (inbound_tx, inbound_rx) = mpsc::channel::<ChannelEvent>(RELAY_CAPACITY);

        let handle = tokio::spawn(async move {
            tokio::time::sleep(PEER_JOIN_DELAY).await;
            let peer = ChannelEvent::UserJoined { user: User::generate() };
            if inbound_tx.send(peer).await.is_err() {
                return;
            }

            while let Some(event) = outbound_rx.recv().await {
                // No other subscribers in-process: accept and drop.
                match event {
                    ChannelEvent::Message { message } => {
                        tracing::debug!(sender = %message.sender, "relay swallowed message");
                    },
                    ChannelEvent::UserJoined { user } => {
                        tracing::debug!(username = %user.username, "relay swallowed join");
                    },
                }
            }
        });

        Self { to_relay: outbound_tx, from_relay: inbound_rx, abort_handle: handle.abort_handle() }
    }
}

impl MessageChannel for RelayChannel {
    fn emit(&mut self, event: ChannelEvent) -> Result<(), ChannelError> {
        self.to_relay.try_send(event).map_err(|err| match err {
            TrySendError::Closed(_) => ChannelError::Closed,
            TrySendError::Full(_) => ChannelError::Send("relay queue full".to_owned()),
        })
    }

    fn poll(&mut self) -> Option<ChannelEvent> {
        match self.from_relay.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    fn is_connected(&self) -> bool {
        !self.to_relay.is_closed()
    }
}

impl Drop for RelayChannel {
    fn drop(&mut self) {
        self.abort_handle.abort();
    }
}
