//! Chat messages and session users.
//!
//! [`Message`] is the single record type flowing through the whole system:
//! user-authored chat lines, system confirmations, and inbound channel
//! traffic are all the same shape and land in the same append-only log.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Sender name used for interpreter-authored messages.
pub const SYSTEM_SENDER: &str = "system";

/// Last issued message id value.
///
/// Ids are the creation instant in milliseconds, bumped past any previously
/// issued id. This keeps them unique and ordered even when several messages
/// are created within the same millisecond.
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn fresh_id(timestamp: DateTime<Utc>) -> String {
    let millis = timestamp.timestamp_millis();
    let mut current = LAST_ID.load(Ordering::Relaxed);
    loop {
        let candidate = millis.max(current.saturating_add(1));
        match LAST_ID.compare_exchange_weak(
            current,
            candidate,
            Ordering::Relaxed,
            Ordering::Relaxed,
        ) {
            Ok(_) => return candidate.to_string(),
            Err(observed) => current = observed,
        }
    }
}

/// A chat message.
///
/// Messages are append-only: once constructed they are never mutated or
/// removed, and their insertion order is their display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique, monotonic-ish identifier derived from the creation instant.
    pub id: String,
    /// Message body.
    pub content: String,
    /// Username of the author, or [`SYSTEM_SENDER`].
    pub sender: String,
    /// Creation instant.
    pub timestamp: DateTime<Utc>,
    /// Render the content as large ASCII art instead of plain text.
    pub is_ascii: bool,
}

impl Message {
    /// Create a message with a fresh id and the current timestamp.
    pub fn new(sender: impl Into<String>, content: impl Into<String>, is_ascii: bool) -> Self {
        let timestamp = Utc::now();
        Self {
            id: fresh_id(timestamp),
            content: content.into(),
            sender: sender.into(),
            timestamp,
            is_ascii,
        }
    }

    /// Create a system message reporting a command outcome.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(SYSTEM_SENDER, content, false)
    }

    /// Whether this message was authored by the interpreter itself.
    pub fn is_system(&self) -> bool {
        self.sender == SYSTEM_SENDER
    }
}

/// A chat participant.
///
/// Created once at session start and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque session-unique identifier.
    pub id: String,
    /// Display name.
    pub username: String,
    /// Presence flag carried on the wire.
    pub is_online: bool,
}

impl User {
    /// Create a user with the given name and a random id.
    pub fn named(username: impl Into<String>) -> Self {
        let mut rng = rand::thread_rng();
        let id: String = (0..9).map(|_| random_base36(&mut rng)).collect();
        Self { id, username: username.into(), is_online: true }
    }

    /// Generate an auto-login user with a `user<N>` name, `N` in 0..1000.
    pub fn generate() -> Self {
        let n: u16 = rand::thread_rng().gen_range(0..1000);
        Self::named(format!("user{n}"))
    }
}

fn random_base36(rng: &mut impl Rng) -> char {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let idx = rng.gen_range(0..ALPHABET.len());
    ALPHABET[idx] as char
}
