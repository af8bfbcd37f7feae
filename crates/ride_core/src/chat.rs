//! In-ride chat messages and viewer-relative read state.
//!
//! Unread counts are derived from the message list on every call instead of
//! being kept as separate counter state, so the count can never drift from
//! the messages it describes. The read flag only ever moves false→true.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A `messages` table row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub ride_id: String,
    pub sender_id: String,
    pub content: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// A message is unread for a viewer iff it is unread and the viewer did
    /// not send it. A sender's own messages are never unread for them.
    pub fn is_unread_for(&self, viewer_id: &str) -> bool {
        !self.read && self.sender_id != viewer_id
    }
}

/// Unread messages in `ride_id`'s chat from the viewer's perspective.
pub fn unread_count(messages: &[ChatMessage], ride_id: &str, viewer_id: &str) -> usize {
    messages
        .iter()
        .filter(|message| message.ride_id == ride_id && message.is_unread_for(viewer_id))
        .count()
}

/// Ids a mark-as-read call would flip: what the app sends to the backend.
pub fn unread_ids(messages: &[ChatMessage], ride_id: &str, viewer_id: &str) -> Vec<String> {
    messages
        .iter()
        .filter(|message| message.ride_id == ride_id && message.is_unread_for(viewer_id))
        .map(|message| message.id.clone())
        .collect()
}

/// Mark every message in `ride_id`'s chat not sent by the viewer as read.
///
/// Returns how many messages actually flipped. Idempotent: reapplying is a
/// no-op and returns 0. Never reverts a read flag.
pub fn mark_conversation_read(
    messages: &mut [ChatMessage],
    ride_id: &str,
    viewer_id: &str,
) -> usize {
    let mut flipped = 0;
    for message in messages
        .iter_mut()
        .filter(|message| message.ride_id == ride_id && message.is_unread_for(viewer_id))
    {
        message.read = true;
        flipped += 1;
    }
    flipped
}
