use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::request::Coordinates;

/// Sender label on system-generated announcements (welcome, join/leave).
pub const ADMIN: &str = "Admin";

pub const WELCOME_TEXT: &str = "Welcome!";

/// A chat message as it goes over the wire, stamped at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub username: String,
    pub text: String,
    pub created_at: i64,
}

impl ChatMessage {
    pub fn new(username: impl Into<String>, text: impl Into<String>) -> Self {
        ChatMessage {
            username: username.into(),
            text: text.into(),
            created_at: Utc::now().timestamp_millis(),
        }
    }

    pub fn admin(text: impl Into<String>) -> Self {
        Self::new(ADMIN, text)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationMessage {
    pub username: String,
    pub url: String,
    pub created_at: i64,
}

impl LocationMessage {
    pub fn new(username: impl Into<String>, coords: &Coordinates) -> Self {
        LocationMessage {
            username: username.into(),
            url: format!(
                "https://google.com/maps?q={},{}",
                coords.latitude, coords.longitude
            ),
            created_at: Utc::now().timestamp_millis(),
        }
    }
}

/// Snapshot of a room's current members, sent to the whole room after every
/// membership change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomData {
    pub room: String,
    pub users: Vec<RoomUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomUser {
    pub username: String,
}

/// Ack payload for inbound events. `error` is absent on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckReply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AckReply {
    pub fn ok() -> Self {
        AckReply { error: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        AckReply {
            error: Some(message.into()),
        }
    }
}
