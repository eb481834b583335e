use socketioxide::socket::Sid;

/// A joined connection. Lives exactly as long as its socket: created on a
/// successful join, removed on disconnect. `username` and `room` are stored
/// normalized (trimmed, lowercased).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatUser {
    pub sid: Sid,
    pub username: String,
    pub room: String,
}
