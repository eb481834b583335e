use eyre::{ensure, Result};
use socketioxide::socket::Sid;
use tokio::sync::RwLock;

use crate::domain::user::ChatUser;
use crate::error::Error;

/// Trim and lowercase, applied to usernames and rooms before storage and
/// every comparison.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// In-memory registry of joined connections. The single source of truth for
/// room membership: rooms are never stored, only derived from the user list,
/// so an empty room simply stops existing.
///
/// A plain `Vec` under one lock keeps join insertion order and makes the
/// name-collision check and the insert a single atomic step; concurrent
/// joins with the same name resolve first-writer-wins.
pub struct UserRegistry {
    users: RwLock<Vec<ChatUser>>,
}

impl UserRegistry {
    pub fn new() -> Self {
        UserRegistry {
            users: RwLock::new(Vec::new()),
        }
    }

    pub async fn add_user(&self, sid: Sid, username: &str, room: &str) -> Result<ChatUser> {
        let username = normalize(username);
        let room = normalize(room);
        ensure!(
            !username.is_empty() && !room.is_empty(),
            Error::MissingUsernameOrRoom
        );

        let mut users = self.users.write().await;
        ensure!(!users.iter().any(|u| u.sid == sid), Error::AlreadyJoined);
        ensure!(
            !users
                .iter()
                .any(|u| u.room == room && u.username == username),
            Error::UsernameTaken
        );

        let user = ChatUser {
            sid,
            username,
            room,
        };
        users.push(user.clone());
        Ok(user)
    }

    /// Removes and returns the user for this connection. `None` if the
    /// connection never joined, so a disconnect before join (or a repeated
    /// disconnect) is a no-op.
    pub async fn remove_user(&self, sid: Sid) -> Option<ChatUser> {
        let mut users = self.users.write().await;
        let index = users.iter().position(|u| u.sid == sid)?;
        Some(users.remove(index))
    }

    pub async fn get_user(&self, sid: Sid) -> Option<ChatUser> {
        self.users.read().await.iter().find(|u| u.sid == sid).cloned()
    }

    /// Members of a room in join order.
    pub async fn users_in_room(&self, room: &str) -> Vec<ChatUser> {
        let room = normalize(room);
        self.users
            .read()
            .await
            .iter()
            .filter(|u| u.room == room)
            .cloned()
            .collect()
    }
}

impl Default for UserRegistry {
    fn default() -> Self {
        Self::new()
    }
}
