use std::sync::Arc;

use eyre::{ensure, ContextCompat, Result};
use socketioxide::socket::Sid;

use crate::domain::event::ServerEvent;
use crate::domain::message::{ChatMessage, LocationMessage, RoomData, RoomUser, WELCOME_TEXT};
use crate::domain::request::{Coordinates, JoinRequest};
use crate::domain::user::ChatUser;
use crate::error::Error;
use crate::filter::ProfanityFilter;
use crate::repository::users::UserRegistry;
use crate::service::emitter::Emitter;

/// Drives the per-connection session protocol: validates joins against the
/// registry, gates outbound text through the profanity filter, and decides
/// what gets broadcast to whom. Errors only ever travel back to the caller
/// on the triggering event's ack, never into a room.
#[derive(Clone)]
pub struct ChatService {
    pub registry: Arc<UserRegistry>,
    pub filter: ProfanityFilter,
    pub emitter: Emitter,
}

impl ChatService {
    /// Join fan-out: welcome to the joiner, announcement to everyone else in
    /// the room, membership snapshot to the whole room including the joiner.
    /// On failure nothing is broadcast and the registry is untouched.
    pub async fn join(&self, sid: Sid, request: JoinRequest) -> Result<ChatUser> {
        let user = self
            .registry
            .add_user(sid, &request.username, &request.room)
            .await?;

        self.emitter.join_socket_to_room(sid, user.room.clone());
        self.emitter.emit_to_socket(
            sid,
            ServerEvent::Message,
            serde_json::to_value(ChatMessage::admin(WELCOME_TEXT))?,
        );
        self.emitter
            .broadcast_to_others(
                sid,
                user.room.clone(),
                ServerEvent::Message,
                serde_json::to_value(ChatMessage::admin(format!(
                    "{} has joined!",
                    user.username
                )))?,
            )
            .await;
        self.emit_room_data(&user.room).await?;
        Ok(user)
    }

    pub async fn send_message(&self, sid: Sid, text: String) -> Result<()> {
        let user = self
            .registry
            .get_user(sid)
            .await
            .wrap_err(Error::NotJoined)?;
        ensure!(!self.filter.is_profane(&text), Error::ProfanityNotAllowed);

        let ChatUser { username, room, .. } = user;
        self.emitter
            .emit_to_room(
                room,
                ServerEvent::Message,
                serde_json::to_value(ChatMessage::new(username, text))?,
            )
            .await;
        Ok(())
    }

    pub async fn send_location(&self, sid: Sid, coords: Coordinates) -> Result<()> {
        let user = self
            .registry
            .get_user(sid)
            .await
            .wrap_err(Error::NotJoined)?;

        let ChatUser { username, room, .. } = user;
        self.emitter
            .emit_to_room(
                room,
                ServerEvent::LocationMessage,
                serde_json::to_value(LocationMessage::new(username, &coords))?,
            )
            .await;
        Ok(())
    }

    /// Announces the departure to the remaining members, with a refreshed
    /// snapshot. A disconnect from a connection that never joined does
    /// nothing.
    pub async fn disconnect(&self, sid: Sid) -> Result<()> {
        let Some(user) = self.registry.remove_user(sid).await else {
            return Ok(());
        };
        self.emitter
            .emit_to_room(
                user.room.clone(),
                ServerEvent::Message,
                serde_json::to_value(ChatMessage::admin(format!("{} has left!", user.username)))?,
            )
            .await;
        self.emit_room_data(&user.room).await?;
        Ok(())
    }

    async fn emit_room_data(&self, room: &str) -> Result<()> {
        let users = self
            .registry
            .users_in_room(room)
            .await
            .into_iter()
            .map(|u| RoomUser {
                username: u.username,
            })
            .collect();
        let data = RoomData {
            room: room.to_string(),
            users,
        };
        self.emitter
            .emit_to_room(
                room.to_string(),
                ServerEvent::RoomData,
                serde_json::to_value(data)?,
            )
            .await;
        Ok(())
    }
}
