use log::error;
use serde_json::Value;
use socketioxide::socket::Sid;
use socketioxide::SocketIo;

use crate::domain::event::ServerEvent;

pub const CHAT_NAMESPACE: &str = "/";

/// Socket.io side of the fan-out. Each method covers one broadcast scope:
/// a single connection, an entire room, or a room minus the sender.
/// Delivery is send-and-forget; emit failures are logged and dropped.
#[cfg_attr(test, faux::create)]
#[derive(Clone)]
pub struct Emitter {
    io: SocketIo,
}

#[cfg_attr(test, faux::methods)]
impl Emitter {
    pub fn new(io: SocketIo) -> Self {
        Emitter { io }
    }

    pub fn join_socket_to_room(&self, sid: Sid, room: String) {
        if let Some(operator) = self.io.of(CHAT_NAMESPACE) {
            if let Some(socket) = operator.get_socket(sid) {
                socket.join(room);
            }
        }
    }

    pub fn emit_to_socket(&self, sid: Sid, event: ServerEvent, data: Value) {
        if let Some(operator) = self.io.of(CHAT_NAMESPACE) {
            if let Some(socket) = operator.get_socket(sid) {
                let _ = socket.emit(event, &data);
            }
        }
    }

    pub async fn emit_to_room(&self, room: String, event: ServerEvent, data: Value) {
        if let Some(operator) = self.io.of(CHAT_NAMESPACE) {
            if let Err(e) = operator.to(room).emit(event, &data).await {
                error!("Error occurred when emitting to room: {:?}", e);
            }
        }
    }

    /// Everyone in the room except the sender. When the sender's socket is
    /// already gone, the whole room is everyone else, so this falls back to
    /// a room-wide emit instead of skipping the broadcast.
    pub async fn broadcast_to_others(
        &self,
        sid: Sid,
        room: String,
        event: ServerEvent,
        data: Value,
    ) {
        let Some(operator) = self.io.of(CHAT_NAMESPACE) else {
            return;
        };
        let result = match operator.get_socket(sid) {
            Some(socket) => socket.to(room).emit(event, &data).await,
            None => operator.to(room).emit(event, &data).await,
        };
        if let Err(e) = result {
            error!("Error occurred when broadcasting to room: {:?}", e);
        }
    }
}
