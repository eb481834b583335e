use eyre::Result;
use log::warn;
use socketioxide::socket::Sid;
use tap::TapFallible;
use validator::Validate;

use crate::domain::request::{Coordinates, JoinRequest};
use crate::domain::user::ChatUser;
use crate::error::Error;
use crate::service::chat::ChatService;

/// Boundary facade over the chat service. Injected into socket handlers
/// through an axum `Extension` layer, so nothing in here is a process-wide
/// singleton.
#[derive(Clone)]
pub struct Api {
    pub chat_service: ChatService,
}

impl Api {
    pub async fn join(&self, sid: Sid, request: JoinRequest) -> Result<ChatUser> {
        request
            .validate()
            .map_err(|_| Error::MissingUsernameOrRoom)?;
        self.chat_service
            .join(sid, request)
            .await
            .tap_err(|e| warn!("Join rejected for {}: {}", sid, e))
    }

    pub async fn send_message(&self, sid: Sid, text: String) -> Result<()> {
        self.chat_service
            .send_message(sid, text)
            .await
            .tap_err(|e| warn!("Message rejected for {}: {}", sid, e))
    }

    pub async fn send_location(&self, sid: Sid, coords: Coordinates) -> Result<()> {
        self.chat_service
            .send_location(sid, coords)
            .await
            .tap_err(|e| warn!("Location rejected for {}: {}", sid, e))
    }

    pub async fn disconnect(&self, sid: Sid) -> Result<()> {
        self.chat_service.disconnect(sid).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use socketioxide::extract::SocketRef;
    use socketioxide::SocketIo;

    use crate::filter::ProfanityFilter;
    use crate::repository::users::UserRegistry;
    use crate::service::emitter::{Emitter, CHAT_NAMESPACE};

    fn test_api() -> Api {
        let (_, io) = SocketIo::new_layer();
        io.ns(CHAT_NAMESPACE, |_: SocketRef| async {});
        Api {
            chat_service: ChatService {
                registry: Arc::new(UserRegistry::new()),
                filter: ProfanityFilter::new(),
                emitter: Emitter::new(io),
            },
        }
    }

    #[tokio::test]
    async fn test_join_rejects_empty_fields_at_the_boundary() {
        let api = test_api();
        let request = JoinRequest {
            username: String::new(),
            room: "lobby".to_string(),
        };
        let result = api.join(Sid::new(), request).await;
        let error = result.unwrap_err().downcast::<Error>().unwrap();
        assert_eq!(error, Error::MissingUsernameOrRoom);
    }

    #[tokio::test]
    async fn test_join_delegates_to_service() {
        let api = test_api();
        let request = JoinRequest {
            username: "Alice".to_string(),
            room: "Lobby".to_string(),
        };
        let user = api.join(Sid::new(), request).await.unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.room, "lobby");
    }
}
