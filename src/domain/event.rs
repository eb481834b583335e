use std::borrow::Cow;

use strum_macros::{AsRefStr, IntoStaticStr};

/// Events clients emit to the server.
#[derive(Debug, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum ClientEvent {
    Join,
    SendMessage,
    SendLocation,
}

impl From<ClientEvent> for Cow<'static, str> {
    fn from(event: ClientEvent) -> Self {
        Cow::Borrowed(<&'static str>::from(event))
    }
}

/// Events the server emits to clients.
#[derive(Debug, AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum ServerEvent {
    Message,
    LocationMessage,
    RoomData,
}
