use std::sync::Arc;

use axum::{Extension, Router};
use eyre::Result;
use log::{debug, error, info};
use socketioxide::extract::{AckSender, Data, HttpExtension, SocketRef};
use socketioxide::SocketIo;
use tower_http::services::ServeDir;

use crate::domain::event::ClientEvent;
use crate::domain::message::AckReply;
use crate::domain::request::{Coordinates, JoinRequest};
use crate::error::Error;
use crate::filter::ProfanityFilter;
use crate::repository::users::UserRegistry;
use crate::routes::Api;
use crate::service::chat::ChatService;
use crate::service::emitter::{Emitter, CHAT_NAMESPACE};

mod domain;
mod error;
mod filter;
mod repository;
mod routes;
mod service;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PUBLIC_DIR: &str = "public";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let public_dir =
        std::env::var("PUBLIC_DIR").unwrap_or_else(|_| DEFAULT_PUBLIC_DIR.to_string());

    // setting up websocket
    let (socket_layer, io) = SocketIo::new_layer();
    io.ns(CHAT_NAMESPACE, connection_handler);

    let chat_service = ChatService {
        registry: Arc::new(UserRegistry::new()),
        filter: ProfanityFilter::new(),
        emitter: Emitter::new(io),
    };
    let api = Api { chat_service };

    let router = Router::new()
        .fallback_service(ServeDir::new(&public_dir))
        .layer(socket_layer)
        .layer(Extension(api));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Server is up on port {}!", port);
    axum::serve(listener, router).await?;
    Ok(())
}

async fn connection_handler(s: SocketRef) {
    debug!("New websocket connection: {}", s.id);
    s.on(ClientEvent::Join, join_room);
    s.on(ClientEvent::SendMessage, send_message);
    s.on(ClientEvent::SendLocation, send_location);
    s.on_disconnect(handle_disconnect);
}

async fn join_room(
    s: SocketRef,
    Data(request): Data<JoinRequest>,
    ack: AckSender,
    HttpExtension(api): HttpExtension<Api>,
) {
    match api.join(s.id, request).await {
        Ok(user) => {
            debug!("{} joined room {}", user.username, user.room);
            let _ = ack.send(&AckReply::ok());
        }
        Err(e) => {
            let _ = ack.send(&report_into_ack(e));
        }
    }
}

async fn send_message(
    s: SocketRef,
    Data(text): Data<String>,
    ack: AckSender,
    HttpExtension(api): HttpExtension<Api>,
) {
    match api.send_message(s.id, text).await {
        Ok(()) => {
            let _ = ack.send(&AckReply::ok());
        }
        Err(e) => {
            let _ = ack.send(&report_into_ack(e));
        }
    }
}

async fn send_location(
    s: SocketRef,
    Data(coords): Data<Coordinates>,
    ack: AckSender,
    HttpExtension(api): HttpExtension<Api>,
) {
    match api.send_location(s.id, coords).await {
        Ok(()) => {
            let _ = ack.send(&AckReply::ok());
        }
        Err(e) => {
            let _ = ack.send(&report_into_ack(e));
        }
    }
}

async fn handle_disconnect(s: SocketRef, HttpExtension(api): HttpExtension<Api>) {
    debug!("Socket {} disconnected", s.id);
    if let Err(e) = api.disconnect(s.id).await {
        error!("Error occurred during disconnect cleanup: {:?}", e);
    }
}

fn report_into_ack(e: eyre::Report) -> AckReply {
    match e.downcast::<Error>() {
        Ok(error) => AckReply::error(error.to_string()),
        Err(e) => {
            error!("Error occurred: {:?}", e);
            AckReply::error("Something went wrong!")
        }
    }
}
