pub mod chat;
pub mod emitter;
