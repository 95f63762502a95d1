//! HTTP chat server for parley.
//!
//! Exposes three routes over an in-memory conversation store:
//!
//! - `POST /chat`: append a user message, generate a reply, return both
//! - `GET /conversation/{id}`: full message log for a conversation
//! - `GET /health`: liveness probe

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use state::AppState;
