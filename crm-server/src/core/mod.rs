//! Core module — configuration, state, server

pub mod config;
pub mod server;
pub mod state;

pub use config::{AiConfig, Config};
pub use server::{Server, build_app};
pub use state::ServerState;
