//! AI API module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/ai", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/message-suggestions", post(handler::message_suggestions))
        .route("/campaign-insights", post(handler::campaign_insights))
        .route("/segment-rules", post(handler::segment_rules))
}
