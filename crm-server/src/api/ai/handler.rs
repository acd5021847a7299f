//! AI API Handlers
//!
//! Thin bindings over [`AiService`]; all failure detail is already
//! reduced to the opaque generation error by the adapter.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::{CampaignStats, RuleGroup};

#[derive(Deserialize)]
pub struct SuggestionRequest {
    pub objective: String,
    pub audience_type: String,
}

#[derive(Deserialize)]
pub struct RuleConversionRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct InsightsResponse {
    pub summary: String,
}

/// POST /api/ai/message-suggestions - up to 3 personalized templates
pub async fn message_suggestions(
    State(state): State<ServerState>,
    Json(payload): Json<SuggestionRequest>,
) -> AppResult<Json<Vec<String>>> {
    let suggestions = state
        .ai
        .generate_message_suggestions(&payload.objective, &payload.audience_type)
        .await?;
    Ok(Json(suggestions))
}

/// POST /api/ai/campaign-insights - free-text delivery analysis
pub async fn campaign_insights(
    State(state): State<ServerState>,
    Json(stats): Json<CampaignStats>,
) -> AppResult<Json<InsightsResponse>> {
    let summary = state.ai.generate_campaign_insights(stats).await?;
    Ok(Json(InsightsResponse { summary }))
}

/// POST /api/ai/segment-rules - natural language to targeting rules
pub async fn segment_rules(
    State(state): State<ServerState>,
    Json(payload): Json<RuleConversionRequest>,
) -> AppResult<Json<Vec<RuleGroup>>> {
    let groups = state.ai.convert_to_segment_rules(&payload.text).await?;
    Ok(Json(groups))
}
