//! AI Service
//!
//! Task orchestration over [`GenerationClient`]: prompt construction,
//! sampling parameters per task, response parsing, and failure
//! translation. Structured-output tasks run colder than creative ones.

use crate::ai::client::GenerationClient;
use crate::ai::parser::{self, NAME_PLACEHOLDER};
use crate::core::config::AiConfig;
use shared::models::{CampaignStats, RuleGroup};
use thiserror::Error;

const MAX_TOKENS: u32 = 300;

/// Generation task kinds, carried by the opaque failure so callers can
/// tell which operation degraded without seeing transport detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationTask {
    MessageSuggestions,
    CampaignInsights,
    SegmentRuleConversion,
}

impl GenerationTask {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MessageSuggestions => "message-suggestions",
            Self::CampaignInsights => "campaign-insights",
            Self::SegmentRuleConversion => "segment-rule-conversion",
        }
    }
}

impl std::fmt::Display for GenerationTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The only error callers of this service ever see.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("Generation failed for task {task}")]
    GenerationFailed { task: GenerationTask },
}

/// AI adapter facade
#[derive(Clone)]
pub struct AiService {
    client: GenerationClient,
}

impl AiService {
    pub fn new(config: &AiConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: GenerationClient::new(config)?,
        })
    }

    /// Generate up to 3 personalized campaign message templates. Lines
    /// the remote model got wrong are dropped rather than failing the
    /// whole call.
    pub async fn generate_message_suggestions(
        &self,
        objective: &str,
        audience_type: &str,
    ) -> Result<Vec<String>, AiError> {
        let task = GenerationTask::MessageSuggestions;
        let system =
            "You are a marketing message generator that creates personalized, engaging campaign messages.";
        let prompt = format!(
            "Generate 3 personalized marketing messages for a campaign with the following details:\n\
             - Campaign Objective: {objective}\n\
             - Target Audience: {audience_type}\n\n\
             The messages should:\n\
             - Include {NAME_PLACEHOLDER} placeholder for personalization\n\
             - Be engaging and action-oriented\n\
             - Be specific to the campaign objective\n\
             - Be concise (max 160 characters)\n\
             - Have a clear call to action\n\n\
             Return exactly 3 messages, one per line."
        );

        let raw = self
            .client
            .complete(system, &prompt, 0.7, MAX_TOKENS)
            .await
            .map_err(|e| fail(task, e))?;
        Ok(parser::parse_suggestions(&raw))
    }

    /// Summarize campaign delivery performance as free text.
    pub async fn generate_campaign_insights(
        &self,
        stats: CampaignStats,
    ) -> Result<String, AiError> {
        let task = GenerationTask::CampaignInsights;
        let system =
            "You are a campaign analytics expert providing insights on marketing campaign performance.";
        let prompt = format!(
            "Analyze the following campaign statistics and provide insights:\n\
             - Total Audience: {}\n\
             - Messages Sent: {}\n\
             - Failed Deliveries: {}\n\n\
             Provide insights on:\n\
             1. Delivery performance\n\
             2. Areas for improvement\n\
             3. Recommendations for future campaigns\n\n\
             Format the response as a clear, bulleted summary.",
            stats.audience_size, stats.sent, stats.failed
        );

        self.client
            .complete(system, &prompt, 0.5, MAX_TOKENS)
            .await
            .map_err(|e| fail(task, e))
    }

    /// Convert free-text targeting criteria into structured rule groups.
    pub async fn convert_to_segment_rules(&self, text: &str) -> Result<Vec<RuleGroup>, AiError> {
        let task = GenerationTask::SegmentRuleConversion;
        let system =
            "You are a targeting criteria analyzer that converts natural language to structured segment rules.";
        let prompt = format!(
            "Convert the following natural language targeting criteria to segment rules:\n\
             \"{text}\"\n\n\
             Generate rules for:\n\
             - Time-based conditions (last purchase)\n\
             - Spending conditions (total spend)\n\
             - Purchase frequency\n\
             - Average order value\n\n\
             Return the response as a valid JSON array of rule groups with this structure:\n\
             [{{\"operator\": \"AND\", \"rules\": [{{\"field\": \"fieldName\", \"operator\": \"operatorType\", \"value\": \"value\"}}]}}]"
        );

        let raw = self
            .client
            .complete(system, &prompt, 0.3, MAX_TOKENS)
            .await
            .map_err(|e| fail(task, e))?;
        parser::parse_segment_rules(&raw).map_err(|e| fail(task, e))
    }
}

/// Log the cause, hand the caller the opaque error.
fn fail(task: GenerationTask, cause: impl std::fmt::Display) -> AiError {
    tracing::warn!(task = %task, error = %cause, "Generation request failed");
    AiError::GenerationFailed { task }
}
