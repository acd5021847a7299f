//! Server configuration
//!
//! Every field can be overridden through an environment variable:
//!
//! | Env var | Default | Meaning |
//! |---------|---------|---------|
//! | WORK_DIR | ./data | Working directory (database, logs) |
//! | HTTP_PORT | 3000 | HTTP API port |
//! | ENVIRONMENT | development | development \| staging \| production |
//! | AI_API_URL | https://api.grok.ai/v1/chat/completions | Generation endpoint |
//! | AI_API_KEY | (empty) | Bearer credential for the endpoint |
//! | AI_MODEL | grok-1 | Model identifier |
//! | AI_TIMEOUT_MS | 30000 | Generation request timeout (ms) |

use std::path::PathBuf;

/// Remote generation endpoint configuration
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout_ms: u64,
}

impl AiConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("AI_API_URL")
                .unwrap_or_else(|_| "https://api.grok.ai/v1/chat/completions".into()),
            api_key: std::env::var("AI_API_KEY").unwrap_or_default(),
            model: std::env::var("AI_MODEL").unwrap_or_else(|_| "grok-1".into()),
            timeout_ms: std::env::var("AI_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30000),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory; holds the database file and logs
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Generation endpoint configuration
    pub ai: AiConfig,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            ai: AiConfig::from_env(),
        }
    }

    /// Database file path inside the working directory
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("crm.db")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
