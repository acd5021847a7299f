//! CRM Server
//!
//! Backend for a small CRM. The two subsystems with real logic are the
//! order core (sequential order numbers + derived totals) and the AI
//! adapter (remote text generation behind typed operations); the rest
//! is routing and persistence plumbing.
//!
//! # Module structure
//!
//! ```text
//! crm-server/src/
//! ├── core/       # Configuration, state, server
//! ├── api/        # HTTP routes and handlers
//! ├── db/         # SQLite pool and repositories
//! ├── orders/     # Order lifecycle, number allocation, totals
//! ├── ai/         # Generation client, prompts, parsers
//! └── utils/      # Errors, logging
//! ```

pub mod ai;
pub mod api;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

// Re-export common types
pub use ai::{AiError, AiService, GenerationTask};
pub use core::{AiConfig, Config, Server, ServerState};
pub use orders::OrderError;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load .env and initialize logging. Call once at startup.
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}
