//! Server State

use sqlx::SqlitePool;

use crate::ai::AiService;
use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Shared application state. Cheap to clone: the pool and the HTTP
/// client inside [`AiService`] are both internally reference-counted.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// AI adapter
    pub ai: AiService,
}

impl ServerState {
    /// Initialize the server state:
    /// 1. ensure the working directory exists
    /// 2. open the database (work_dir/crm.db) and run migrations
    /// 3. build the AI adapter from config
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        std::fs::create_dir_all(&config.work_dir).map_err(|e| {
            AppError::internal(format!("Failed to create work directory: {e}"))
        })?;

        let db_path = config.database_path();
        let db = DbService::new(&db_path.to_string_lossy()).await?;

        let ai = AiService::new(&config.ai)
            .map_err(|e| AppError::internal(format!("Failed to build AI client: {e}")))?;

        Ok(Self {
            config: config.clone(),
            pool: db.pool,
            ai,
        })
    }
}
