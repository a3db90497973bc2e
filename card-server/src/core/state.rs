use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

use crate::auth::{MemorySessionStore, SessionStore};
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::EmployeeRepository;
use crate::utils::AppError;

/// Server state - shared references held by every handler
///
/// Cloning is shallow; the pool and session store are internally shared.
/// The session store is an injected abstraction so tests (or a future
/// persistent backend) can swap the in-memory implementation.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub db: SqlitePool,
    /// Admin session store
    pub sessions: Arc<dyn SessionStore>,
}

impl ServerState {
    /// Initialize state from configuration: open the database (running
    /// migrations) and set up the in-memory session store
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        let sessions = Arc::new(MemorySessionStore::new(Duration::from_secs(
            config.session_ttl_secs,
        )));
        Ok(Self {
            config: config.clone(),
            db: db.pool,
            sessions,
        })
    }

    pub fn employee_repo(&self) -> EmployeeRepository {
        EmployeeRepository::new(self.db.clone())
    }
}
