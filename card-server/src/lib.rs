//! Employee ID card issuance and verification service
//!
//! # Module structure
//!
//! ```text
//! card-server/src/
//! ├── core/          # configuration, server state
//! ├── auth/          # admin session store + middleware
//! ├── cards/         # signing, issuance, verification policy
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SQLite pool, employee repository
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod auth;
pub mod cards;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use auth::{MemorySessionStore, SessionStore};
pub use cards::{card_tag, issue_card, verify_card};
pub use core::{Config, ServerState};
pub use db::DbService;
pub use db::repository::{EmployeeRepository, NewEmployee, RepoError};
pub use utils::logger::init_logger;
pub use utils::{AppError, AppResult};
