//! Admin authentication
//!
//! - [`SessionStore`] - injected session abstraction (issue/validate/revoke)
//! - [`MemorySessionStore`] - TTL-bounded in-memory backing
//! - [`require_admin`] - axum middleware gating the admin surface

pub mod middleware;
pub mod session;

pub use middleware::{bearer_token, require_admin};
pub use session::{MemorySessionStore, SessionStore};
