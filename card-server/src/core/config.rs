/// Server configuration
///
/// All items can be overridden through environment variables:
///
/// | variable          | default          | meaning                          |
/// |-------------------|------------------|----------------------------------|
/// | HTTP_PORT         | 3000             | HTTP API port                    |
/// | DATABASE_PATH     | card_server.db   | SQLite database file             |
/// | CARD_SECRET       | (built-in)       | shared secret keying the card tag |
/// | ADMIN_ACCESS_KEY  | (built-in)       | admin login key                  |
/// | SESSION_TTL_SECS  | 28800            | admin session lifetime (8h)      |
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// SQLite database file path
    pub database_path: String,
    /// Shared secret used as keying material for the card tag.
    ///
    /// The default matches the salt baked into already-issued cards;
    /// changing it invalidates every card in the field.
    pub card_secret: String,
    /// Access key accepted by the admin login endpoint
    pub admin_access_key: String,
    /// Admin session lifetime in seconds
    pub session_ttl_secs: u64,
}

/// Salt embedded in previously issued cards. Kept for wire compatibility.
const DEFAULT_CARD_SECRET: &str = "PJ_ECC_ULTIMATE_99";

const DEFAULT_ADMIN_ACCESS_KEY: &str = "sonu@jeet";

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "card_server.db".into()),
            card_secret: std::env::var("CARD_SECRET")
                .unwrap_or_else(|_| DEFAULT_CARD_SECRET.into()),
            admin_access_key: std::env::var("ADMIN_ACCESS_KEY")
                .unwrap_or_else(|_| DEFAULT_ADMIN_ACCESS_KEY.into()),
            session_ttl_secs: std::env::var("SESSION_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8 * 60 * 60),
        }
    }

    /// Override the database path, commonly for tests
    pub fn with_database_path(mut self, path: impl Into<String>) -> Self {
        self.database_path = path.into();
        self
    }
}
