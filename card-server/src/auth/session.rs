//! Admin session store
//!
//! Sessions are opaque bearer tokens checked for membership. The store is a
//! trait so the backing can be swapped (in-memory for a single node and for
//! tests; a persistent store would implement the same interface). Session
//! lifetime is an explicit policy: entries expire after a configured TTL
//! instead of accumulating forever.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use rand::RngCore;

/// Session store abstraction
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Create a session and return its opaque token
    async fn issue(&self) -> String;

    /// Check whether a token belongs to a live session
    async fn validate(&self, token: &str) -> bool;

    /// Invalidate a session
    async fn revoke(&self, token: &str);
}

/// In-memory session store with per-session expiry deadlines
pub struct MemorySessionStore {
    sessions: DashMap<String, Instant>,
    ttl: Duration,
}

impl MemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// 16 random bytes, hex-encoded
    fn new_token() -> String {
        let mut bytes = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn issue(&self) -> String {
        let token = Self::new_token();
        self.sessions
            .insert(token.clone(), Instant::now() + self.ttl);
        token
    }

    async fn validate(&self, token: &str) -> bool {
        let expired = match self.sessions.get(token) {
            Some(deadline) => Instant::now() >= *deadline,
            None => return false,
        };
        if expired {
            self.sessions.remove(token);
            return false;
        }
        true
    }

    async fn revoke(&self, token: &str) {
        self.sessions.remove(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn issued_session_validates() {
        let store = MemorySessionStore::new(Duration::from_secs(60));
        let token = store.issue().await;
        assert_eq!(token.len(), 32);
        assert!(store.validate(&token).await);
        assert!(!store.validate("unknown").await);
    }

    #[tokio::test]
    async fn revoked_session_stops_validating() {
        let store = MemorySessionStore::new(Duration::from_secs(60));
        let token = store.issue().await;
        store.revoke(&token).await;
        assert!(!store.validate(&token).await);
    }

    #[tokio::test]
    async fn expired_session_is_rejected_and_pruned() {
        let store = MemorySessionStore::new(Duration::ZERO);
        let token = store.issue().await;
        assert!(!store.validate(&token).await);
        assert!(store.sessions.is_empty());
    }

    #[tokio::test]
    async fn tokens_are_unique() {
        let store = MemorySessionStore::new(Duration::from_secs(60));
        let a = store.issue().await;
        let b = store.issue().await;
        assert_ne!(a, b);
    }
}
