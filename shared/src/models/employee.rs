//! Employee Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Employee card record
///
/// `expiry` is the single source of truth for card lifetime: `None` means a
/// lifetime card. `is_lifetime` is kept on the wire for client compatibility
/// but always derived from `expiry`, never stored independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Store-assigned id; 0 for records synthesized from a token during
    /// offline verification
    pub id: i64,
    pub name: String,
    /// Externally chosen reference identifier (unique, verification key)
    pub ref_id: String,
    pub gender: String,
    pub purpose: String,
    /// None = lifetime validity
    pub expiry: Option<DateTime<Utc>>,
    pub is_lifetime: bool,
    /// Server-computed 15-hex-char integrity tag
    pub signature: String,
    /// Revocation flag; false means the card is revoked
    pub valid: bool,
    pub created_at: DateTime<Utc>,
}

/// Create employee payload
///
/// `signature`, `valid` and `id` are always server-side; a client cannot
/// supply them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub name: String,
    pub ref_id: String,
    pub gender: String,
    pub purpose: String,
    /// Expiry date string (RFC 3339 or YYYY-MM-DD); absent = lifetime card
    #[serde(default)]
    pub expiry: Option<String>,
    /// Redundant with an absent expiry; rejected if it contradicts `expiry`
    #[serde(default)]
    pub is_lifetime: Option<bool>,
}
