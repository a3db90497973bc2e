//! QR token wire codec
//!
//! A card token is `base64(JSON)` with compact single-letter field names:
//!
//! ```json
//! { "n": name, "r": refId, "g": gender, "p": purpose,
//!   "e": "2027-01-01T00:00:00Z" | "LIFETIME", "sig": "15 hex chars" }
//! ```
//!
//! The format is fixed: already-issued cards must keep decoding bit-exact.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// Sentinel literal used in the `e` field for cards without an expiry
pub const LIFETIME: &str = "LIFETIME";

/// Token decode/parse errors
///
/// Verification collapses all of these into a single "Malformed Token"
/// rejection; the variants exist for logging.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload is not UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("invalid payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid expiry field: {0}")]
    Expiry(String),
}

/// Decoded card token payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardToken {
    #[serde(rename = "n")]
    pub name: String,
    #[serde(rename = "r")]
    pub ref_id: String,
    #[serde(rename = "g")]
    pub gender: String,
    #[serde(rename = "p")]
    pub purpose: String,
    /// Expiry date string or the literal `LIFETIME`
    #[serde(rename = "e")]
    pub expiry: String,
    #[serde(rename = "sig")]
    pub signature: String,
}

impl CardToken {
    /// Build the token payload for a persisted record
    pub fn for_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            ref_id: employee.ref_id.clone(),
            gender: employee.gender.clone(),
            purpose: employee.purpose.clone(),
            expiry: employee
                .expiry
                .map(|e| e.to_rfc3339())
                .unwrap_or_else(|| LIFETIME.to_string()),
            signature: employee.signature.clone(),
        }
    }

    /// Encode to the wire format (base64 of compact JSON)
    pub fn encode(&self) -> String {
        // serde_json::to_string on a struct of strings cannot fail
        let json = serde_json::to_string(self).unwrap_or_default();
        STANDARD.encode(json.as_bytes())
    }

    /// Decode from the wire format
    pub fn decode(token: &str) -> Result<Self, TokenError> {
        let bytes = STANDARD.decode(token.trim())?;
        let json = String::from_utf8(bytes)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Parse the expiry field: `LIFETIME` means no expiry
    ///
    /// Accepts RFC 3339 or a bare `YYYY-MM-DD` date (midnight UTC).
    pub fn parse_expiry(&self) -> Result<Option<DateTime<Utc>>, TokenError> {
        if self.expiry == LIFETIME {
            return Ok(None);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.expiry) {
            return Ok(Some(dt.with_timezone(&Utc)));
        }
        if let Ok(date) = NaiveDate::parse_from_str(&self.expiry, "%Y-%m-%d")
            && let Some(dt) = date.and_hms_opt(0, 0, 0)
        {
            return Ok(Some(dt.and_utc()));
        }
        Err(TokenError::Expiry(self.expiry.clone()))
    }

    pub fn is_lifetime(&self) -> bool {
        self.expiry == LIFETIME
    }
}
