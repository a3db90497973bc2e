//! API Response types

use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// Response to an admin login attempt
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminAuthResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Response to an admin session check
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthStatus {
    pub authenticated: bool,
}

/// Result of a card verification
///
/// Every verification path produces this structure; failures are reported
/// through `valid = false` plus a message, never as a transport error.
#[derive(Debug, Serialize, Deserialize)]
pub struct VerificationResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<Employee>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl VerificationResponse {
    pub fn accepted(employee: Employee) -> Self {
        Self {
            valid: true,
            employee: Some(employee),
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            employee: None,
            message: Some(message.into()),
        }
    }
}
