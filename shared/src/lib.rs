//! Shared types for the card service
//!
//! Wire-level types used by both the server and card-rendering clients:
//! employee records, API response structures and the QR token codec.

pub mod models;
pub mod response;
pub mod token;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{Employee, EmployeeCreate};
pub use response::{AdminAuthResponse, AuthStatus, VerificationResponse};
pub use token::{CardToken, TokenError, LIFETIME};
