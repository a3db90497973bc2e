//! Card verification policy
//!
//! Verification is a pure function of (token, store snapshot): decode the
//! token, recompute the expected tag, then reconcile against the store. No
//! failure mode escapes as an error; every path yields a
//! [`VerificationResponse`] so clients can render a single rejection screen.
//!
//! Reconciliation: a stored record is authoritative — a revoked record
//! rejects a token whose signature still checks out. A reference the store
//! has never seen falls back to trusting the decoded fields (offline,
//! stateless verification), which is a supported mode, not an error.

use chrono::Utc;
use shared::{CardToken, Employee, VerificationResponse};

use crate::cards::signing::card_tag;
use crate::db::repository::EmployeeRepository;

pub const MSG_MALFORMED: &str = "Malformed Token";
pub const MSG_INVALID_SIGNATURE: &str = "Invalid Signature";
pub const MSG_REVOKED: &str = "Card Revoked";

/// Verify an encoded card token
pub async fn verify_card(
    token: &str,
    secret: &str,
    repo: &EmployeeRepository,
) -> VerificationResponse {
    let decoded = match CardToken::decode(token) {
        Ok(t) => t,
        Err(e) => {
            tracing::debug!(error = %e, "Token decode failed");
            return VerificationResponse::rejected(MSG_MALFORMED);
        }
    };

    // The tag binds name + ref_id to the shared secret. Plain equality is
    // acceptable here: the tag is printed on the card, not a bearer secret.
    let expected = card_tag(&decoded.name, &decoded.ref_id, secret);
    if decoded.signature != expected {
        tracing::debug!(ref_id = %decoded.ref_id, "Signature mismatch");
        return VerificationResponse::rejected(MSG_INVALID_SIGNATURE);
    }

    match repo.find_by_ref(&decoded.ref_id).await {
        Ok(Some(employee)) if !employee.valid => {
            tracing::info!(ref_id = %employee.ref_id, "Rejected revoked card");
            VerificationResponse::rejected(MSG_REVOKED)
        }
        Ok(Some(employee)) => VerificationResponse::accepted(employee),
        Ok(None) => synthesize(decoded),
        Err(e) => {
            // Store unavailable: offline verification stays supported, the
            // signature already checked out.
            tracing::warn!(error = %e, ref_id = %decoded.ref_id, "Store lookup failed, falling back to token fields");
            synthesize(decoded)
        }
    }
}

/// Build a transient, non-persisted record from the token fields
fn synthesize(token: CardToken) -> VerificationResponse {
    let expiry = match token.parse_expiry() {
        Ok(e) => e,
        Err(e) => {
            tracing::debug!(error = %e, "Unparseable expiry in token");
            return VerificationResponse::rejected(MSG_MALFORMED);
        }
    };
    VerificationResponse::accepted(Employee {
        id: 0,
        name: token.name,
        ref_id: token.ref_id,
        gender: token.gender,
        purpose: token.purpose,
        is_lifetime: expiry.is_none(),
        expiry,
        signature: token.signature,
        valid: true,
        created_at: Utc::now(),
    })
}
