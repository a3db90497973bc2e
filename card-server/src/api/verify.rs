//! QR token verification endpoint (public)

use axum::extract::State;
use axum::Json;
use shared::VerificationResponse;

use crate::cards::verify_card;
use crate::core::ServerState;

#[derive(serde::Deserialize)]
pub struct VerifyCardRequest {
    pub token: String,
}

/// POST /api/verify-qr — always 200; rejection is carried in the body
pub async fn verify_qr(
    State(state): State<ServerState>,
    Json(req): Json<VerifyCardRequest>,
) -> Json<VerificationResponse> {
    let repo = state.employee_repo();
    Json(verify_card(&req.token, &state.config.card_secret, &repo).await)
}
