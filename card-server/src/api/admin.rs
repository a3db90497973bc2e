//! Admin session endpoints

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use shared::{AdminAuthResponse, AuthStatus};

use crate::auth::bearer_token;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

#[derive(serde::Deserialize)]
pub struct AdminLoginRequest {
    pub key: String,
}

/// POST /api/admin/login — exchange the access key for a session token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<AdminLoginRequest>,
) -> AppResult<Json<AdminAuthResponse>> {
    if req.key != state.config.admin_access_key {
        tracing::warn!("Admin login rejected: wrong access key");
        return Err(AppError::InvalidAccessKey);
    }

    let token = state.sessions.issue().await;
    tracing::info!("Admin session issued");
    Ok(Json(AdminAuthResponse {
        success: true,
        token: Some(token),
    }))
}

/// GET /api/admin/verify — reached only through the session middleware,
/// so a response here means the session is live
pub async fn verify_session() -> Json<AuthStatus> {
    Json(AuthStatus {
        authenticated: true,
    })
}

/// POST /api/admin/logout — revoke the presented session
pub async fn logout(
    State(state): State<ServerState>,
    headers: HeaderMap,
) -> AppResult<Json<AuthStatus>> {
    if let Some(token) = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token)
    {
        state.sessions.revoke(token).await;
    }
    Ok(Json(AuthStatus {
        authenticated: false,
    }))
}
