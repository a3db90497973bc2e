//! HTTP API
//!
//! # Routes
//!
//! | method/path | auth | handler |
//! |-------------|------|---------|
//! | POST /api/admin/login | - | [`admin::login`] |
//! | GET /api/admin/verify | bearer | [`admin::verify_session`] |
//! | POST /api/admin/logout | bearer | [`admin::logout`] |
//! | GET/POST /api/employees | bearer | [`employees`] |
//! | GET /api/employees/{refId} | bearer | [`employees::get_by_ref`] |
//! | POST /api/employees/{refId}/revoke | bearer | [`employees::revoke`] |
//! | POST /api/verify-qr | - | [`verify::verify_qr`] |
//! | GET /health | - | liveness probe |

pub mod admin;
pub mod employees;
pub mod verify;

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{Json, Router, middleware};
use tower_http::timeout::TimeoutLayer;

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router(state: ServerState) -> Router {
    // Admin surface: every route behind a live session
    let protected = Router::new()
        .route("/api/admin/verify", get(admin::verify_session))
        .route("/api/admin/logout", post(admin::logout))
        .route(
            "/api/employees",
            get(employees::list).post(employees::create),
        )
        .route("/api/employees/{ref_id}", get(employees::get_by_ref))
        .route("/api/employees/{ref_id}/revoke", post(employees::revoke))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin,
        ));

    Router::new()
        .route("/api/admin/login", post(admin::login))
        .route("/api/verify-qr", post(verify::verify_qr))
        .route("/health", get(health))
        .merge(protected)
        .layer(DefaultBodyLimit::max(1024 * 1024)) // 1MB
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .with_state(state)
}

async fn health(
    axum::extract::State(state): axum::extract::State<ServerState>,
) -> Json<serde_json::Value> {
    let db_ok = state.db.acquire().await.is_ok();
    let status = if db_ok { "ok" } else { "degraded" };
    Json(serde_json::json!({
        "status": status,
        "db": db_ok
    }))
}
