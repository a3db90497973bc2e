//! Employee directory endpoints (admin surface)

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shared::{Employee, EmployeeCreate};

use crate::cards::issue_card;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// POST /api/employees — issue a new card
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let repo = state.employee_repo();
    let employee = issue_card(payload, &state.config.card_secret, &repo).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/employees — list all records
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employee_repo().find_all().await?;
    Ok(Json(employees))
}

/// GET /api/employees/{refId}
pub async fn get_by_ref(
    State(state): State<ServerState>,
    Path(ref_id): Path<String>,
) -> AppResult<Json<Employee>> {
    let employee = state
        .employee_repo()
        .find_by_ref(&ref_id)
        .await?
        .ok_or_else(|| AppError::not_found("Employee not found"))?;
    Ok(Json(employee))
}

/// POST /api/employees/{refId}/revoke — clear the validity flag
///
/// Revocation is the only mutation: records are never deleted, and a revoked
/// record makes verification fail even for a signature-valid token.
pub async fn revoke(
    State(state): State<ServerState>,
    Path(ref_id): Path<String>,
) -> AppResult<Json<Employee>> {
    let employee = state.employee_repo().set_valid(&ref_id, false).await?;
    tracing::info!(ref_id = %employee.ref_id, "Card revoked");
    Ok(Json(employee))
}
