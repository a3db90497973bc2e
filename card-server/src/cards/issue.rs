//! Card issuance
//!
//! Validates the payload, normalizes the expiry, computes the tag and
//! persists the record in one repository call. A duplicate reference fails
//! the whole create; there is no signed-but-unstored intermediate state.

use chrono::{DateTime, NaiveDate, Utc};
use shared::{Employee, EmployeeCreate};

use crate::cards::signing::card_tag;
use crate::db::repository::{EmployeeRepository, NewEmployee, RepoError};
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// Issue a new employee card
pub async fn issue_card(
    payload: EmployeeCreate,
    secret: &str,
    repo: &EmployeeRepository,
) -> AppResult<Employee> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.ref_id, "refId", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.gender, "gender", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.purpose, "purpose", MAX_SHORT_TEXT_LEN)?;

    let expiry = normalize_expiry(&payload)?;
    let signature = card_tag(&payload.name, &payload.ref_id, secret);

    let created = repo
        .create(NewEmployee {
            name: payload.name,
            ref_id: payload.ref_id.clone(),
            gender: payload.gender,
            purpose: payload.purpose,
            expiry,
            signature,
        })
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(_) => {
                AppError::duplicate(format!("Ref ID '{}' already exists", payload.ref_id))
            }
            other => other.into(),
        })?;

    tracing::info!(ref_id = %created.ref_id, id = created.id, "Card issued");
    Ok(created)
}

/// Normalize the redundant `expiry`/`isLifetime` encoding to a single
/// `Option<DateTime<Utc>>`
///
/// An absent expiry means lifetime validity. A payload carrying both an
/// expiry date and `isLifetime = true` is contradictory and rejected.
fn normalize_expiry(payload: &EmployeeCreate) -> AppResult<Option<DateTime<Utc>>> {
    match payload.expiry.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => {
            if payload.is_lifetime == Some(true) {
                return Err(AppError::validation_field(
                    "isLifetime",
                    "isLifetime conflicts with an expiry date",
                ));
            }
            parse_expiry(raw).ok_or_else(|| {
                AppError::validation_field("expiry", format!("Invalid expiry date: {raw}"))
            })
            .map(Some)
        }
    }
}

/// Parse an expiry date string: RFC 3339 or a bare date at midnight UTC
fn parse_expiry(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
