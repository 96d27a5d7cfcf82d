//! Handlers for the `/employees` resource.
//!
//! Each handler issues exactly one statement against the store and replies
//! with either the row list or a `{ "message": ... }` acknowledgement.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use roster_core::employee::{Employee, EmployeeInput};
use roster_core::error::CoreError;
use roster_core::types::DbId;
use roster_db::repositories::EmployeeRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /employees
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = EmployeeRepo::list(&state.pool).await?;
    Ok(Json(employees))
}

/// POST /employees
///
/// Rejects the request with 400 unless all six fields are present.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(input) = payload.map_err(bad_json)?;
    input.validate_for_create()?;

    let id = EmployeeRepo::create(&state.pool, &input).await?;
    tracing::info!(employee_id = id, "Employee created");

    Ok(Json(MessageResponse::new("Employee Added")))
}

/// PUT /employees/{id}
///
/// Overwrites all six fields without validation. A missing id is only an
/// error when `strict_not_found` is enabled.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(id) = id.map_err(bad_path)?;
    let Json(input) = payload.map_err(bad_json)?;
    let updated = EmployeeRepo::update(&state.pool, id, &input).await?;
    if !updated {
        reject_missing_if_strict(&state, id)?;
    }
    tracing::info!(employee_id = id, updated, "Employee update applied");

    Ok(Json(MessageResponse::new("Employee Updated")))
}

/// DELETE /employees/{id}
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(id) = id.map_err(bad_path)?;
    let deleted = EmployeeRepo::delete(&state.pool, id).await?;
    if !deleted {
        reject_missing_if_strict(&state, id)?;
    }
    tracing::info!(employee_id = id, deleted, "Employee delete applied");

    Ok(Json(MessageResponse::new("Employee Deleted")))
}

fn reject_missing_if_strict(state: &AppState, id: DbId) -> AppResult<()> {
    if state.config.strict_not_found {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }));
    }
    Ok(())
}

/// Report an unreadable request body in the standard error envelope.
fn bad_json(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}

/// Report an id segment that is not an integer.
fn bad_path(rejection: PathRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}
