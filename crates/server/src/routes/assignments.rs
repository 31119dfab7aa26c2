use axum::{extract::State, Json};
use common::types::Message;
use models::project_employee;
use service::assignment_service;
use service::domain::AssignInput;

use crate::errors::{ApiJson, JsonApiError};
use crate::state::AppState;

#[utoipa::path(
    post, path = "/assign/", tag = "assignments",
    request_body = crate::openapi::AssignDoc,
    responses(
        (status = 200, description = "Assigned (or already assigned)", body = crate::openapi::MessageDoc),
        (status = 400, description = "Missing id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Project or Employee not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn assign(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<AssignInput>,
) -> Result<Json<Message>, JsonApiError> {
    assignment_service::assign_employee_to_project(&state.db, input).await?;
    Ok(Json(Message::new("Employee assigned to Project successfully")))
}

#[utoipa::path(
    get, path = "/assignments/", tag = "assignments",
    responses((status = 200, description = "List OK", body = [crate::openapi::AssignmentDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<project_employee::Model>>, JsonApiError> {
    Ok(Json(assignment_service::list_assignments(&state.db).await?))
}
