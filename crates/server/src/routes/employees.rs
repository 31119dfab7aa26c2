use axum::{extract::State, Json};
use common::types::Message;
use models::employee;
use service::domain::{CreateEmployeeInput, EmployeeWithProjects, PatchEmployeeInput, UpdateEmployeeInput};
use service::employee_service;

use crate::errors::{ApiJson, ApiPath, JsonApiError};
use crate::state::AppState;

#[utoipa::path(
    post, path = "/employees/", tag = "employees",
    request_body = crate::openapi::CreateEmployeeDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::EmployeeDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateEmployeeInput>,
) -> Result<Json<employee::Model>, JsonApiError> {
    Ok(Json(employee_service::create_employee(&state.db, input).await?))
}

#[utoipa::path(
    get, path = "/employees/", tag = "employees",
    responses((status = 200, description = "List OK", body = [crate::openapi::EmployeeListItemDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<EmployeeWithProjects>>, JsonApiError> {
    Ok(Json(employee_service::list_employees(&state.db).await?))
}

#[utoipa::path(
    put, path = "/employees/{id}", tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    request_body = crate::openapi::UpdateEmployeeDoc,
    responses(
        (status = 200, description = "Updated; empty values are ignored", body = crate::openapi::EmployeeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<UpdateEmployeeInput>,
) -> Result<Json<employee::Model>, JsonApiError> {
    Ok(Json(employee_service::update_employee(&state.db, id, input).await?))
}

#[utoipa::path(
    patch, path = "/employees/{id}", tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    request_body = crate::openapi::UpdateEmployeeDoc,
    responses(
        (status = 200, description = "Updated; every present key is applied", body = crate::openapi::EmployeeDoc),
        (status = 400, description = "Null for a required field", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn patch(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<PatchEmployeeInput>,
) -> Result<Json<employee::Model>, JsonApiError> {
    Ok(Json(employee_service::patch_employee(&state.db, id, input).await?))
}

#[utoipa::path(
    delete, path = "/employees/{id}", tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Message>, JsonApiError> {
    employee_service::delete_employee(&state.db, id).await?;
    Ok(Json(Message::new("Employee deleted successfully")))
}
