use axum::{extract::State, Json};
use common::types::Message;
use models::project;
use service::domain::{CreateProjectInput, PatchProjectInput, ProjectWithEmployees, UpdateProjectInput};
use service::project_service;

use crate::errors::{ApiJson, ApiPath, JsonApiError};
use crate::state::AppState;

#[utoipa::path(
    post, path = "/projects/", tag = "projects",
    request_body = crate::openapi::CreateProjectDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ProjectDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateProjectInput>,
) -> Result<Json<project::Model>, JsonApiError> {
    Ok(Json(project_service::create_project(&state.db, input).await?))
}

#[utoipa::path(
    get, path = "/projects/", tag = "projects",
    responses((status = 200, description = "List OK", body = [crate::openapi::ProjectListItemDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ProjectWithEmployees>>, JsonApiError> {
    Ok(Json(project_service::list_projects(&state.db).await?))
}

#[utoipa::path(
    put, path = "/projects/{id}", tag = "projects",
    params(("id" = i32, Path, description = "Project id")),
    request_body = crate::openapi::UpdateProjectDoc,
    responses(
        (status = 200, description = "Updated; empty values are ignored", body = crate::openapi::ProjectDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<UpdateProjectInput>,
) -> Result<Json<project::Model>, JsonApiError> {
    Ok(Json(project_service::update_project(&state.db, id, input).await?))
}

#[utoipa::path(
    patch, path = "/projects/{id}", tag = "projects",
    params(("id" = i32, Path, description = "Project id")),
    request_body = crate::openapi::UpdateProjectDoc,
    responses(
        (status = 200, description = "Updated; every present key is applied", body = crate::openapi::ProjectDoc),
        (status = 400, description = "Null name", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn patch(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<PatchProjectInput>,
) -> Result<Json<project::Model>, JsonApiError> {
    Ok(Json(project_service::patch_project(&state.db, id, input).await?))
}

#[utoipa::path(
    delete, path = "/projects/{id}", tag = "projects",
    params(("id" = i32, Path, description = "Project id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Message>, JsonApiError> {
    project_service::delete_project(&state.db, id).await?;
    Ok(Json(Message::new("Project deleted successfully")))
}
