//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use mdedit_core::pagination::PageRequest;
use mdedit_core::types::DbId;
use mdedit_db::models::document::Document;
use mdedit_db::models::project::{CreateProject, Project, ProjectPage, UpdateProject};

use crate::error::AppResult;
use crate::handlers::document::{version_headers, VersionHeaders};
use crate::query::ListProjectsParams;
use crate::state::AppState;

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let (project, _document) = state.projects.create(&input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects?page=&pageSize=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListProjectsParams>,
) -> AppResult<Json<ProjectPage>> {
    let page = PageRequest::from_raw(params.page.as_deref(), params.page_size.as_deref());
    let projects = state.projects.list(page).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = state.projects.get(id).await?;
    Ok(Json(project))
}

/// PUT|PATCH /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = state.projects.rename(id, &input).await?;
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.projects.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/projects/{id}/document
///
/// Carries `X-Document-Version` like every other document response.
pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<(VersionHeaders, Json<Document>)> {
    let document = state.projects.document(id).await?;
    Ok((version_headers(document.version), Json(document)))
}
