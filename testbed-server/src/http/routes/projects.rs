//! Project endpoints
//!
//! The five CRUD operations over "TestProjects", mounted under /api.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    routing::get,
    Json, Router,
};

use crate::db::repos::ProjectRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{Project, ProjectPayload};

/// GET /api/test - list all projects, id ascending
async fn list_projects(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = ProjectRepo::new(&state.pool).list().await?;
    Ok(Json(projects))
}

/// GET /api/test/{id} - get a single project
async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Project>, ApiError> {
    let project = ProjectRepo::new(&state.pool).get(id).await?;
    Ok(Json(project))
}

/// POST /api/test - create a project
///
/// Any id in the body is ignored; the database generates one and the
/// Location header points at the new resource.
async fn create_project(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ProjectPayload>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<Project>), ApiError> {
    let project = ProjectRepo::new(&state.pool).create(&payload.name).await?;
    let location = format!("/api/test/{}", project.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(project),
    ))
}

/// PUT /api/test/{id} - rename a project
async fn update_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<ProjectPayload>,
) -> Result<StatusCode, ApiError> {
    ProjectRepo::new(&state.pool)
        .update(id, &payload.name)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/test/{id} - delete a project
async fn delete_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    ProjectRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Project routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/test", get(list_projects).post(create_project))
        .route(
            "/test/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
}
