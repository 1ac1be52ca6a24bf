// src/project/routes.rs

use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use super::store::StoreError;
use super::types::{
    CreateProjectRequest, CreateTaskRequest, Project, Task, UpdateProjectRequest,
    UpdateTaskRequest,
};
use crate::state::AppState;

pub fn project_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/projects/{id}/tasks", post(create_task))
        .route(
            "/projects/{id}/tasks/{task_id}",
            put(update_task).delete(delete_task),
        )
}

async fn list_projects(State(app_state): State<Arc<AppState>>) -> Json<Vec<Project>> {
    Json(app_state.project_store.list_projects().await)
}

async fn get_project(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Project>, ApiError> {
    let project = app_state.project_store.get_project(&id).await?;
    Ok(Json(project))
}

async fn create_project(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<CreateProjectRequest>,
) -> impl IntoResponse {
    let project = app_state
        .project_store
        .create_project(req.name, req.description)
        .await;

    (StatusCode::CREATED, Json(project))
}

async fn update_project(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProjectRequest>,
) -> Result<Json<Project>, ApiError> {
    let project = app_state
        .project_store
        .update_project(&id, req.name, req.description)
        .await?;

    Ok(Json(project))
}

async fn delete_project(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    app_state.project_store.delete_project(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn create_task(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let task = app_state
        .project_store
        .create_task(&id, req.title, req.description)
        .await?;

    Ok((StatusCode::CREATED, Json(task)))
}

async fn update_task(
    State(app_state): State<Arc<AppState>>,
    Path((id, task_id)): Path<(String, String)>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, ApiError> {
    let task = app_state
        .project_store
        .update_task(&id, &task_id, req.title, req.description, req.completed)
        .await?;

    Ok(Json(task))
}

async fn delete_task(
    State(app_state): State<Arc<AppState>>,
    Path((id, task_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    app_state.project_store.delete_task(&id, &task_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Maps store lookup failures onto the HTTP surface
#[derive(Debug)]
struct ApiError(StoreError);

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "error": self.0.to_string()
            })),
        )
            .into_response()
    }
}
