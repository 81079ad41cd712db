use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::error::{Error, Result};
use crate::models::{Task, TaskDraft};
use crate::query::{self, TaskFilter, TaskSort};
use crate::state::AppState;
use crate::tasks::ToggleOutcome;

#[derive(Deserialize, Debug, Default)]
pub struct TaskListParams {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<String>,
}

pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TaskListParams>,
) -> Result<Json<Vec<Task>>> {
    let filter = TaskFilter::parse(params.kind.as_deref())?;
    let sort = TaskSort::parse(params.sort.as_deref())?;
    let limit = query::parse_limit(params.limit.as_deref());
    Ok(Json(state.tasks.read().await.list(filter, sort, limit)))
}

pub async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<TaskDraft>,
) -> Result<(StatusCode, Json<Task>)> {
    // Lock order: groups before tasks.
    let groups = state.groups.read().await;
    let mut tasks = state.tasks.write().await;
    let created = tasks.create(draft, &groups)?;
    Ok((StatusCode::ACCEPTED, Json(created)))
}

pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(draft): Json<TaskDraft>,
) -> Result<(StatusCode, Json<Task>)> {
    let updated = state.tasks.write().await.update(&id, draft)?;
    Ok((StatusCode::ACCEPTED, Json(updated)))
}

#[derive(Deserialize, Debug, Default)]
pub struct ByGroupParams {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

pub async fn tasks_by_group(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(params): Query<ByGroupParams>,
) -> Result<Json<Vec<Task>>> {
    let filter = TaskFilter::parse(params.kind.as_deref())?;
    Ok(Json(state.tasks.read().await.by_group(id, filter)))
}

#[derive(Deserialize, Debug, Default)]
pub struct ToggleParams {
    pub finished: Option<String>,
}

pub async fn toggle_task_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<ToggleParams>,
) -> Result<Response> {
    // Only the literal strings are accepted.
    let finished = match params.finished.as_deref() {
        Some("true") => true,
        Some("false") => false,
        _ => return Err(Error::BadRequest("finished")),
    };
    let outcome = state.tasks.write().await.set_status(&id, finished)?;
    Ok(match outcome {
        ToggleOutcome::Changed(task) => Json(task).into_response(),
        ToggleOutcome::AlreadySet(_) => Json(json!({
            "message": "the status of the task already matches the request"
        }))
        .into_response(),
    })
}
