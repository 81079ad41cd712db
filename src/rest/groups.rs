use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::models::Group;
use crate::query::{self, GroupSort};
use crate::state::AppState;

#[derive(Deserialize, Debug, Default)]
pub struct GroupListParams {
    pub sort: Option<String>,
    pub limit: Option<String>,
}

pub async fn list_groups(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GroupListParams>,
) -> Result<Json<Vec<Group>>> {
    let sort = GroupSort::parse(params.sort.as_deref())?;
    let limit = query::parse_limit(params.limit.as_deref());
    Ok(Json(state.groups.read().await.list(sort, limit)))
}

pub async fn top_parents(State(state): State<Arc<AppState>>) -> Json<Vec<Group>> {
    Json(state.groups.read().await.top_level())
}

pub async fn get_group(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Group>> {
    state
        .groups
        .read()
        .await
        .by_id(id)
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("group {id} does not exist")))
}

pub async fn group_children(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Group>>> {
    state
        .groups
        .read()
        .await
        .children_of(id)
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("group {id} does not exist")))
}

pub async fn create_group(
    State(state): State<Arc<AppState>>,
    Json(group): Json<Group>,
) -> Result<(StatusCode, Json<Group>)> {
    let created = state.groups.write().await.create(group)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_group(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(group): Json<Group>,
) -> Result<Json<Group>> {
    let updated = state.groups.write().await.update(id, group)?;
    Ok(Json(updated))
}

pub async fn delete_group(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>> {
    // Lock order: groups before tasks.
    let mut groups = state.groups.write().await;
    let tasks = state.tasks.read().await;
    groups.delete(id, &tasks)?;
    Ok(Json(json!({ "message": format!("group {id} deleted") })))
}
