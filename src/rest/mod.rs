//! HTTP surface of the service. Handlers parse the request, take the
//! store locks, call one core operation, and serialize the outcome; no
//! business logic lives here.
//!
//! Routes:
//!   GET    /groups?sort=&limit=
//!   GET    /group/top_parents
//!   GET    /group/{id}
//!   GET    /group/childs/{id}
//!   POST   /group/new
//!   PUT    /group/{id}
//!   DELETE /group/{id}
//!   GET    /tasks?type=&sort=&limit=
//!   POST   /tasks/new
//!   PUT    /tasks/{id}
//!   GET    /tasks/group/{id}?type=
//!   POST   /tasks/{id}?finished=

pub mod groups;
pub mod tasks;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/groups", get(groups::list_groups))
        .route("/group/top_parents", get(groups::top_parents))
        .route("/group/new", post(groups::create_group))
        .route(
            "/group/{id}",
            get(groups::get_group).put(groups::update_group).delete(groups::delete_group),
        )
        .route("/group/childs/{id}", get(groups::group_children))
        .route("/tasks", get(tasks::list_tasks))
        .route("/tasks/new", post(tasks::create_task))
        .route("/tasks/group/{id}", get(tasks::tasks_by_group))
        .route(
            "/tasks/{id}",
            put(tasks::update_task).post(tasks::toggle_task_status),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds `addr` and serves requests until the process is stopped.
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> Result<()> {
    let router = build_router(state);
    info!("listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
