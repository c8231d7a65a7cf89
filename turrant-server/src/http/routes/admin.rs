//! Admin post endpoints
//!
//! No authentication: anything that can reach these routes can change content.
//! Failures use the same status mapping as the public endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use serde::Serialize;

use super::Data;
use crate::db::PostRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::{NewPost, Post, PostPatch};

/// Delete response: `{ "data": true, "message": "Post deleted" }`
#[derive(Serialize)]
pub struct DeleteResponse {
    pub data: bool,
    pub message: &'static str,
}

/// GET /api/admin/posts - every post including drafts
async fn list_all_posts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Data<Vec<Post>>>, ApiError> {
    let posts = PostRepo::new(&state.db)
        .list_all()
        .await
        .map_err(ApiError::list)?;
    Ok(Data::json(posts))
}

/// POST /api/admin/posts - create a post
async fn create_post(
    State(state): State<Arc<AppState>>,
    ValidJson(post): ValidJson<NewPost>,
) -> Result<Json<Data<Post>>, ApiError> {
    let created = PostRepo::new(&state.db).create(&post).await?;
    Ok(Data::json(created))
}

/// PUT /api/admin/posts/{id} - partial update; `data` is null for an unknown id
async fn update_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ValidJson(patch): ValidJson<PostPatch>,
) -> Result<Json<Data<Option<Post>>>, ApiError> {
    let updated = PostRepo::new(&state.db).update(&id, &patch).await?;
    if updated.is_none() {
        tracing::debug!(id = %id, "update matched no post");
    }
    Ok(Data::json(updated))
}

/// DELETE /api/admin/posts/{id}
async fn delete_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    PostRepo::new(&state.db).delete(&id).await?;
    Ok(Json(DeleteResponse {
        data: true,
        message: "Post deleted",
    }))
}

/// Admin routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/admin/posts", get(list_all_posts).post(create_post))
        .route("/api/admin/posts/{id}", put(update_post).delete(delete_post))
}
