use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::extractors::AuthUser,
    blog::{
        dto::{CreateBlogRequest, IdResponse, PostEnvelope, UpdateBlogRequest},
        repo_types::Post,
    },
    error::ApiError,
    state::AppState,
    validate,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/blog/bulk", get(bulk))
        .route("/blog/get/:id", get(get_post))
        .route("/blog", post(create_post).put(update_post))
}

#[instrument(skip(state))]
pub async fn bulk(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
) -> Result<Json<Vec<Post>>, ApiError> {
    let mut conn = state.db.acquire().await.map_err(ApiError::store)?;
    let posts = Post::list(&mut conn).await.map_err(ApiError::store)?;
    Ok(Json(posts))
}

#[instrument(skip(state))]
pub async fn get_post(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<PostEnvelope>, ApiError> {
    // an id that is not a uuid cannot name a post; treat it like a miss
    let post = match Uuid::parse_str(&id) {
        Ok(id) => {
            let mut conn = state.db.acquire().await.map_err(ApiError::store)?;
            Post::find_by_id(&mut conn, id).await.map_err(ApiError::store)?
        }
        Err(_) => None,
    };
    Ok(Json(PostEnvelope { post }))
}

#[instrument(skip(state, payload))]
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateBlogRequest>,
) -> Result<Json<IdResponse>, ApiError> {
    let payload = validate::create_blog(payload).map_err(|e| {
        warn!(error = %e, "create validation failed");
        e
    })?;

    let mut conn = state.db.acquire().await.map_err(ApiError::store)?;
    let post = Post::create(&mut conn, &payload.title, &payload.content, user_id)
        .await
        .map_err(ApiError::store)?;

    info!(post_id = %post.id, author_id = %user_id, "post created");
    Ok(Json(IdResponse { id: post.id }))
}

// The author binding is not re-checked on update.
#[instrument(skip(state, payload))]
pub async fn update_post(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Json(payload): Json<UpdateBlogRequest>,
) -> Result<Json<IdResponse>, ApiError> {
    let payload = validate::update_blog(payload).map_err(|e| {
        warn!(error = %e, "update validation failed");
        e
    })?;

    let id = Uuid::parse_str(&payload.id).map_err(ApiError::store)?;
    let mut conn = state.db.acquire().await.map_err(ApiError::store)?;
    let post = Post::update(&mut conn, id, &payload.title, &payload.content)
        .await
        .map_err(ApiError::store)?
        .ok_or_else(|| ApiError::store(anyhow::anyhow!("post {id} not found")))?;

    info!(post_id = %post.id, "post updated");
    Ok(Json(IdResponse { id: post.id }))
}
