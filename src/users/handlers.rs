use axum::{
    extract::{FromRef, State},
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::jwt::JwtKeys,
    error::ApiError,
    state::AppState,
    users::{
        dto::{SigninRequest, SignupRequest, TokenResponse},
        repo_types::User,
    },
    validate,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user/signup", post(signup))
        .route("/user/signin", post(signin))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let payload = validate::signup(payload).map_err(|e| {
        warn!(error = %e, "signup validation failed");
        e
    })?;

    let mut conn = state.db.acquire().await.map_err(ApiError::store)?;
    let user = User::create(
        &mut conn,
        &payload.email,
        &payload.password,
        payload.name.as_deref(),
    )
    .await
    .map_err(ApiError::store)?;

    let keys = JwtKeys::from_ref(&state);
    let jwt = keys.sign(user.id).map_err(ApiError::store)?;

    info!(user_id = %user.id, email = %user.email, "user signed up");
    Ok(Json(TokenResponse {
        token: format!("Bearer {jwt}"),
    }))
}

#[instrument(skip(state, payload))]
pub async fn signin(
    State(state): State<AppState>,
    Json(payload): Json<SigninRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let payload = validate::signin(payload).map_err(|e| {
        warn!(error = %e, "signin validation failed");
        e
    })?;

    let mut conn = state.db.acquire().await.map_err(ApiError::store)?;
    let user = User::find_by_credentials(&mut conn, &payload.email, &payload.password)
        .await
        .map_err(ApiError::store)?
        .ok_or_else(|| {
            warn!(email = %payload.email, "signin with wrong credentials");
            ApiError::IncorrectCredentials
        })?;

    let keys = JwtKeys::from_ref(&state);
    let jwt = keys.sign(user.id).map_err(ApiError::store)?;

    info!(user_id = %user.id, "user signed in");
    Ok(Json(TokenResponse {
        token: format!("Bearer {jwt}"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_carries_the_bearer_prefix() {
        let resp = TokenResponse {
            token: "Bearer abc.def.ghi".into(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains(r#""token":"Bearer "#));
    }
}
