use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::validate::ValidationError;

/// Everything a handler can surface to the client. Store errors are
/// collapsed to one generic body; subtypes (not-found, conflict,
/// connectivity) are not distinguished.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("Incorrect Credentials")]
    IncorrectCredentials,
    #[error("Your session has expired.")]
    SessionExpired,
    #[error("Please Re-Login.")]
    ReLogin,
    #[error("Something went wrong")]
    Store(anyhow::Error),
}

impl ApiError {
    pub fn store(err: impl Into<anyhow::Error>) -> Self {
        ApiError::Store(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Validation(e) => (StatusCode::BAD_REQUEST, json!({ "err": e.to_string() })),
            ApiError::IncorrectCredentials => {
                (StatusCode::FORBIDDEN, json!({ "message": self.to_string() }))
            }
            ApiError::SessionExpired | ApiError::ReLogin => {
                (StatusCode::UNAUTHORIZED, json!({ "err": self.to_string() }))
            }
            ApiError::Store(e) => {
                error!(error = %e, "store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "err": self.to_string() }))
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::FieldIssue;

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("body is json")
    }

    #[tokio::test]
    async fn validation_maps_to_400_with_field_detail() {
        let err = ApiError::Validation(ValidationError {
            issues: vec![FieldIssue {
                field: "email",
                message: "must be a valid email",
            }],
        });
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["err"], "email: must be a valid email");
    }

    #[tokio::test]
    async fn wrong_credentials_is_403_with_message_body() {
        let resp = ApiError::IncorrectCredentials.into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body = body_json(resp).await;
        assert_eq!(body["message"], "Incorrect Credentials");
    }

    #[tokio::test]
    async fn auth_failures_are_401() {
        let resp = ApiError::SessionExpired.into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(resp).await;
        assert_eq!(body["err"], "Your session has expired.");

        let resp = ApiError::ReLogin.into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(resp).await;
        assert_eq!(body["err"], "Please Re-Login.");
    }

    #[tokio::test]
    async fn store_errors_collapse_to_generic_500() {
        let resp = ApiError::store(anyhow::anyhow!("duplicate key value")).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        assert_eq!(body["err"], "Something went wrong");
    }
}
