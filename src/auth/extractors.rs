use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;
use uuid::Uuid;

use super::jwt::JwtKeys;
use crate::error::ApiError;

/// Gate for the blog routes: resolves the bearer token in the Authorization
/// header to the acting user's id, or rejects the request.
#[derive(Debug)]
pub struct AuthUser(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::SessionExpired)?;

        // "<scheme> <token>"; the scheme value itself is not checked
        let token = header.split_whitespace().nth(1).ok_or(ApiError::ReLogin)?;

        let user_id = keys.verify(token).map_err(|e| {
            warn!(error = %e, "token verification failed");
            ApiError::ReLogin
        })?;

        Ok(AuthUser(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use jsonwebtoken::{DecodingKey, EncodingKey};

    fn keys() -> JwtKeys {
        JwtKeys {
            encoding: EncodingKey::from_secret(b"test-secret"),
            decoding: DecodingKey::from_secret(b"test-secret"),
        }
    }

    fn parts(auth_header: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/blog/bulk");
        if let Some(v) = auth_header {
            builder = builder.header("authorization", v);
        }
        let (parts, _) = builder.body(()).expect("build request").into_parts();
        parts
    }

    #[tokio::test]
    async fn missing_header_is_session_expired() {
        let mut parts = parts(None);
        let err = AuthUser::from_request_parts(&mut parts, &keys())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::SessionExpired));
    }

    #[tokio::test]
    async fn header_without_token_segment_asks_for_relogin() {
        let mut parts = parts(Some("Bearer"));
        let err = AuthUser::from_request_parts(&mut parts, &keys())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::ReLogin));
    }

    #[tokio::test]
    async fn garbage_token_asks_for_relogin() {
        let mut parts = parts(Some("Bearer nonsense"));
        let err = AuthUser::from_request_parts(&mut parts, &keys())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::ReLogin));
    }

    #[tokio::test]
    async fn token_signed_elsewhere_asks_for_relogin() {
        let other = JwtKeys {
            encoding: EncodingKey::from_secret(b"other-secret"),
            decoding: DecodingKey::from_secret(b"other-secret"),
        };
        let token = other.sign(Uuid::new_v4()).expect("sign");
        let mut parts = parts(Some(&format!("Bearer {token}")));
        let err = AuthUser::from_request_parts(&mut parts, &keys())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::ReLogin));
    }

    #[tokio::test]
    async fn valid_token_yields_the_user_id() {
        let user_id = Uuid::new_v4();
        let token = keys().sign(user_id).expect("sign");
        let mut parts = parts(Some(&format!("Bearer {token}")));
        let AuthUser(extracted) = AuthUser::from_request_parts(&mut parts, &keys())
            .await
            .expect("extract");
        assert_eq!(extracted, user_id);
    }

    #[tokio::test]
    async fn scheme_value_is_not_inspected() {
        let user_id = Uuid::new_v4();
        let token = keys().sign(user_id).expect("sign");
        let mut parts = parts(Some(&format!("Token {token}")));
        let AuthUser(extracted) = AuthUser::from_request_parts(&mut parts, &keys())
            .await
            .expect("extract");
        assert_eq!(extracted, user_id);
    }
}
