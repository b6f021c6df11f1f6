//! Authentication extractor for token-gated routes.
//!
//! The cart endpoints require a bearer token in the `auth-token` header.
//! All failure modes - missing header, malformed token, bad signature,
//! expired - collapse to the same 401 response, so a probing client learns
//! nothing about why its token was refused.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;

use shopper_core::UserId;

use crate::state::AppState;

/// The HTTP header carrying the bearer token.
pub const AUTH_TOKEN_HEADER: &str = "auth-token";

/// Extractor that requires a valid bearer token.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     AuthUser(user_id): AuthUser,
/// ) -> impl IntoResponse {
///     format!("Hello, user {user_id}!")
/// }
/// ```
pub struct AuthUser(pub UserId);

/// Uniform rejection for every authentication failure.
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "error": "Please authenticate using a valid token",
        }));
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTH_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthRejection)?;

        let user_id = state.tokens().verify(token).map_err(|_| AuthRejection)?;

        Ok(Self(user_id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::Request;
    use secrecy::SecretString;
    use sqlx::postgres::PgPoolOptions;

    use super::*;
    use crate::config::ApiConfig;

    fn test_state() -> AppState {
        let config = ApiConfig {
            database_url: SecretString::from("postgres://localhost/shopper_test"),
            host: "127.0.0.1".parse().unwrap(),
            port: 4000,
            jwt_secret: SecretString::from("k9#mQ2$vX7@pL4!wZ8&nB5^jR3*tF6%c"),
            token_ttl_days: 30,
        };
        // Lazy pool: never connects unless a query runs, which these tests
        // never do.
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/shopper_test")
            .unwrap();
        AppState::new(config, pool)
    }

    #[tokio::test]
    async fn missing_header_is_rejected() {
        let state = test_state();
        let request = Request::builder().uri("/api/getcart").body(()).unwrap();
        let (mut parts, ()) = request.into_parts();

        let result = AuthUser::from_request_parts(&mut parts, &state).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let state = test_state();
        let request = Request::builder()
            .uri("/api/getcart")
            .header(AUTH_TOKEN_HEADER, "not-a-token")
            .body(())
            .unwrap();
        let (mut parts, ()) = request.into_parts();

        let result = AuthUser::from_request_parts(&mut parts, &state).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn valid_token_extracts_the_user_id() {
        let state = test_state();
        let token = state.tokens().issue(UserId::new(42)).unwrap();
        let request = Request::builder()
            .uri("/api/getcart")
            .header(AUTH_TOKEN_HEADER, token)
            .body(())
            .unwrap();
        let (mut parts, ()) = request.into_parts();

        let AuthUser(user_id) = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .map_err(|_| "rejected")
            .unwrap();
        assert_eq!(user_id, UserId::new(42));
    }

    #[tokio::test]
    async fn rejection_renders_the_uniform_401() {
        let response = AuthRejection.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["error"], "Please authenticate using a valid token");
    }
}
