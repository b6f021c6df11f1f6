//! Signup and login route handlers.
//!
//! Both return `{"success": true, "token": ...}` on success; the token goes
//! into the `auth-token` header of subsequent cart requests.

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::instrument;

use crate::error::Result;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Signup request body.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Create an account and return a bearer token.
#[instrument(skip(state, request), fields(email = %request.email))]
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<Value>> {
    let user = AuthService::new(state.pool())
        .signup(&request.username, &request.email, &request.password)
        .await?;

    let token = state.tokens().issue(user.id)?;

    tracing::info!(user_id = %user.id, "user signed up");

    Ok(Json(json!({ "success": true, "token": token })))
}

/// Authenticate and return a bearer token.
#[instrument(skip(state, request), fields(email = %request.email))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Value>> {
    let user = AuthService::new(state.pool())
        .login(&request.email, &request.password)
        .await?;

    let token = state.tokens().issue(user.id)?;

    tracing::info!(user_id = %user.id, "user logged in");

    Ok(Json(json!({ "success": true, "token": token })))
}
