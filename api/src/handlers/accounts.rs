//! Account handlers
//!
//! Registration endpoint. The API key is returned exactly once, at
//! registration time; only its hash is stored.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::AppState;

/// Request body for registering a new account
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
}

/// Response for a successful registration
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: String,
    pub username: String,
    /// Shown once; store it somewhere safe.
    pub api_key: String,
    pub message: String,
}

/// POST /accounts/register
///
/// Register a new account and hand back its API key.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let (user, api_key) = state.account_service.register(&request.username).await?;
    tracing::info!(user_id = %user.id, username = %user.username, "Account registered");

    let response = RegisterResponse {
        id: user.id.to_string(),
        username: user.username,
        api_key,
        message: "Save this API key; it will not be shown again.".to_string(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}
