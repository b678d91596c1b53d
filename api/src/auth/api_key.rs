//! API key authentication middleware

use std::sync::Arc;

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use crate::app::{hash_api_key, AccountService};
use crate::domain::ports::UserRepository;
use crate::error::AppError;

/// Extract the API key from the Authorization header
fn extract_api_key(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Authentication middleware
///
/// Validates the API key and injects the User into request extensions.
/// Routes that require authentication should use this middleware.
/// Generic over the user repository so the rejection paths can be
/// exercised against the in-memory store; the router state only needs
/// to lend out its account service via FromRef.
pub async fn auth_middleware<UR>(
    State(accounts): State<Arc<AccountService<UR>>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError>
where
    UR: UserRepository + 'static,
{
    let api_key = extract_api_key(&request).ok_or(AppError::Unauthorized)?;

    let key_hash = hash_api_key(api_key);

    let user = accounts
        .find_by_api_key(&key_hash)
        .await?
        .ok_or(AppError::Unauthorized)?;

    // Update last seen (fire and forget, log errors)
    let user_id = user.id;
    let accounts = accounts.clone();
    tokio::spawn(async move {
        if let Err(e) = accounts.touch(&user_id).await {
            tracing::warn!(error = %e, user_id = %user_id.0, "Failed to update last_seen");
        }
    });

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
