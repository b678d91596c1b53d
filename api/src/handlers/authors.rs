//! Author handlers
//!
//! Endpoints for the author collection. Author responses nest the
//! author's books.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::books::BookResponse;
use crate::domain::entities::{AuthorId, AuthorWithBooks, NewAuthor, User};
use crate::error::AppError;
use crate::AppState;

/// Request body for creating or renaming an author
#[derive(Debug, Deserialize)]
pub struct AuthorRequest {
    pub name: String,
}

/// Response for a single author with nested books
#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    pub id: String,
    pub name: String,
    pub books: Vec<BookResponse>,
}

impl From<AuthorWithBooks> for AuthorResponse {
    fn from(detail: AuthorWithBooks) -> Self {
        AuthorResponse {
            id: detail.author.id.to_string(),
            name: detail.author.name,
            books: detail.books.into_iter().map(BookResponse::from).collect(),
        }
    }
}

/// GET /authors
///
/// List authors with their books.
pub async fn list_authors(
    State(state): State<AppState>,
) -> Result<Json<Vec<AuthorResponse>>, AppError> {
    let authors = state.author_service.list().await?;
    Ok(Json(authors.into_iter().map(AuthorResponse::from).collect()))
}

/// GET /authors/:id
///
/// Retrieve a single author with their books.
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AuthorResponse>, AppError> {
    let author = state
        .author_service
        .get(&AuthorId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))?;

    Ok(Json(author.into()))
}

/// POST /authors
///
/// Create an author. Requires authentication.
pub async fn create_author(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(request): Json<AuthorRequest>,
) -> Result<(StatusCode, Json<AuthorResponse>), AppError> {
    let author = state
        .author_service
        .create(&NewAuthor { name: request.name })
        .await?;
    tracing::info!(author_id = %author.id, user = %user.username, "Author created");

    let response = AuthorResponse {
        id: author.id.to_string(),
        name: author.name,
        books: Vec::new(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /authors/:id
///
/// Rename an author. Requires authentication.
pub async fn update_author(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
    Json(request): Json<AuthorRequest>,
) -> Result<Json<AuthorResponse>, AppError> {
    let author = state
        .author_service
        .update(&AuthorId(id), &NewAuthor { name: request.name })
        .await?;
    tracing::info!(author_id = %author.id, user = %user.username, "Author updated");

    // Re-read for the nested book list
    let detail = state
        .author_service
        .get(&author.id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author {} not found", author.id)))?;
    Ok(Json(detail.into()))
}

/// DELETE /authors/:id
///
/// Delete an author and their books. Requires authentication.
pub async fn delete_author(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.author_service.delete(&AuthorId(id)).await?;
    tracing::info!(author_id = %id, user = %user.username, "Author deleted");
    Ok(StatusCode::NO_CONTENT)
}
