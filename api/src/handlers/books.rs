//! Book handlers
//!
//! Endpoints for the book collection. Reads are public; writes sit
//! behind the auth middleware.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{AuthorId, Book, BookId, BookQuery, NewBook, User};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing books
///
/// `author__name` keeps the double-underscore lookup spelling of the
/// public API; `ordering` takes a field name with an optional leading
/// `-` for descending.
#[derive(Debug, Deserialize)]
pub struct ListBooksQuery {
    pub title: Option<String>,
    pub publication_year: Option<i32>,
    pub author: Option<Uuid>,
    #[serde(rename = "author__name")]
    pub author_name: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

impl ListBooksQuery {
    fn into_domain(self) -> Result<BookQuery, AppError> {
        let ordering = match self.ordering {
            Some(raw) => raw.parse().map_err(AppError::BadRequest)?,
            None => Default::default(),
        };

        Ok(BookQuery {
            title: self.title,
            publication_year: self.publication_year,
            author: self.author.map(AuthorId),
            author_name: self.author_name,
            search: self.search,
            ordering,
        })
    }
}

/// Request body for creating or replacing a book
#[derive(Debug, Deserialize)]
pub struct BookRequest {
    pub title: String,
    pub publication_year: i32,
    /// ID of the owning author
    pub author: Uuid,
}

impl BookRequest {
    fn into_domain(self) -> NewBook {
        NewBook {
            title: self.title,
            publication_year: self.publication_year,
            author_id: AuthorId(self.author),
        }
    }
}

/// Response for a single book
#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: String,
    pub title: String,
    pub publication_year: i32,
    pub author: String,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        BookResponse {
            id: book.id.to_string(),
            title: book.title,
            publication_year: book.publication_year,
            author: book.author_id.to_string(),
        }
    }
}

/// GET /books
///
/// List books, filtered, searched and ordered per the query string.
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<ListBooksQuery>,
) -> Result<Json<Vec<BookResponse>>, AppError> {
    let books = state.book_service.list(&query.into_domain()?).await?;
    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// GET /books/:id
///
/// Retrieve a single book.
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookResponse>, AppError> {
    let book = state
        .book_service
        .get(&BookId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;

    Ok(Json(book.into()))
}

/// POST /books
///
/// Create a book. Requires authentication.
pub async fn create_book(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(request): Json<BookRequest>,
) -> Result<(StatusCode, Json<BookResponse>), AppError> {
    let book = state.book_service.create(&request.into_domain()).await?;
    tracing::info!(book_id = %book.id, user = %user.username, "Book created");
    Ok((StatusCode::CREATED, Json(book.into())))
}

/// PUT /books/:id
///
/// Replace a book's fields. Requires authentication.
pub async fn update_book(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
    Json(request): Json<BookRequest>,
) -> Result<Json<BookResponse>, AppError> {
    let book = state
        .book_service
        .update(&BookId(id), &request.into_domain())
        .await?;
    tracing::info!(book_id = %book.id, user = %user.username, "Book updated");
    Ok(Json(book.into()))
}

/// DELETE /books/:id
///
/// Delete a book. Requires authentication.
pub async fn delete_book(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.book_service.delete(&BookId(id)).await?;
    tracing::info!(book_id = %id, user = %user.username, "Book deleted");
    Ok(StatusCode::NO_CONTENT)
}
