//! Library handlers
//!
//! Endpoints for libraries, their shelved books and their librarian.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::books::BookResponse;
use crate::domain::entities::{BookId, Librarian, Library, LibraryId, LibraryWithBooks, NewLibrary, User};
use crate::error::AppError;
use crate::AppState;

/// Request body for creating a library
#[derive(Debug, Deserialize)]
pub struct LibraryRequest {
    pub name: String,
}

/// Request body for shelving a book
#[derive(Debug, Deserialize)]
pub struct AddBookRequest {
    /// ID of the book to shelve
    pub book: Uuid,
}

/// Request body for assigning a librarian
#[derive(Debug, Deserialize)]
pub struct AssignLibrarianRequest {
    pub name: String,
}

/// Response for a library in a listing
#[derive(Debug, Serialize)]
pub struct LibraryResponse {
    pub id: String,
    pub name: String,
}

impl From<Library> for LibraryResponse {
    fn from(library: Library) -> Self {
        LibraryResponse {
            id: library.id.to_string(),
            name: library.name,
        }
    }
}

/// Response for a single library with its books
#[derive(Debug, Serialize)]
pub struct LibraryDetailResponse {
    pub id: String,
    pub name: String,
    pub books: Vec<BookResponse>,
}

impl From<LibraryWithBooks> for LibraryDetailResponse {
    fn from(detail: LibraryWithBooks) -> Self {
        LibraryDetailResponse {
            id: detail.library.id.to_string(),
            name: detail.library.name,
            books: detail.books.into_iter().map(BookResponse::from).collect(),
        }
    }
}

/// Response for a librarian
#[derive(Debug, Serialize)]
pub struct LibrarianResponse {
    pub id: String,
    pub name: String,
    pub library: String,
}

impl From<Librarian> for LibrarianResponse {
    fn from(librarian: Librarian) -> Self {
        LibrarianResponse {
            id: librarian.id.to_string(),
            name: librarian.name,
            library: librarian.library_id.to_string(),
        }
    }
}

/// GET /libraries
pub async fn list_libraries(
    State(state): State<AppState>,
) -> Result<Json<Vec<LibraryResponse>>, AppError> {
    let libraries = state.library_service.list().await?;
    Ok(Json(
        libraries.into_iter().map(LibraryResponse::from).collect(),
    ))
}

/// GET /libraries/:id
///
/// Retrieve a library with its shelved books.
pub async fn get_library(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LibraryDetailResponse>, AppError> {
    let library = state
        .library_service
        .get(&LibraryId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Library {} not found", id)))?;

    Ok(Json(library.into()))
}

/// POST /libraries
///
/// Create a library. Requires authentication.
pub async fn create_library(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(request): Json<LibraryRequest>,
) -> Result<(StatusCode, Json<LibraryResponse>), AppError> {
    let library = state
        .library_service
        .create(&NewLibrary { name: request.name })
        .await?;
    tracing::info!(library_id = %library.id, user = %user.username, "Library created");
    Ok((StatusCode::CREATED, Json(library.into())))
}

/// DELETE /libraries/:id
///
/// Delete a library. Requires authentication.
pub async fn delete_library(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.library_service.delete(&LibraryId(id)).await?;
    tracing::info!(library_id = %id, user = %user.username, "Library deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /libraries/:id/books
///
/// Shelve an existing book in a library. Requires authentication.
pub async fn add_library_book(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddBookRequest>,
) -> Result<StatusCode, AppError> {
    state
        .library_service
        .add_book(&LibraryId(id), &BookId(request.book))
        .await?;
    tracing::info!(library_id = %id, book_id = %request.book, user = %user.username, "Book shelved");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /libraries/:id/books/:book_id
///
/// Remove a book from a library's shelves. Requires authentication.
pub async fn remove_library_book(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path((id, book_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    state
        .library_service
        .remove_book(&LibraryId(id), &BookId(book_id))
        .await?;
    tracing::info!(library_id = %id, book_id = %book_id, user = %user.username, "Book unshelved");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /libraries/:id/librarian
pub async fn get_librarian(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LibrarianResponse>, AppError> {
    let librarian = state.library_service.librarian(&LibraryId(id)).await?;
    Ok(Json(librarian.into()))
}

/// PUT /libraries/:id/librarian
///
/// Assign or replace a library's librarian. Requires authentication.
pub async fn assign_librarian(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
    Json(request): Json<AssignLibrarianRequest>,
) -> Result<Json<LibrarianResponse>, AppError> {
    let librarian = state
        .library_service
        .assign_librarian(&LibraryId(id), &request.name)
        .await?;
    tracing::info!(library_id = %id, user = %user.username, "Librarian assigned");
    Ok(Json(librarian.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LibrarianId;

    #[test]
    fn parse_add_book_request() {
        let json = r#"{"book": "123e4567-e89b-12d3-a456-426614174000"}"#;
        let request: AddBookRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.book.to_string(),
            "123e4567-e89b-12d3-a456-426614174000"
        );
    }

    #[test]
    fn parse_add_book_request_rejects_bad_uuid() {
        let result: Result<AddBookRequest, _> = serde_json::from_str(r#"{"book": "nope"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serialize_librarian_response() {
        let library_id = LibraryId::new();
        let response = LibrarianResponse::from(Librarian {
            id: LibrarianId::new(),
            name: "Pat".to_string(),
            library_id,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["name"], "Pat");
        assert_eq!(json["library"], library_id.to_string());
    }
}
