//! Library service
//!
//! Libraries shelve an unordered set of existing books and have at
//! most one librarian.

use std::sync::Arc;

use crate::domain::entities::{
    BookId, Librarian, Library, LibraryId, LibraryWithBooks, NewLibrarian, NewLibrary,
};
use crate::domain::ports::{BookRepository, LibraryRepository};
use crate::error::{AppError, DomainError};

/// Service for managing libraries and librarians
pub struct LibraryService<LR, BR>
where
    LR: LibraryRepository,
    BR: BookRepository,
{
    libraries: Arc<LR>,
    books: Arc<BR>,
}

impl<LR, BR> LibraryService<LR, BR>
where
    LR: LibraryRepository,
    BR: BookRepository,
{
    pub fn new(libraries: Arc<LR>, books: Arc<BR>) -> Self {
        Self { libraries, books }
    }

    /// List all libraries
    pub async fn list(&self) -> Result<Vec<Library>, AppError> {
        Ok(self.libraries.find_all().await?)
    }

    /// Find a library with its shelved books
    pub async fn get(&self, id: &LibraryId) -> Result<Option<LibraryWithBooks>, AppError> {
        let Some(library) = self.libraries.find_by_id(id).await? else {
            return Ok(None);
        };

        let ids = self.libraries.book_ids(id).await?;
        let mut books = self.books.find_by_ids(&ids).await?;
        books.sort_by(|a, b| a.title.cmp(&b.title));

        Ok(Some(LibraryWithBooks { library, books }))
    }

    /// Create a new library
    pub async fn create(&self, library: &NewLibrary) -> Result<Library, AppError> {
        check_name(&library.name)?;
        let created = self.libraries.create(library).await?;
        tracing::debug!(library_id = %created.id, name = %created.name, "Library created");
        Ok(created)
    }

    /// Delete a library, its shelf entries and its librarian
    pub async fn delete(&self, id: &LibraryId) -> Result<(), AppError> {
        self.libraries.delete(id).await?;
        tracing::debug!(library_id = %id, "Library deleted");
        Ok(())
    }

    /// Shelve an existing book in a library
    pub async fn add_book(&self, id: &LibraryId, book_id: &BookId) -> Result<(), AppError> {
        self.require_library(id).await?;

        if self.books.find_by_id(book_id).await?.is_none() {
            return Err(AppError::Domain(DomainError::validation(
                "book",
                format!("Book {} does not exist.", book_id),
            )));
        }

        if self.libraries.has_book(id, book_id).await? {
            return Err(AppError::Domain(DomainError::AlreadyExists(format!(
                "Book {} is already shelved in library {}",
                book_id, id
            ))));
        }

        self.libraries.add_book(id, book_id).await?;
        Ok(())
    }

    /// Remove a book from a library's shelves
    pub async fn remove_book(&self, id: &LibraryId, book_id: &BookId) -> Result<(), AppError> {
        self.require_library(id).await?;
        self.libraries.remove_book(id, book_id).await?;
        Ok(())
    }

    /// The librarian assigned to a library
    pub async fn librarian(&self, id: &LibraryId) -> Result<Librarian, AppError> {
        self.require_library(id).await?;

        self.libraries
            .find_librarian(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Library {} has no librarian", id)))
    }

    /// Assign a librarian, replacing any existing assignment
    pub async fn assign_librarian(
        &self,
        id: &LibraryId,
        name: &str,
    ) -> Result<Librarian, AppError> {
        check_name(name)?;
        self.require_library(id).await?;

        let librarian = self
            .libraries
            .set_librarian(&NewLibrarian {
                name: name.to_string(),
                library_id: *id,
            })
            .await?;

        Ok(librarian)
    }

    async fn require_library(&self, id: &LibraryId) -> Result<Library, AppError> {
        self.libraries
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Library {} not found", id)))
    }
}

fn check_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Domain(DomainError::validation(
            "name",
            "Name may not be blank.",
        )));
    }
    Ok(())
}
