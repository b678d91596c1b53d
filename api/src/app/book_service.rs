//! Book service
//!
//! CRUD over the book collection plus the filter/search/ordering query.
//! Writes validate the publication year and the author reference before
//! touching the store.

use std::sync::Arc;

use crate::domain::entities::{validate_publication_year, Book, BookId, BookQuery, NewBook};
use crate::domain::ports::{AuthorRepository, BookRepository};
use crate::error::{AppError, DomainError};

/// Service for managing books
pub struct BookService<BR, AR>
where
    BR: BookRepository,
    AR: AuthorRepository,
{
    books: Arc<BR>,
    authors: Arc<AR>,
}

impl<BR, AR> BookService<BR, AR>
where
    BR: BookRepository,
    AR: AuthorRepository,
{
    pub fn new(books: Arc<BR>, authors: Arc<AR>) -> Self {
        Self { books, authors }
    }

    /// List books matching the collection query
    pub async fn list(&self, query: &BookQuery) -> Result<Vec<Book>, AppError> {
        Ok(self.books.search(query).await?)
    }

    /// Find a single book by ID
    pub async fn get(&self, id: &BookId) -> Result<Option<Book>, AppError> {
        Ok(self.books.find_by_id(id).await?)
    }

    /// Create a new book
    pub async fn create(&self, book: &NewBook) -> Result<Book, AppError> {
        self.check_candidate(book).await?;
        let created = self.books.create(book).await?;
        tracing::debug!(book_id = %created.id, title = %created.title, "Book created");
        Ok(created)
    }

    /// Replace an existing book's fields
    ///
    /// An unknown target is a 404 regardless of the payload; validation
    /// only runs against a resolved book.
    pub async fn update(&self, id: &BookId, book: &NewBook) -> Result<Book, AppError> {
        if self.books.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }

        self.check_candidate(book).await?;
        Ok(self.books.update(id, book).await?)
    }

    /// Delete a book
    pub async fn delete(&self, id: &BookId) -> Result<(), AppError> {
        self.books.delete(id).await?;
        tracing::debug!(book_id = %id, "Book deleted");
        Ok(())
    }

    /// Shared create/update checks: publication year and author reference
    async fn check_candidate(&self, book: &NewBook) -> Result<(), AppError> {
        validate_publication_year(book.publication_year)?;

        if book.title.trim().is_empty() {
            return Err(AppError::Domain(DomainError::validation(
                "title",
                "Title may not be blank.",
            )));
        }

        if self.authors.find_by_id(&book.author_id).await?.is_none() {
            return Err(AppError::Domain(DomainError::validation(
                "author",
                format!("Author {} does not exist.", book.author_id),
            )));
        }

        Ok(())
    }
}
