//! Author service
//!
//! Author CRUD with nested book serialization. Author reads return the
//! owned books grouped in memory after one book query; deletes cascade
//! to the owned books.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Author, AuthorId, AuthorWithBooks, Book, NewAuthor};
use crate::domain::ports::{AuthorRepository, BookRepository};
use crate::error::{AppError, DomainError};

/// Service for managing authors
pub struct AuthorService<AR, BR>
where
    AR: AuthorRepository,
    BR: BookRepository,
{
    authors: Arc<AR>,
    books: Arc<BR>,
}

impl<AR, BR> AuthorService<AR, BR>
where
    AR: AuthorRepository,
    BR: BookRepository,
{
    pub fn new(authors: Arc<AR>, books: Arc<BR>) -> Self {
        Self { authors, books }
    }

    /// List all authors with their books nested
    pub async fn list(&self) -> Result<Vec<AuthorWithBooks>, AppError> {
        let authors = self.authors.find_all().await?;
        let ids: Vec<AuthorId> = authors.iter().map(|a| a.id).collect();

        // One grouped query instead of a book lookup per author
        let mut grouped: HashMap<AuthorId, Vec<Book>> = HashMap::new();
        for book in self.books.find_by_authors(&ids).await? {
            grouped.entry(book.author_id).or_default().push(book);
        }

        Ok(authors
            .into_iter()
            .map(|author| {
                let books = grouped.remove(&author.id).unwrap_or_default();
                AuthorWithBooks { author, books }
            })
            .collect())
    }

    /// Find a single author with nested books
    pub async fn get(&self, id: &AuthorId) -> Result<Option<AuthorWithBooks>, AppError> {
        let Some(author) = self.authors.find_by_id(id).await? else {
            return Ok(None);
        };

        let books = self.books.find_by_author(id).await?;
        Ok(Some(AuthorWithBooks { author, books }))
    }

    /// Create a new author
    pub async fn create(&self, author: &NewAuthor) -> Result<Author, AppError> {
        check_name(&author.name)?;
        let created = self.authors.create(author).await?;
        tracing::debug!(author_id = %created.id, name = %created.name, "Author created");
        Ok(created)
    }

    /// Replace an existing author's fields
    pub async fn update(&self, id: &AuthorId, author: &NewAuthor) -> Result<Author, AppError> {
        check_name(&author.name)?;
        Ok(self.authors.update(id, author).await?)
    }

    /// Delete an author and every book it owns
    pub async fn delete(&self, id: &AuthorId) -> Result<(), AppError> {
        if self.authors.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Author {} not found", id)));
        }

        let removed = self.books.delete_by_author(id).await?;
        self.authors.delete(id).await?;
        tracing::debug!(author_id = %id, cascaded_books = removed, "Author deleted");
        Ok(())
    }
}

fn check_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Domain(DomainError::validation(
            "name",
            "Name may not be blank.",
        )));
    }
    if name.len() > 255 {
        return Err(AppError::Domain(DomainError::validation(
            "name",
            "Name must be at most 255 characters.",
        )));
    }
    Ok(())
}
