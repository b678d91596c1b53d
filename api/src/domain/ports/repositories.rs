//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    Author, AuthorId, Book, BookId, BookQuery, Librarian, Library, LibraryId, NewAuthor, NewBook,
    NewLibrarian, NewLibrary, NewUser, User, UserId,
};
use crate::error::DomainError;

/// Repository for Author entities
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Find an author by ID
    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, DomainError>;

    /// List all authors, ordered by name
    async fn find_all(&self) -> Result<Vec<Author>, DomainError>;

    /// Create a new author
    async fn create(&self, author: &NewAuthor) -> Result<Author, DomainError>;

    /// Replace an author's fields
    async fn update(&self, id: &AuthorId, author: &NewAuthor) -> Result<Author, DomainError>;

    /// Delete an author
    ///
    /// Owned books are removed by the caller (the service drives the
    /// cascade so in-memory and SQL implementations agree).
    async fn delete(&self, id: &AuthorId) -> Result<(), DomainError>;
}

/// Repository for Book entities
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find a book by ID
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, DomainError>;

    /// Find books by a set of IDs (order unspecified)
    async fn find_by_ids(&self, ids: &[BookId]) -> Result<Vec<Book>, DomainError>;

    /// Run the collection query: exact filters, then search, then ordering
    ///
    /// Search and the author-name filter reach through the owning
    /// author, so implementations join against authors.
    async fn search(&self, query: &BookQuery) -> Result<Vec<Book>, DomainError>;

    /// Find all books owned by an author
    async fn find_by_author(&self, author_id: &AuthorId) -> Result<Vec<Book>, DomainError>;

    /// Find all books owned by any of the given authors
    async fn find_by_authors(&self, author_ids: &[AuthorId]) -> Result<Vec<Book>, DomainError>;

    /// Create a new book
    async fn create(&self, book: &NewBook) -> Result<Book, DomainError>;

    /// Replace a book's fields
    async fn update(&self, id: &BookId, book: &NewBook) -> Result<Book, DomainError>;

    /// Delete a book
    async fn delete(&self, id: &BookId) -> Result<(), DomainError>;

    /// Delete every book owned by an author, returning the count removed
    async fn delete_by_author(&self, author_id: &AuthorId) -> Result<u64, DomainError>;
}

/// Repository for Library and Librarian entities
#[async_trait]
pub trait LibraryRepository: Send + Sync {
    /// Find a library by ID
    async fn find_by_id(&self, id: &LibraryId) -> Result<Option<Library>, DomainError>;

    /// List all libraries, ordered by name
    async fn find_all(&self) -> Result<Vec<Library>, DomainError>;

    /// Create a new library
    async fn create(&self, library: &NewLibrary) -> Result<Library, DomainError>;

    /// Delete a library along with its shelf entries and librarian
    async fn delete(&self, id: &LibraryId) -> Result<(), DomainError>;

    /// IDs of the books shelved in a library
    async fn book_ids(&self, id: &LibraryId) -> Result<Vec<BookId>, DomainError>;

    /// Shelve a book in a library
    async fn add_book(&self, id: &LibraryId, book_id: &BookId) -> Result<(), DomainError>;

    /// Remove a book from a library's shelves
    async fn remove_book(&self, id: &LibraryId, book_id: &BookId) -> Result<(), DomainError>;

    /// Check whether a book is shelved in a library
    async fn has_book(&self, id: &LibraryId, book_id: &BookId) -> Result<bool, DomainError>;

    /// The librarian assigned to a library, if any
    async fn find_librarian(&self, id: &LibraryId) -> Result<Option<Librarian>, DomainError>;

    /// Assign a librarian, replacing any existing assignment
    async fn set_librarian(&self, librarian: &NewLibrarian) -> Result<Librarian, DomainError>;
}

/// Repository for User entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Find a user by API key hash
    async fn find_by_api_key_hash(&self, hash: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;

    /// Update the last seen timestamp
    async fn update_last_seen(&self, id: &UserId) -> Result<(), DomainError>;
}
