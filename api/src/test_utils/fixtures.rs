//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;

use crate::domain::entities::{
    Author, AuthorId, Book, BookId, Librarian, LibrarianId, Library, LibraryId, User, UserId,
};

/// Create a test author with the given name
pub fn test_author(name: &str) -> Author {
    Author {
        id: AuthorId::new(),
        name: name.to_string(),
    }
}

/// Create a test book owned by the given author
pub fn test_book(title: &str, publication_year: i32, author_id: AuthorId) -> Book {
    Book {
        id: BookId::new(),
        title: title.to_string(),
        publication_year,
        author_id,
    }
}

/// Create a test library with the given name
pub fn test_library(name: &str) -> Library {
    Library {
        id: LibraryId::new(),
        name: name.to_string(),
    }
}

/// Create a test librarian assigned to the given library
pub fn test_librarian(name: &str, library_id: LibraryId) -> Librarian {
    Librarian {
        id: LibrarianId::new(),
        name: name.to_string(),
        library_id,
    }
}

/// Create a test user with a hash derived from the username
pub fn test_user(username: &str) -> User {
    User {
        id: UserId::new(),
        username: username.to_string(),
        api_key_hash: format!("hash-{}", username),
        created_at: Utc::now(),
        last_seen_at: None,
    }
}
