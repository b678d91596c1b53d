//! Library and librarian domain entities
//!
//! A library holds a many-to-many collection of books and has at most
//! one librarian (one-to-one).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::book::Book;

/// Unique identifier for a library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LibraryId(pub Uuid);

impl LibraryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LibraryId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for LibraryId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for LibraryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A library branch
#[derive(Debug, Clone, Serialize)]
pub struct Library {
    pub id: LibraryId,
    pub name: String,
}

/// Data needed to create a library
#[derive(Debug, Clone)]
pub struct NewLibrary {
    pub name: String,
}

/// A library together with the books on its shelves
#[derive(Debug, Clone)]
pub struct LibraryWithBooks {
    pub library: Library,
    pub books: Vec<Book>,
}

/// Unique identifier for a librarian
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LibrarianId(pub Uuid);

impl LibrarianId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LibrarianId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LibrarianId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The librarian assigned to a library
#[derive(Debug, Clone, Serialize)]
pub struct Librarian {
    pub id: LibrarianId,
    pub name: String,
    pub library_id: LibraryId,
}

/// Data needed to assign a librarian to a library
#[derive(Debug, Clone)]
pub struct NewLibrarian {
    pub name: String,
    pub library_id: LibraryId,
}
