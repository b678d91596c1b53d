//! Author domain entity
//!
//! An author owns a collection of books (one-to-many). Deleting an
//! author removes the books it owns.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::book::Book;

/// Unique identifier for an author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorId(pub Uuid);

impl AuthorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AuthorId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AuthorId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An author in the catalog
#[derive(Debug, Clone, Serialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
}

/// Data needed to create or replace an author
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: String,
}

/// An author together with the books it owns
///
/// Built by the service layer from one author query and one grouped
/// book query; the nested list is read-only in the API representation.
#[derive(Debug, Clone)]
pub struct AuthorWithBooks {
    pub author: Author,
    pub books: Vec<Book>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_id_display() {
        let id = AuthorId(Uuid::nil());
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn author_id_from_uuid() {
        let raw = Uuid::new_v4();
        assert_eq!(AuthorId::from(raw).0, raw);
    }
}
