//! Book domain entity
//!
//! A book belongs to exactly one author. Listing supports exact-match
//! filters, a substring search and an ordering key, mirroring the
//! public query parameters of the books collection.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::author::AuthorId;
use crate::error::DomainError;

/// Unique identifier for a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookId(pub Uuid);

impl BookId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for BookId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A book in the catalog
#[derive(Debug, Clone, Serialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub publication_year: i32,
    pub author_id: AuthorId,
}

/// Data needed to create or replace a book
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub publication_year: i32,
    pub author_id: AuthorId,
}

/// Ordering key for the book collection
///
/// A leading `-` on the wire selects the descending variant. Ascending
/// title is the default when no ordering is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookOrdering {
    #[default]
    Title,
    TitleDesc,
    PublicationYear,
    PublicationYearDesc,
    Id,
    IdDesc,
}

impl std::fmt::Display for BookOrdering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookOrdering::Title => write!(f, "title"),
            BookOrdering::TitleDesc => write!(f, "-title"),
            BookOrdering::PublicationYear => write!(f, "publication_year"),
            BookOrdering::PublicationYearDesc => write!(f, "-publication_year"),
            BookOrdering::Id => write!(f, "id"),
            BookOrdering::IdDesc => write!(f, "-id"),
        }
    }
}

impl std::str::FromStr for BookOrdering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(BookOrdering::Title),
            "-title" => Ok(BookOrdering::TitleDesc),
            "publication_year" => Ok(BookOrdering::PublicationYear),
            "-publication_year" => Ok(BookOrdering::PublicationYearDesc),
            "id" => Ok(BookOrdering::Id),
            "-id" => Ok(BookOrdering::IdDesc),
            _ => Err(format!("Unknown ordering field: {}", s)),
        }
    }
}

/// Query over the book collection
///
/// Exact filters narrow first, then the search term narrows, then the
/// ordering sorts whatever remains.
#[derive(Debug, Clone, Default)]
pub struct BookQuery {
    /// Exact match on title
    pub title: Option<String>,
    /// Exact match on publication year
    pub publication_year: Option<i32>,
    /// Exact match on owning author id
    pub author: Option<AuthorId>,
    /// Exact match on the owning author's name
    pub author_name: Option<String>,
    /// Case-insensitive substring over title and author name
    pub search: Option<String>,
    pub ordering: BookOrdering,
}

impl BookQuery {
    /// True when no filter or search term is set
    pub fn is_unfiltered(&self) -> bool {
        self.title.is_none()
            && self.publication_year.is_none()
            && self.author.is_none()
            && self.author_name.is_none()
            && self.search.is_none()
    }
}

/// Validate a publication year against the current calendar year
///
/// Years up to and including the current year pass through unchanged;
/// a future year is a field-scoped validation error. Enforced on the
/// create/update request path only.
pub fn validate_publication_year(year: i32) -> Result<i32, DomainError> {
    validate_publication_year_at(year, Local::now().year())
}

/// Pure form of the publication-year check, for a fixed current year
pub fn validate_publication_year_at(year: i32, current_year: i32) -> Result<i32, DomainError> {
    if year > current_year {
        return Err(DomainError::Validation {
            field: "publication_year".to_string(),
            message: "Publication year cannot be in the future.".to_string(),
        });
    }
    Ok(year)
}
