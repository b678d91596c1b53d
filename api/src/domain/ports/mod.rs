//! Port traits
//!
//! Interfaces the application layer depends on. Implementations live
//! in the adapters module (PostgreSQL) and in test_utils (in-memory).

pub mod repositories;

pub use repositories::{AuthorRepository, BookRepository, LibraryRepository, UserRepository};
