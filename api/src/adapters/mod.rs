//! Adapters
//!
//! Implementations of the domain ports backed by external systems.

pub mod postgres;

pub use postgres::{
    PostgresAuthorRepository, PostgresBookRepository, PostgresLibraryRepository,
    PostgresUserRepository,
};
