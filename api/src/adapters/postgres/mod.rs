//! PostgreSQL adapters
//!
//! SeaORM-backed implementations of the repository ports.

pub mod author_repo;
pub mod book_repo;
pub mod library_repo;
pub mod user_repo;

pub use author_repo::PostgresAuthorRepository;
pub use book_repo::PostgresBookRepository;
pub use library_repo::PostgresLibraryRepository;
pub use user_repo::PostgresUserRepository;
