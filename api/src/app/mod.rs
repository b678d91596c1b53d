//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and repository ports.

pub mod account_service;
pub mod author_service;
pub mod book_service;
pub mod library_service;

pub use account_service::{hash_api_key, AccountService};
pub use author_service::AuthorService;
pub use book_service::BookService;
pub use library_service::LibraryService;
