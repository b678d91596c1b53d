//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod accounts;
pub mod authors;
pub mod books;
pub mod libraries;

pub use accounts::register;
pub use authors::{create_author, delete_author, get_author, list_authors, update_author};
pub use books::{create_book, delete_book, get_book, list_books, update_book};
pub use libraries::{
    add_library_book, assign_librarian, create_library, delete_library, get_librarian,
    get_library, list_libraries, remove_library_book,
};
