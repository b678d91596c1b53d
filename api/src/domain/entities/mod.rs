//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod author;
pub mod book;
pub mod library;
pub mod user;

pub use author::{Author, AuthorId, AuthorWithBooks, NewAuthor};
pub use book::{validate_publication_year, Book, BookId, BookOrdering, BookQuery, NewBook};
pub use library::{
    Librarian, LibrarianId, Library, LibraryId, LibraryWithBooks, NewLibrarian, NewLibrary,
};
pub use user::{NewUser, User, UserId};
