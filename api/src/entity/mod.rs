//! SeaORM entities
//!
//! Table-level models for the relational store. Kept separate from the
//! pure domain entities; adapters convert between the two.

pub mod authors;
pub mod books;
pub mod librarians;
pub mod libraries;
pub mod library_books;
pub mod users;
