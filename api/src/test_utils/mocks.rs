//! Mock implementations of port traits
//!
//! In-memory repositories matching the query semantics of the Postgres
//! adapters, so services can be exercised without a database. The book
//! repository keeps its own author-name map standing in for the SQL
//! join used by the author-name filter and the search term.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Author, AuthorId, Book, BookId, BookOrdering, BookQuery, Librarian, LibrarianId, Library,
    LibraryId, NewAuthor, NewBook, NewLibrarian, NewLibrary, NewUser, User, UserId,
};
use crate::domain::ports::{AuthorRepository, BookRepository, LibraryRepository, UserRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Author Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryAuthorRepository {
    authors: Arc<RwLock<HashMap<AuthorId, Author>>>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an author for testing
    pub fn with_author(self, author: Author) -> Self {
        {
            let mut authors = self.authors.write().unwrap();
            authors.insert(author.id, author);
        }
        self
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, DomainError> {
        let authors = self.authors.read().unwrap();
        Ok(authors.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Author>, DomainError> {
        let authors = self.authors.read().unwrap();
        let mut all: Vec<Author> = authors.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn create(&self, author: &NewAuthor) -> Result<Author, DomainError> {
        let created = Author {
            id: AuthorId::new(),
            name: author.name.clone(),
        };
        let mut authors = self.authors.write().unwrap();
        authors.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: &AuthorId, author: &NewAuthor) -> Result<Author, DomainError> {
        let mut authors = self.authors.write().unwrap();
        let existing = authors
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Author {} not found", id)))?;
        existing.name = author.name.clone();
        Ok(existing.clone())
    }

    async fn delete(&self, id: &AuthorId) -> Result<(), DomainError> {
        let mut authors = self.authors.write().unwrap();
        authors
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("Author {} not found", id)))
    }
}

// ============================================================================
// In-Memory Book Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryBookRepository {
    books: Arc<RwLock<HashMap<BookId, Book>>>,
    // Stand-in for the join against authors
    author_names: Arc<RwLock<HashMap<AuthorId, String>>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a book for testing
    pub fn with_book(self, book: Book) -> Self {
        {
            let mut books = self.books.write().unwrap();
            books.insert(book.id, book);
        }
        self
    }

    /// Register an author name so joins against authors resolve
    pub fn with_author(self, author: &Author) -> Self {
        {
            let mut names = self.author_names.write().unwrap();
            names.insert(author.id, author.name.clone());
        }
        self
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, DomainError> {
        let books = self.books.read().unwrap();
        Ok(books.get(id).cloned())
    }

    async fn find_by_ids(&self, ids: &[BookId]) -> Result<Vec<Book>, DomainError> {
        let books = self.books.read().unwrap();
        Ok(ids.iter().filter_map(|id| books.get(id).cloned()).collect())
    }

    async fn search(&self, query: &BookQuery) -> Result<Vec<Book>, DomainError> {
        let books = self.books.read().unwrap();
        let names = self.author_names.read().unwrap();

        let mut matched: Vec<Book> = books
            .values()
            .filter(|book| {
                if let Some(title) = &query.title {
                    if &book.title != title {
                        return false;
                    }
                }
                if let Some(year) = query.publication_year {
                    if book.publication_year != year {
                        return false;
                    }
                }
                if let Some(author) = &query.author {
                    if &book.author_id != author {
                        return false;
                    }
                }
                if let Some(author_name) = &query.author_name {
                    // Inner-join semantics: a missing author never matches
                    match names.get(&book.author_id) {
                        Some(name) if name == author_name => {}
                        _ => return false,
                    }
                }
                if let Some(term) = &query.search {
                    let term = term.to_lowercase();
                    let title_hit = book.title.to_lowercase().contains(&term);
                    let author_hit = names
                        .get(&book.author_id)
                        .map(|name| name.to_lowercase().contains(&term))
                        .unwrap_or(false);
                    if !title_hit && !author_hit {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();

        match query.ordering {
            BookOrdering::Title => matched.sort_by(|a, b| a.title.cmp(&b.title)),
            BookOrdering::TitleDesc => matched.sort_by(|a, b| b.title.cmp(&a.title)),
            BookOrdering::PublicationYear => {
                matched.sort_by_key(|b| b.publication_year);
            }
            BookOrdering::PublicationYearDesc => {
                matched.sort_by_key(|b| std::cmp::Reverse(b.publication_year));
            }
            BookOrdering::Id => matched.sort_by_key(|b| b.id),
            BookOrdering::IdDesc => matched.sort_by_key(|b| std::cmp::Reverse(b.id)),
        }

        Ok(matched)
    }

    async fn find_by_author(&self, author_id: &AuthorId) -> Result<Vec<Book>, DomainError> {
        let books = self.books.read().unwrap();
        let mut owned: Vec<Book> = books
            .values()
            .filter(|b| &b.author_id == author_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(owned)
    }

    async fn find_by_authors(&self, author_ids: &[AuthorId]) -> Result<Vec<Book>, DomainError> {
        let wanted: HashSet<&AuthorId> = author_ids.iter().collect();
        let books = self.books.read().unwrap();
        let mut owned: Vec<Book> = books
            .values()
            .filter(|b| wanted.contains(&b.author_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(owned)
    }

    async fn create(&self, book: &NewBook) -> Result<Book, DomainError> {
        let created = Book {
            id: BookId::new(),
            title: book.title.clone(),
            publication_year: book.publication_year,
            author_id: book.author_id,
        };
        let mut books = self.books.write().unwrap();
        books.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: &BookId, book: &NewBook) -> Result<Book, DomainError> {
        let mut books = self.books.write().unwrap();
        let existing = books
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Book {} not found", id)))?;
        existing.title = book.title.clone();
        existing.publication_year = book.publication_year;
        existing.author_id = book.author_id;
        Ok(existing.clone())
    }

    async fn delete(&self, id: &BookId) -> Result<(), DomainError> {
        let mut books = self.books.write().unwrap();
        books
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("Book {} not found", id)))
    }

    async fn delete_by_author(&self, author_id: &AuthorId) -> Result<u64, DomainError> {
        let mut books = self.books.write().unwrap();
        let before = books.len();
        books.retain(|_, b| &b.author_id != author_id);
        Ok((before - books.len()) as u64)
    }
}

// ============================================================================
// In-Memory Library Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryLibraryRepository {
    libraries: Arc<RwLock<HashMap<LibraryId, Library>>>,
    shelves: Arc<RwLock<HashMap<LibraryId, Vec<BookId>>>>,
    librarians: Arc<RwLock<HashMap<LibraryId, Librarian>>>,
}

impl InMemoryLibraryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a library for testing
    pub fn with_library(self, library: Library) -> Self {
        {
            let mut libraries = self.libraries.write().unwrap();
            libraries.insert(library.id, library);
        }
        self
    }

    /// Pre-populate with a librarian assignment for testing
    pub fn with_librarian(self, librarian: Librarian) -> Self {
        {
            let mut librarians = self.librarians.write().unwrap();
            librarians.insert(librarian.library_id, librarian);
        }
        self
    }
}

#[async_trait]
impl LibraryRepository for InMemoryLibraryRepository {
    async fn find_by_id(&self, id: &LibraryId) -> Result<Option<Library>, DomainError> {
        let libraries = self.libraries.read().unwrap();
        Ok(libraries.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Library>, DomainError> {
        let libraries = self.libraries.read().unwrap();
        let mut all: Vec<Library> = libraries.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn create(&self, library: &NewLibrary) -> Result<Library, DomainError> {
        let created = Library {
            id: LibraryId::new(),
            name: library.name.clone(),
        };
        let mut libraries = self.libraries.write().unwrap();
        libraries.insert(created.id, created.clone());
        Ok(created)
    }

    async fn delete(&self, id: &LibraryId) -> Result<(), DomainError> {
        let mut libraries = self.libraries.write().unwrap();
        libraries
            .remove(id)
            .ok_or_else(|| DomainError::NotFound(format!("Library {} not found", id)))?;
        self.shelves.write().unwrap().remove(id);
        self.librarians.write().unwrap().remove(id);
        Ok(())
    }

    async fn book_ids(&self, id: &LibraryId) -> Result<Vec<BookId>, DomainError> {
        let shelves = self.shelves.read().unwrap();
        Ok(shelves.get(id).cloned().unwrap_or_default())
    }

    async fn add_book(&self, id: &LibraryId, book_id: &BookId) -> Result<(), DomainError> {
        let mut shelves = self.shelves.write().unwrap();
        shelves.entry(*id).or_default().push(*book_id);
        Ok(())
    }

    async fn remove_book(&self, id: &LibraryId, book_id: &BookId) -> Result<(), DomainError> {
        let mut shelves = self.shelves.write().unwrap();
        let shelf = shelves.entry(*id).or_default();
        let before = shelf.len();
        shelf.retain(|b| b != book_id);
        if shelf.len() == before {
            Err(DomainError::NotFound(format!(
                "Book {} is not shelved in library {}",
                book_id, id
            )))
        } else {
            Ok(())
        }
    }

    async fn has_book(&self, id: &LibraryId, book_id: &BookId) -> Result<bool, DomainError> {
        let shelves = self.shelves.read().unwrap();
        Ok(shelves
            .get(id)
            .map(|shelf| shelf.contains(book_id))
            .unwrap_or(false))
    }

    async fn find_librarian(&self, id: &LibraryId) -> Result<Option<Librarian>, DomainError> {
        let librarians = self.librarians.read().unwrap();
        Ok(librarians.get(id).cloned())
    }

    async fn set_librarian(&self, librarian: &NewLibrarian) -> Result<Librarian, DomainError> {
        let created = Librarian {
            id: LibrarianId::new(),
            name: librarian.name.clone(),
            library_id: librarian.library_id,
        };
        let mut librarians = self.librarians.write().unwrap();
        librarians.insert(created.library_id, created.clone());
        Ok(created)
    }
}

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    by_api_key: Arc<RwLock<HashMap<String, UserId>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a user for testing
    pub fn with_user(self, user: User) -> Self {
        {
            let mut users = self.users.write().unwrap();
            let mut by_api_key = self.by_api_key.write().unwrap();
            by_api_key.insert(user.api_key_hash.clone(), user.id);
            users.insert(user.id, user);
        }
        self
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users.get(id).cloned())
    }

    async fn find_by_api_key_hash(&self, hash: &str) -> Result<Option<User>, DomainError> {
        let by_api_key = self.by_api_key.read().unwrap();
        let users = self.users.read().unwrap();

        if let Some(id) = by_api_key.get(hash) {
            Ok(users.get(id).cloned())
        } else {
            Ok(None)
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let created = User {
            id: UserId::new(),
            username: user.username.clone(),
            api_key_hash: user.api_key_hash.clone(),
            created_at: Utc::now(),
            last_seen_at: None,
        };
        let mut users = self.users.write().unwrap();
        let mut by_api_key = self.by_api_key.write().unwrap();
        by_api_key.insert(created.api_key_hash.clone(), created.id);
        users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_last_seen(&self, id: &UserId) -> Result<(), DomainError> {
        let mut users = self.users.write().unwrap();
        let user = users
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("User {} not found", id)))?;
        user.last_seen_at = Some(Utc::now());
        Ok(())
    }
}
