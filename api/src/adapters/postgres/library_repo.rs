//! PostgreSQL adapter for LibraryRepository
//!
//! Shelf membership lives in the library_books join table; the
//! librarian assignment is a one-to-one row keyed by library.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::entities::{
    BookId, Librarian, LibrarianId, Library, LibraryId, NewLibrarian, NewLibrary,
};
use crate::domain::ports::LibraryRepository;
use crate::entity::{librarians, libraries, library_books};
use crate::error::DomainError;

/// PostgreSQL implementation of LibraryRepository
pub struct PostgresLibraryRepository {
    db: DatabaseConnection,
}

impl PostgresLibraryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LibraryRepository for PostgresLibraryRepository {
    async fn find_by_id(&self, id: &LibraryId) -> Result<Option<Library>, DomainError> {
        let result = libraries::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Library>, DomainError> {
        let results = libraries::Entity::find()
            .order_by_asc(libraries::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, library: &NewLibrary) -> Result<Library, DomainError> {
        let model = libraries::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(library.name.clone()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn delete(&self, id: &LibraryId) -> Result<(), DomainError> {
        // Shelf entries and the librarian go first so the delete works
        // the same with or without FK cascades in the schema.
        library_books::Entity::delete_many()
            .filter(library_books::Column::LibraryId.eq(id.0))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        librarians::Entity::delete_many()
            .filter(librarians::Column::LibraryId.eq(id.0))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let result = libraries::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(format!("Library {} not found", id)))
        } else {
            Ok(())
        }
    }

    async fn book_ids(&self, id: &LibraryId) -> Result<Vec<BookId>, DomainError> {
        let results = library_books::Entity::find()
            .filter(library_books::Column::LibraryId.eq(id.0))
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| BookId(m.book_id)).collect())
    }

    async fn add_book(&self, id: &LibraryId, book_id: &BookId) -> Result<(), DomainError> {
        let model = library_books::ActiveModel {
            library_id: Set(id.0),
            book_id: Set(book_id.0),
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn remove_book(&self, id: &LibraryId, book_id: &BookId) -> Result<(), DomainError> {
        let result = library_books::Entity::delete_many()
            .filter(library_books::Column::LibraryId.eq(id.0))
            .filter(library_books::Column::BookId.eq(book_id.0))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(format!(
                "Book {} is not shelved in library {}",
                book_id, id
            )))
        } else {
            Ok(())
        }
    }

    async fn has_book(&self, id: &LibraryId, book_id: &BookId) -> Result<bool, DomainError> {
        let result = library_books::Entity::find()
            .filter(library_books::Column::LibraryId.eq(id.0))
            .filter(library_books::Column::BookId.eq(book_id.0))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.is_some())
    }

    async fn find_librarian(&self, id: &LibraryId) -> Result<Option<Librarian>, DomainError> {
        let result = librarians::Entity::find()
            .filter(librarians::Column::LibraryId.eq(id.0))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn set_librarian(&self, librarian: &NewLibrarian) -> Result<Librarian, DomainError> {
        // Replace semantics: at most one librarian per library.
        librarians::Entity::delete_many()
            .filter(librarians::Column::LibraryId.eq(librarian.library_id.0))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let model = librarians::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(librarian.name.clone()),
            library_id: Set(librarian.library_id.0),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }
}

/// Convert SeaORM model to domain entity
impl From<libraries::Model> for Library {
    fn from(model: libraries::Model) -> Self {
        Library {
            id: LibraryId(model.id),
            name: model.name,
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<librarians::Model> for Librarian {
    fn from(model: librarians::Model) -> Self {
        Librarian {
            id: LibrarianId(model.id),
            name: model.name,
            library_id: LibraryId(model.library_id),
        }
    }
}
