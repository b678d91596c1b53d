//! PostgreSQL adapter for BookRepository
//!
//! The collection query joins against authors when the author-name
//! filter or the search term needs it; everything else stays on the
//! books table.

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, IntoActiveModel,
    JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};
use uuid::Uuid;

use crate::domain::entities::{AuthorId, Book, BookId, BookOrdering, BookQuery, NewBook};
use crate::domain::ports::BookRepository;
use crate::entity::{authors, books};
use crate::error::DomainError;

/// PostgreSQL implementation of BookRepository
pub struct PostgresBookRepository {
    db: DatabaseConnection,
}

impl PostgresBookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Escape LIKE wildcards in a user-supplied search term
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, DomainError> {
        let result = books::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_ids(&self, ids: &[BookId]) -> Result<Vec<Book>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw: Vec<Uuid> = ids.iter().map(|id| id.0).collect();
        let results = books::Entity::find()
            .filter(books::Column::Id.is_in(raw))
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn search(&self, query: &BookQuery) -> Result<Vec<Book>, DomainError> {
        let mut select = books::Entity::find();

        if let Some(title) = &query.title {
            select = select.filter(books::Column::Title.eq(title.clone()));
        }
        if let Some(year) = query.publication_year {
            select = select.filter(books::Column::PublicationYear.eq(year));
        }
        if let Some(author) = &query.author {
            select = select.filter(books::Column::AuthorId.eq(author.0));
        }

        // Author-name filter and search look through the owning author.
        if query.author_name.is_some() || query.search.is_some() {
            select = select.join(JoinType::InnerJoin, books::Relation::Authors.def());
        }
        if let Some(name) = &query.author_name {
            select = select.filter(authors::Column::Name.eq(name.clone()));
        }
        if let Some(term) = &query.search {
            let pattern = format!("%{}%", escape_like(term));
            select = select.filter(
                Condition::any()
                    .add(Expr::col((books::Entity, books::Column::Title)).ilike(pattern.clone()))
                    .add(Expr::col((authors::Entity, authors::Column::Name)).ilike(pattern)),
            );
        }

        select = match query.ordering {
            BookOrdering::Title => select.order_by_asc(books::Column::Title),
            BookOrdering::TitleDesc => select.order_by_desc(books::Column::Title),
            BookOrdering::PublicationYear => select.order_by_asc(books::Column::PublicationYear),
            BookOrdering::PublicationYearDesc => {
                select.order_by_desc(books::Column::PublicationYear)
            }
            BookOrdering::Id => select.order_by_asc(books::Column::Id),
            BookOrdering::IdDesc => select.order_by_desc(books::Column::Id),
        };

        let results = select
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_author(&self, author_id: &AuthorId) -> Result<Vec<Book>, DomainError> {
        let results = books::Entity::find()
            .filter(books::Column::AuthorId.eq(author_id.0))
            .order_by_asc(books::Column::Title)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_authors(&self, author_ids: &[AuthorId]) -> Result<Vec<Book>, DomainError> {
        if author_ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw: Vec<Uuid> = author_ids.iter().map(|id| id.0).collect();
        let results = books::Entity::find()
            .filter(books::Column::AuthorId.is_in(raw))
            .order_by_asc(books::Column::Title)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, book: &NewBook) -> Result<Book, DomainError> {
        let model = books::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(book.title.clone()),
            publication_year: Set(book.publication_year),
            author_id: Set(book.author_id.0),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(&self, id: &BookId, book: &NewBook) -> Result<Book, DomainError> {
        let existing = books::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .ok_or_else(|| DomainError::NotFound(format!("Book {} not found", id)))?;

        let mut active_model = existing.into_active_model();
        active_model.title = Set(book.title.clone());
        active_model.publication_year = Set(book.publication_year);
        active_model.author_id = Set(book.author_id.0);

        let result = active_model
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn delete(&self, id: &BookId) -> Result<(), DomainError> {
        let result = books::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(format!("Book {} not found", id)))
        } else {
            Ok(())
        }
    }

    async fn delete_by_author(&self, author_id: &AuthorId) -> Result<u64, DomainError> {
        let result = books::Entity::delete_many()
            .filter(books::Column::AuthorId.eq(author_id.0))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected)
    }
}

/// Convert SeaORM model to domain entity
impl From<books::Model> for Book {
    fn from(model: books::Model) -> Self {
        Book {
            id: BookId(model.id),
            title: model.title,
            publication_year: model.publication_year,
            author_id: AuthorId(model.author_id),
        }
    }
}
