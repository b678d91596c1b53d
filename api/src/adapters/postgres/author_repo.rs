//! PostgreSQL adapter for AuthorRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::entities::{Author, AuthorId, NewAuthor};
use crate::domain::ports::AuthorRepository;
use crate::entity::authors;
use crate::error::DomainError;

/// PostgreSQL implementation of AuthorRepository
pub struct PostgresAuthorRepository {
    db: DatabaseConnection,
}

impl PostgresAuthorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, DomainError> {
        let result = authors::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Author>, DomainError> {
        let results = authors::Entity::find()
            .order_by_asc(authors::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, author: &NewAuthor) -> Result<Author, DomainError> {
        let model = authors::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(author.name.clone()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(&self, id: &AuthorId, author: &NewAuthor) -> Result<Author, DomainError> {
        let existing = authors::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .ok_or_else(|| DomainError::NotFound(format!("Author {} not found", id)))?;

        let mut active_model = existing.into_active_model();
        active_model.name = Set(author.name.clone());

        let result = active_model
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn delete(&self, id: &AuthorId) -> Result<(), DomainError> {
        let result = authors::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(format!("Author {} not found", id)))
        } else {
            Ok(())
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<authors::Model> for Author {
    fn from(model: authors::Model) -> Self {
        Author {
            id: AuthorId(model.id),
            name: model.name,
        }
    }
}
