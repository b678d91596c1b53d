//! Account service
//!
//! Handles user registration and API key authentication. Reads are
//! public; the bearer key minted here is what unlocks writes.

use std::sync::Arc;

use rand::Rng;
use sha2::{Digest, Sha256};

use crate::domain::entities::{NewUser, User, UserId};
use crate::domain::ports::UserRepository;
use crate::error::{AppError, DomainError};

/// Service for managing API users
pub struct AccountService<UR>
where
    UR: UserRepository,
{
    users: Arc<UR>,
}

impl<UR> AccountService<UR>
where
    UR: UserRepository,
{
    pub fn new(users: Arc<UR>) -> Self {
        Self { users }
    }

    /// Register a new user
    ///
    /// Returns (user, api_key) - the key is only shown once; the store
    /// keeps its hash.
    pub async fn register(&self, username: &str) -> Result<(User, String), AppError> {
        if username.is_empty() || username.len() > 50 {
            return Err(AppError::BadRequest(
                "Username must be between 1 and 50 characters".to_string(),
            ));
        }

        if self.users.find_by_username(username).await?.is_some() {
            return Err(AppError::Domain(DomainError::AlreadyExists(format!(
                "User with username '{}' already exists",
                username
            ))));
        }

        let api_key = generate_api_key();
        let api_key_hash = hash_api_key(&api_key);

        let user = self
            .users
            .create(&NewUser {
                username: username.to_string(),
                api_key_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");
        Ok((user, api_key))
    }

    /// Find a user by their API key hash
    pub async fn find_by_api_key(&self, api_key_hash: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.find_by_api_key_hash(api_key_hash).await?)
    }

    /// Update the user's last seen timestamp
    pub async fn touch(&self, id: &UserId) -> Result<(), AppError> {
        self.users.update_last_seen(id).await?;
        Ok(())
    }
}

/// Generate a random API key
fn generate_api_key() -> String {
    let mut rng = rand::thread_rng();
    let bytes: Vec<u8> = (0..32).map(|_| rng.gen()).collect();
    format!("sk-{}", hex::encode(bytes))
}

/// Hash an API key for storage
pub fn hash_api_key(api_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    hex::encode(hasher.finalize())
}
