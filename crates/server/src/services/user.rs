use sqlx::SqlitePool;
use thiserror::Error;

use crate::models::{CreateUser, UpdateUser, User};
use crate::repositories::{ReviewRepository, UserRepository};

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("User not found")]
    NotFound,
    #[error("Username already taken")]
    UsernameTaken,
}

/// Service for managing user accounts
pub struct UserService {
    db: SqlitePool,
}

impl UserService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Register a new user
    pub async fn create(&self, data: CreateUser) -> Result<User, UserError> {
        UserRepository::create(&self.db, data)
            .await
            .map_err(map_unique_violation)
    }

    /// Get all users
    pub async fn get_all(&self) -> Result<Vec<User>, UserError> {
        Ok(UserRepository::get_all(&self.db).await?)
    }

    /// Get a user by ID
    pub async fn get_by_id(&self, id: i64) -> Result<User, UserError> {
        UserRepository::get_by_id(&self.db, id)
            .await?
            .ok_or(UserError::NotFound)
    }

    /// Update a user
    pub async fn update(&self, id: i64, data: UpdateUser) -> Result<User, UserError> {
        UserRepository::update(&self.db, id, data)
            .await
            .map_err(map_unique_violation)?
            .ok_or(UserError::NotFound)
    }

    /// Delete a user and all reviews they wrote
    pub async fn delete(&self, id: i64) -> Result<(), UserError> {
        ReviewRepository::delete_by_user_id(&self.db, id).await?;
        if UserRepository::delete(&self.db, id).await? {
            Ok(())
        } else {
            Err(UserError::NotFound)
        }
    }
}

fn map_unique_violation(e: sqlx::Error) -> UserError {
    if e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
    {
        UserError::UsernameTaken
    } else {
        UserError::Database(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_service() -> UserService {
        // A single connection keeps every query on the same in-memory db
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        db::run_migrations(&pool).await.unwrap();
        UserService::new(pool)
    }

    fn create_user(username: &str) -> CreateUser {
        CreateUser {
            username: username.to_string(),
            email: format!("{}@example.com", username),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let service = test_service().await;
        let user = service.create(create_user("alice")).await.unwrap();
        assert_eq!(user.username, "alice");

        let fetched = service.get_by_id(user.id).await.unwrap();
        assert_eq!(fetched.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let service = test_service().await;
        service.create(create_user("alice")).await.unwrap();

        let result = service.create(create_user("alice")).await;
        assert!(matches!(result, Err(UserError::UsernameTaken)));
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let service = test_service().await;
        let result = service.update(999, UpdateUser::default()).await;
        assert!(matches!(result, Err(UserError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_user() {
        let service = test_service().await;
        let user = service.create(create_user("bob")).await.unwrap();

        service.delete(user.id).await.unwrap();
        assert!(matches!(
            service.get_by_id(user.id).await,
            Err(UserError::NotFound)
        ));
    }
}
