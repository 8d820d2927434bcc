use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::models::{CreateUser, UpdateUser, User};

/// Common SELECT fields for user queries
const SELECT_USER: &str = r#"
    SELECT
        id, created_at, updated_at,
        username, email
    FROM users
"#;

pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    pub async fn create(pool: &SqlitePool, data: CreateUser) -> Result<User, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, email)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&data.username)
        .bind(&data.email)
        .fetch_one(pool)
        .await?;

        let id: i64 = sqlx::Row::get(&result, "id");
        Self::get_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Get a user by ID
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
        let query = format!("{} WHERE id = $1", SELECT_USER);
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Get all users
    pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("{} ORDER BY id ASC", SELECT_USER);
        let rows = sqlx::query_as::<_, UserRow>(&query).fetch_all(pool).await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Update a user
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let existing = Self::get_by_id(pool, id).await?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let username = data.username.unwrap_or(existing.username);
        let email = data.email.unwrap_or(existing.email);

        sqlx::query(
            r#"
            UPDATE users SET
                username = $1,
                email = $2,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $3
            "#,
        )
        .bind(&username)
        .bind(&email)
        .bind(id)
        .execute(pool)
        .await?;

        Self::get_by_id(pool, id).await
    }

    /// Delete a user by ID
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Internal row type for mapping SQLite results
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    username: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            username: row.username,
            email: row.email,
        }
    }
}
