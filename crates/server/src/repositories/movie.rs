use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::models::{CreateMovie, Movie, UpdateMovie};

/// Common SELECT fields for movie queries
const SELECT_MOVIE: &str = r#"
    SELECT
        id, created_at, updated_at,
        title, description, genre, release_year
    FROM movies
"#;

pub struct MovieRepository;

impl MovieRepository {
    /// Create a new movie
    pub async fn create(pool: &SqlitePool, data: CreateMovie) -> Result<Movie, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO movies (title, description, genre, release_year)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.genre)
        .bind(data.release_year)
        .fetch_one(pool)
        .await?;

        let id: i64 = sqlx::Row::get(&result, "id");
        Self::get_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Get a movie by ID
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("{} WHERE id = $1", SELECT_MOVIE);
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Get all movies, optionally filtered by genre substring.
    /// SQLite LIKE is case-insensitive for ASCII, which is what we want.
    pub async fn get_all(
        pool: &SqlitePool,
        genre: Option<&str>,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let rows = match genre {
            Some(genre) => {
                let query = format!(
                    "{} WHERE genre LIKE $1 ORDER BY created_at DESC",
                    SELECT_MOVIE
                );
                sqlx::query_as::<_, MovieRow>(&query)
                    .bind(format!("%{}%", genre))
                    .fetch_all(pool)
                    .await?
            }
            None => {
                let query = format!("{} ORDER BY created_at DESC", SELECT_MOVIE);
                sqlx::query_as::<_, MovieRow>(&query).fetch_all(pool).await?
            }
        };

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Update a movie
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let existing = Self::get_by_id(pool, id).await?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let title = data.title.unwrap_or(existing.title);
        let description = data.description.unwrap_or(existing.description);
        let genre = data.genre.unwrap_or(existing.genre);
        let release_year = data.release_year.resolve(existing.release_year);

        sqlx::query(
            r#"
            UPDATE movies SET
                title = $1,
                description = $2,
                genre = $3,
                release_year = $4,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $5
            "#,
        )
        .bind(&title)
        .bind(&description)
        .bind(&genre)
        .bind(release_year)
        .bind(id)
        .execute(pool)
        .await?;

        Self::get_by_id(pool, id).await
    }

    /// Delete a movie by ID
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Internal row type for mapping SQLite results
#[derive(Debug, sqlx::FromRow)]
struct MovieRow {
    id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    title: String,
    description: String,
    genre: String,
    release_year: Option<i32>,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            title: row.title,
            description: row.description,
            genre: row.genre,
            release_year: row.release_year,
        }
    }
}
