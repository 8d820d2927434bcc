use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::models::{CreateReview, Review, ReviewWithMovie, UpdateReview};

/// Common SELECT fields for review queries
const SELECT_REVIEW: &str = r#"
    SELECT
        id, created_at, updated_at,
        user_id, movie_id, rating, comment
    FROM reviews
"#;

/// SELECT joining the reviewed movie's title
const SELECT_REVIEW_WITH_MOVIE: &str = r#"
    SELECT
        r.id, r.created_at, r.updated_at,
        r.user_id, r.movie_id, m.title AS movie_title,
        r.rating, r.comment
    FROM reviews r
    JOIN movies m ON m.id = r.movie_id
"#;

pub struct ReviewRepository;

impl ReviewRepository {
    /// Create a new review for the given user
    pub async fn create(
        pool: &SqlitePool,
        user_id: i64,
        data: CreateReview,
    ) -> Result<Review, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO reviews (user_id, movie_id, rating, comment)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(data.movie_id)
        .bind(data.rating)
        .bind(&data.comment)
        .fetch_one(pool)
        .await?;

        let id: i64 = sqlx::Row::get(&result, "id");
        Self::get_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Get a review by ID
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("{} WHERE id = $1", SELECT_REVIEW);
        let row = sqlx::query_as::<_, ReviewRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Get a review with its movie title by ID
    pub async fn get_by_id_with_movie(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<ReviewWithMovie>, sqlx::Error> {
        let query = format!("{} WHERE r.id = $1", SELECT_REVIEW_WITH_MOVIE);
        let row = sqlx::query_as::<_, ReviewWithMovieRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Get all reviews with movie titles, newest first
    pub async fn get_all_with_movie(
        pool: &SqlitePool,
    ) -> Result<Vec<ReviewWithMovie>, sqlx::Error> {
        let query = format!(
            "{} ORDER BY r.created_at DESC, r.id DESC",
            SELECT_REVIEW_WITH_MOVIE
        );
        let rows = sqlx::query_as::<_, ReviewWithMovieRow>(&query)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Update a review
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: UpdateReview,
    ) -> Result<Option<Review>, sqlx::Error> {
        let existing = Self::get_by_id(pool, id).await?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let rating = data.rating.unwrap_or(existing.rating);
        let comment = data.comment.unwrap_or(existing.comment);

        sqlx::query(
            r#"
            UPDATE reviews SET
                rating = $1,
                comment = $2,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $3
            "#,
        )
        .bind(rating)
        .bind(&comment)
        .bind(id)
        .execute(pool)
        .await?;

        Self::get_by_id(pool, id).await
    }

    /// Delete a review by ID
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete all reviews written by a user
    pub async fn delete_by_user_id(pool: &SqlitePool, user_id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete all reviews of a movie
    pub async fn delete_by_movie_id(pool: &SqlitePool, movie_id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE movie_id = $1")
            .bind(movie_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}

/// Internal row type for mapping SQLite results
#[derive(Debug, sqlx::FromRow)]
struct ReviewRow {
    id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    user_id: i64,
    movie_id: i64,
    rating: i32,
    comment: String,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            user_id: row.user_id,
            movie_id: row.movie_id,
            rating: row.rating,
            comment: row.comment,
        }
    }
}

/// Internal row type for the movie-title join
#[derive(Debug, sqlx::FromRow)]
struct ReviewWithMovieRow {
    id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    user_id: i64,
    movie_id: i64,
    movie_title: String,
    rating: i32,
    comment: String,
}

impl From<ReviewWithMovieRow> for ReviewWithMovie {
    fn from(row: ReviewWithMovieRow) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            user_id: row.user_id,
            movie_id: row.movie_id,
            movie_title: row.movie_title,
            rating: row.rating,
            comment: row.comment,
        }
    }
}
