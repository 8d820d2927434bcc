use sqlx::SqlitePool;
use thiserror::Error;

use crate::models::{CreateMovie, Movie, UpdateMovie};
use crate::repositories::{MovieRepository, ReviewRepository};

#[derive(Debug, Error)]
pub enum MovieError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Movie not found")]
    NotFound,
}

/// Service for the local movie catalog
pub struct MovieService {
    db: SqlitePool,
}

impl MovieService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Add a movie to the catalog
    pub async fn create(&self, data: CreateMovie) -> Result<Movie, MovieError> {
        Ok(MovieRepository::create(&self.db, data).await?)
    }

    /// List movies, optionally filtered by genre substring
    pub async fn get_all(&self, genre: Option<&str>) -> Result<Vec<Movie>, MovieError> {
        Ok(MovieRepository::get_all(&self.db, genre).await?)
    }

    /// Get a movie by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Movie, MovieError> {
        MovieRepository::get_by_id(&self.db, id)
            .await?
            .ok_or(MovieError::NotFound)
    }

    /// Update a movie
    pub async fn update(&self, id: i64, data: UpdateMovie) -> Result<Movie, MovieError> {
        MovieRepository::update(&self.db, id, data)
            .await?
            .ok_or(MovieError::NotFound)
    }

    /// Delete a movie and all its reviews
    pub async fn delete(&self, id: i64) -> Result<(), MovieError> {
        ReviewRepository::delete_by_movie_id(&self.db, id).await?;
        if MovieRepository::delete(&self.db, id).await? {
            Ok(())
        } else {
            Err(MovieError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_service() -> MovieService {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        db::run_migrations(&pool).await.unwrap();
        MovieService::new(pool)
    }

    fn create_movie(title: &str, genre: &str) -> CreateMovie {
        CreateMovie {
            title: title.to_string(),
            description: String::new(),
            genre: genre.to_string(),
            release_year: Some(2020),
        }
    }

    #[tokio::test]
    async fn test_genre_substring_filter() {
        let service = test_service().await;
        service.create(create_movie("Mad Max", "Action")).await.unwrap();
        service.create(create_movie("Heat", "Action")).await.unwrap();
        service.create(create_movie("Amelie", "Romance")).await.unwrap();

        let action = service.get_all(Some("act")).await.unwrap();
        assert_eq!(action.len(), 2);

        let all = service.get_all(None).await.unwrap();
        assert_eq!(all.len(), 3);

        let none = service.get_all(Some("horror")).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_update_clears_release_year() {
        let service = test_service().await;
        let movie = service.create(create_movie("Heat", "Action")).await.unwrap();

        let data = UpdateMovie {
            release_year: crate::models::Clearable::Clear,
            ..Default::default()
        };
        let updated = service.update(movie.id, data).await.unwrap();
        assert_eq!(updated.release_year, None);
        assert_eq!(updated.title, "Heat");
    }

    #[tokio::test]
    async fn test_get_missing_movie() {
        let service = test_service().await;
        assert!(matches!(
            service.get_by_id(42).await,
            Err(MovieError::NotFound)
        ));
    }
}
