use sqlx::SqlitePool;
use thiserror::Error;

use crate::models::{CreateReview, Review, ReviewWithMovie, UpdateReview};
use crate::repositories::{MovieRepository, ReviewRepository};

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Review not found")]
    NotFound,
    #[error("Only the review author can modify it")]
    NotOwner,
    #[error("Movie not found: id={0}")]
    UnknownMovie(i64),
    #[error("Rating must be between 1 and 5")]
    InvalidRating,
}

/// Service for managing reviews.
///
/// Mutations enforce ownership: a review can only be edited or deleted
/// by the user who wrote it.
pub struct ReviewService {
    db: SqlitePool,
}

impl ReviewService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Submit a review, linked to the acting user
    pub async fn create(&self, user_id: i64, data: CreateReview) -> Result<Review, ReviewError> {
        validate_rating(data.rating)?;

        if MovieRepository::get_by_id(&self.db, data.movie_id)
            .await?
            .is_none()
        {
            return Err(ReviewError::UnknownMovie(data.movie_id));
        }

        Ok(ReviewRepository::create(&self.db, user_id, data).await?)
    }

    /// Get all reviews with movie titles, newest first
    pub async fn get_all(&self) -> Result<Vec<ReviewWithMovie>, ReviewError> {
        Ok(ReviewRepository::get_all_with_movie(&self.db).await?)
    }

    /// Get a review with its movie title by ID
    pub async fn get_by_id(&self, id: i64) -> Result<ReviewWithMovie, ReviewError> {
        ReviewRepository::get_by_id_with_movie(&self.db, id)
            .await?
            .ok_or(ReviewError::NotFound)
    }

    /// Edit a review, allowed only for its author
    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        data: UpdateReview,
    ) -> Result<Review, ReviewError> {
        if let Some(rating) = data.rating {
            validate_rating(rating)?;
        }

        self.check_owner(id, user_id).await?;

        ReviewRepository::update(&self.db, id, data)
            .await?
            .ok_or(ReviewError::NotFound)
    }

    /// Delete a review, allowed only for its author
    pub async fn delete(&self, id: i64, user_id: i64) -> Result<(), ReviewError> {
        self.check_owner(id, user_id).await?;

        if ReviewRepository::delete(&self.db, id).await? {
            Ok(())
        } else {
            Err(ReviewError::NotFound)
        }
    }

    async fn check_owner(&self, id: i64, user_id: i64) -> Result<(), ReviewError> {
        let review = ReviewRepository::get_by_id(&self.db, id)
            .await?
            .ok_or(ReviewError::NotFound)?;

        if review.user_id != user_id {
            return Err(ReviewError::NotOwner);
        }

        Ok(())
    }
}

fn validate_rating(rating: i32) -> Result<(), ReviewError> {
    if (1..=5).contains(&rating) {
        Ok(())
    } else {
        Err(ReviewError::InvalidRating)
    }
}
