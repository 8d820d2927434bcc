use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::services::{MovieError, RandomMovieError, ReviewError, UserError};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "message": self.message,
                "status": self.status.as_u16(),
            }
        }));

        (self.status, body).into_response()
    }
}

// Convert from service error types

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {}", err);
        Self::internal("Internal server error")
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound => Self::not_found("User not found"),
            UserError::UsernameTaken => Self::conflict("Username already taken"),
            UserError::Database(e) => e.into(),
        }
    }
}

impl From<MovieError> for AppError {
    fn from(err: MovieError) -> Self {
        match err {
            MovieError::NotFound => Self::not_found("Movie not found"),
            MovieError::Database(e) => e.into(),
        }
    }
}

impl From<ReviewError> for AppError {
    fn from(err: ReviewError) -> Self {
        match err {
            ReviewError::NotFound => Self::not_found("Review not found"),
            ReviewError::NotOwner => Self::forbidden("Only the review author can modify it"),
            ReviewError::UnknownMovie(id) => {
                Self::bad_request(format!("Movie {} does not exist", id))
            }
            ReviewError::InvalidRating => Self::bad_request("Rating must be between 1 and 5"),
            ReviewError::Database(e) => e.into(),
        }
    }
}

impl From<RandomMovieError> for AppError {
    fn from(err: RandomMovieError) -> Self {
        match err {
            RandomMovieError::NotConfigured => {
                Self::internal("TMDB API key is not configured")
            }
            RandomMovieError::Upstream(e) => {
                tracing::error!("TMDB request failed: {}", e);
                Self::unavailable("Movie catalog is currently unavailable")
            }
            RandomMovieError::NoMatches => {
                Self::not_found("No movies matched the requested filter")
            }
        }
    }
}
