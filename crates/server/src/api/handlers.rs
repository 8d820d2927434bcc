mod movies;
mod random;
mod reviews;
mod users;

use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for genre filtering
#[derive(Debug, Deserialize, IntoParams)]
pub struct GenreQuery {
    pub genre: Option<String>,
}

// Re-export all handlers
pub use movies::{create_movie, delete_movie, get_movie_by_id, list_movies, update_movie};
pub use random::random_movie;
pub use reviews::{create_review, delete_review, get_review_by_id, list_reviews, update_review};
pub use users::{create_user, delete_user, get_user_by_id, list_users, update_user};
