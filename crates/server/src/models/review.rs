use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Star rating with comment, linked to the authoring user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Review {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: i64,
    pub movie_id: i64,
    /// Star rating from 1 to 5
    pub rating: i32,
    pub comment: String,
}

/// Review joined with the reviewed movie's title, for read endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewWithMovie {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: i64,
    pub movie_id: i64,
    pub movie_title: String,
    pub rating: i32,
    pub comment: String,
}

/// Request body for submitting a review.
/// The authoring user comes from the request identity, not the body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateReview {
    pub movie_id: i64,
    pub rating: i32,
    pub comment: String,
}

/// Request body for editing a review.
/// Absent fields keep their current values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateReview {
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub comment: Option<String>,
}
