use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::auth::CurrentUser;
use crate::error::AppResult;
use crate::models::{CreateReview, Review, ReviewWithMovie, UpdateReview};
use crate::state::AppState;

pub async fn create_review(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateReview>,
) -> AppResult<(StatusCode, Json<Review>)> {
    let review = state.reviews.create(user.id, payload).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

pub async fn list_reviews(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ReviewWithMovie>>> {
    let reviews = state.reviews.get_all().await?;
    Ok(Json(reviews))
}

pub async fn get_review_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ReviewWithMovie>> {
    let review = state.reviews.get_by_id(id).await?;
    Ok(Json(review))
}

pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<UpdateReview>,
) -> AppResult<Json<Review>> {
    let review = state.reviews.update(id, user.id, payload).await?;
    Ok(Json(review))
}

pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    CurrentUser(user): CurrentUser,
) -> AppResult<StatusCode> {
    state.reviews.delete(id, user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
