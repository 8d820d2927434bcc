use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::models::{CreateMovie, Movie, UpdateMovie};
use crate::state::AppState;

use super::GenreQuery;

pub async fn create_movie(
    State(state): State<AppState>,
    Json(payload): Json<CreateMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let movie = state.movies.create(payload).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// List catalog movies, optionally filtered by genre substring
pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<GenreQuery>,
) -> AppResult<Json<Vec<Movie>>> {
    let movies = state.movies.get_all(query.genre.as_deref()).await?;
    Ok(Json(movies))
}

pub async fn get_movie_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Movie>> {
    let movie = state.movies.get_by_id(id).await?;
    Ok(Json(movie))
}

pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateMovie>,
) -> AppResult<Json<Movie>> {
    let movie = state.movies.update(id, payload).await?;
    Ok(Json(movie))
}

pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.movies.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
