use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::AppResult;
use crate::models::RandomMovie;
use crate::state::AppState;

use super::GenreQuery;

/// Suggest a random movie from the TMDB catalog
#[utoipa::path(
    get,
    path = "/api/movies/random",
    tag = "movies",
    params(GenreQuery),
    responses(
        (status = 200, description = "Random movie suggestion", body = RandomMovie),
        (status = 404, description = "No movies matched the filter"),
        (status = 500, description = "TMDB API key not configured"),
        (status = 503, description = "TMDB is unreachable")
    )
)]
pub async fn random_movie(
    State(state): State<AppState>,
    Query(query): Query<GenreQuery>,
) -> AppResult<Json<RandomMovie>> {
    let movie = state.random.resolve(query.genre.as_deref()).await?;
    Ok(Json(movie))
}
