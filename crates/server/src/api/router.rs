use axum::Router;

use crate::state::AppState;

use super::handlers;

pub fn create_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        // User endpoints
        .route(
            "/api/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/api/users/{id}",
            get(handlers::get_user_by_id)
                .patch(handlers::update_user)
                .delete(handlers::delete_user),
        )
        // Movie catalog endpoints
        .route(
            "/api/movies",
            get(handlers::list_movies).post(handlers::create_movie),
        )
        .route("/api/movies/random", get(handlers::random_movie))
        .route(
            "/api/movies/{id}",
            get(handlers::get_movie_by_id)
                .patch(handlers::update_movie)
                .delete(handlers::delete_movie),
        )
        // Review endpoints
        .route(
            "/api/reviews",
            get(handlers::list_reviews).post(handlers::create_review),
        )
        .route(
            "/api/reviews/{id}",
            get(handlers::get_review_by_id)
                .patch(handlers::update_review)
                .delete(handlers::delete_review),
        )
        .with_state(state)
}
