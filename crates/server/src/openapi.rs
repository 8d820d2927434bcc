use utoipa::OpenApi;

use crate::models::{
    CreateMovie, CreateReview, CreateUser, Movie, RandomMovie, Review, ReviewWithMovie, User,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movie Review API",
        version = "1.0.0"
    ),
    tags(
        (name = "users", description = "User account endpoints"),
        (name = "movies", description = "Movie catalog endpoints"),
        (name = "reviews", description = "Review endpoints")
    ),
    components(schemas(
        User,
        CreateUser,
        Movie,
        CreateMovie,
        Review,
        ReviewWithMovie,
        CreateReview,
        RandomMovie
    ))
)]
pub struct ApiDoc;
