mod client;
mod discover;
mod error;
mod movie;
pub mod models;

pub use client::TmdbClient;
pub use discover::DiscoverMovieParams;
pub use error::TmdbError;
pub use models::{Genre, MovieDetails, MovieSummary, PaginatedResponse};

pub type Result<T> = std::result::Result<T, TmdbError>;
