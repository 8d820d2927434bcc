use reqwest::Client;
use sqlx::SqlitePool;
use std::sync::Arc;
use tmdb::TmdbClient;

use crate::config::Config;
use crate::services::{
    MovieCatalog, MovieService, RandomMovieService, ReviewService, UserService,
};

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
    pub http_client: Client,
    pub users: Arc<UserService>,
    pub movies: Arc<MovieService>,
    pub reviews: Arc<ReviewService>,
    pub random: Arc<RandomMovieService>,
}

impl AppState {
    pub fn new(db: SqlitePool, config: Config, http_client: Client) -> Self {
        let catalog = config.tmdb_api_key.as_ref().map(|key| {
            let client = TmdbClient::with_client(http_client.clone(), key.as_str())
                .with_language(config.tmdb_language.as_str());
            Arc::new(client) as Arc<dyn MovieCatalog>
        });
        if catalog.is_none() {
            tracing::warn!("TMDB_API_KEY is not set, random movie suggestions are disabled");
        }

        Self {
            db: db.clone(),
            config: Arc::new(config),
            http_client,
            users: Arc::new(UserService::new(db.clone())),
            movies: Arc::new(MovieService::new(db.clone())),
            reviews: Arc::new(ReviewService::new(db)),
            random: Arc::new(RandomMovieService::new(catalog)),
        }
    }
}
