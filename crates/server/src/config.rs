use serde::{Deserialize, Serialize};

/// Upper bound on any single outbound catalog call, in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    /// TMDB API key. `None` disables random movie suggestions.
    pub tmdb_api_key: Option<String>,
    /// Language sent with every TMDB request.
    pub tmdb_language: String,
}

impl Config {
    pub fn new(database_url: String, tmdb_api_key: Option<String>) -> Self {
        Self {
            database_url,
            max_connections: 5,
            tmdb_api_key,
            tmdb_language: "en-US".to_string(),
        }
    }
}
