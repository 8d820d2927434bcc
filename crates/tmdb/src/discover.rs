use crate::{
    models::{MovieSummary, PaginatedResponse},
    TmdbClient,
};

#[derive(Debug, Default)]
pub struct DiscoverMovieParams {
    /// Restrict results to a single TMDB genre id.
    pub with_genres: Option<i64>,
    /// Result page to fetch, starting at 1.
    pub page: Option<i64>,
}

impl TmdbClient {
    /// Discover movies sorted by descending popularity.
    ///
    /// Adult and video-only entries are always excluded.
    ///
    /// GET /discover/movie
    pub async fn discover_movies(
        &self,
        params: DiscoverMovieParams,
    ) -> crate::Result<PaginatedResponse<MovieSummary>> {
        let url = self.url("/discover/movie");
        let page = params.page.unwrap_or(1);

        let mut query = vec![
            ("api_key", self.api_key().to_string()),
            ("language", self.lang.clone()),
            ("sort_by", "popularity.desc".to_string()),
            ("include_adult", "false".to_string()),
            ("include_video", "false".to_string()),
            ("page", page.to_string()),
        ];
        if let Some(genre) = params.with_genres {
            query.push(("with_genres", genre.to_string()));
        }

        let response = self.client().get(&url).query(&query).send().await?;
        self.handle_response(response).await
    }
}
