//! Random movie suggestions backed by the TMDB discover API.
//!
//! Only the initial search is load-bearing: the random page re-roll and
//! the detail lookup are best-effort enrichment, and their failures are
//! absorbed rather than surfaced.

use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;
use thiserror::Error;
use tmdb::{
    DiscoverMovieParams, MovieDetails, MovieSummary, PaginatedResponse, TmdbClient, TmdbError,
};

use crate::genres::genre_code;
use crate::models::RandomMovie;

/// Deep catalogs paginate into the thousands of pages; entries past
/// this point are mostly obscure, so the random re-roll stays within it.
const MAX_RANDOM_PAGE: i64 = 20;

const TMDB_MOVIE_URL: &str = "https://www.themoviedb.org/movie";

#[derive(Debug, Error)]
pub enum RandomMovieError {
    /// No API key is configured; resolution fails before any network call.
    #[error("TMDB API key is not configured")]
    NotConfigured,
    /// The initial catalog search failed; there is nothing to pick from.
    #[error("TMDB API error: {0}")]
    Upstream(#[from] TmdbError),
    /// The search succeeded but returned no movies.
    #[error("No movies matched the requested filter")]
    NoMatches,
}

/// Search and detail lookups against the remote movie catalog.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Fetch one page of movies sorted by descending popularity,
    /// optionally restricted to a TMDB genre id.
    async fn discover(
        &self,
        page: i64,
        genre: Option<i64>,
    ) -> Result<PaginatedResponse<MovieSummary>, TmdbError>;

    /// Fetch the full record for one movie id.
    async fn movie_details(&self, id: i64) -> Result<MovieDetails, TmdbError>;
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    async fn discover(
        &self,
        page: i64,
        genre: Option<i64>,
    ) -> Result<PaginatedResponse<MovieSummary>, TmdbError> {
        self.discover_movies(DiscoverMovieParams {
            with_genres: genre,
            page: Some(page),
        })
        .await
    }

    async fn movie_details(&self, id: i64) -> Result<MovieDetails, TmdbError> {
        self.get_movie(id).await
    }
}

/// Service resolving one random movie per request.
pub struct RandomMovieService {
    catalog: Option<Arc<dyn MovieCatalog>>,
}

impl RandomMovieService {
    /// `None` means no API key is configured; every resolution then
    /// fails with [`RandomMovieError::NotConfigured`].
    pub fn new(catalog: Option<Arc<dyn MovieCatalog>>) -> Self {
        Self { catalog }
    }

    /// Pick one random movie, optionally filtered by genre name.
    ///
    /// Unknown genre names degrade to an unfiltered search instead of
    /// failing; see [`crate::genres::genre_code`].
    pub async fn resolve(&self, genre: Option<&str>) -> Result<RandomMovie, RandomMovieError> {
        let catalog = self
            .catalog
            .as_ref()
            .ok_or(RandomMovieError::NotConfigured)?;

        let genre_id = genre.and_then(genre_code);

        let first_page = catalog.discover(1, genre_id).await?;
        if first_page.results.is_empty() {
            return Err(RandomMovieError::NoMatches);
        }

        // Re-roll onto a random page when more than one is available.
        // A failed re-roll is not fatal, page 1 still has results.
        let page = if first_page.total_pages > 1 {
            let max_page = first_page.total_pages.min(MAX_RANDOM_PAGE);
            let target = rand::rng().random_range(1..=max_page);
            match catalog.discover(target, genre_id).await {
                Ok(p) if !p.results.is_empty() => p,
                Ok(_) => first_page,
                Err(e) => {
                    tracing::debug!("Re-roll to page {} failed, using page 1: {}", target, e);
                    first_page
                }
            }
        } else {
            first_page
        };

        let mut results = page.results;
        let index = rand::rng().random_range(0..results.len());
        let summary = results.swap_remove(index);

        // Detail lookup is enrichment only; the summary already carries
        // enough to answer.
        let details = match summary.id {
            Some(id) => match catalog.movie_details(id).await {
                Ok(d) => Some(d),
                Err(e) => {
                    tracing::warn!("Detail fetch for movie {} failed: {}", id, e);
                    None
                }
            },
            None => None,
        };

        Ok(assemble(summary, details))
    }
}

/// Merge the detail record over the picked summary, field by field.
fn assemble(summary: MovieSummary, details: Option<MovieDetails>) -> RandomMovie {
    let tmdb_id = details.as_ref().map(|d| d.id).or(summary.id);

    let title = details
        .as_ref()
        .and_then(|d| d.title.clone().or_else(|| d.name.clone()))
        .or(summary.title)
        .or(summary.name);

    let overview = details
        .as_ref()
        .and_then(|d| d.overview.clone())
        .or(summary.overview);

    let genres = match details.as_ref().filter(|d| !d.genres.is_empty()) {
        Some(d) => d.genres.iter().map(|g| g.name.clone()).collect(),
        None => summary.genre_ids.iter().map(|id| id.to_string()).collect(),
    };

    let release_date = details
        .as_ref()
        .and_then(|d| d.release_date.clone().or_else(|| d.first_air_date.clone()))
        .or(summary.release_date)
        .or(summary.first_air_date);

    let tmdb_url = tmdb_id.map(|id| format!("{}/{}", TMDB_MOVIE_URL, id));

    RandomMovie {
        tmdb_id,
        title,
        overview,
        genres,
        release_date,
        tmdb_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tmdb::Genre;

    /// Scripted catalog returning canned pages in order and recording
    /// every call for verification.
    #[derive(Default)]
    struct MockCatalog {
        pages: Mutex<Vec<Result<PaginatedResponse<MovieSummary>, TmdbError>>>,
        details: Mutex<Option<Result<MovieDetails, TmdbError>>>,
        discover_calls: Mutex<Vec<(i64, Option<i64>)>>,
        detail_calls: Mutex<Vec<i64>>,
    }

    impl MockCatalog {
        fn new() -> Self {
            Self::default()
        }

        /// Queue the result of the next discover call.
        fn push_page(&self, page: Result<PaginatedResponse<MovieSummary>, TmdbError>) {
            self.pages.lock().unwrap().push(page);
        }

        /// Set the result of the detail call.
        fn set_details(&self, details: Result<MovieDetails, TmdbError>) {
            *self.details.lock().unwrap() = Some(details);
        }

        fn discover_calls(&self) -> Vec<(i64, Option<i64>)> {
            self.discover_calls.lock().unwrap().clone()
        }

        fn detail_calls(&self) -> Vec<i64> {
            self.detail_calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MovieCatalog for MockCatalog {
        async fn discover(
            &self,
            page: i64,
            genre: Option<i64>,
        ) -> Result<PaginatedResponse<MovieSummary>, TmdbError> {
            self.discover_calls.lock().unwrap().push((page, genre));
            let mut pages = self.pages.lock().unwrap();
            if pages.is_empty() {
                return Err(api_error());
            }
            pages.remove(0)
        }

        async fn movie_details(&self, id: i64) -> Result<MovieDetails, TmdbError> {
            self.detail_calls.lock().unwrap().push(id);
            self.details
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(api_error()))
        }
    }

    fn api_error() -> TmdbError {
        TmdbError::Api {
            status_code: 503,
            message: "upstream unavailable".to_string(),
        }
    }

    fn summary(id: i64, title: &str) -> MovieSummary {
        MovieSummary {
            id: Some(id),
            title: Some(title.to_string()),
            name: None,
            original_title: None,
            overview: Some("overview".to_string()),
            poster_path: None,
            release_date: Some("2020-01-01".to_string()),
            first_air_date: None,
            genre_ids: vec![35, 18],
            popularity: 1.0,
            vote_average: 7.0,
            vote_count: 100,
            adult: false,
            video: false,
        }
    }

    fn page(
        results: Vec<MovieSummary>,
        total_pages: i64,
    ) -> PaginatedResponse<MovieSummary> {
        let total_results = results.len() as i64;
        PaginatedResponse {
            page: 1,
            results,
            total_pages,
            total_results,
        }
    }

    fn details(id: i64, title: &str) -> MovieDetails {
        MovieDetails {
            id,
            title: Some(title.to_string()),
            name: None,
            original_title: None,
            overview: Some("full overview".to_string()),
            poster_path: None,
            backdrop_path: None,
            release_date: Some("2020-02-02".to_string()),
            first_air_date: None,
            genres: vec![
                Genre {
                    id: 35,
                    name: "Comedy".to_string(),
                },
                Genre {
                    id: 18,
                    name: "Drama".to_string(),
                },
            ],
            popularity: 1.0,
            vote_average: 7.0,
            vote_count: 100,
            runtime: Some(100),
            status: Some("Released".to_string()),
            tagline: None,
            adult: false,
            video: false,
        }
    }

    fn service(catalog: Arc<MockCatalog>) -> RandomMovieService {
        RandomMovieService::new(Some(catalog as Arc<dyn MovieCatalog>))
    }

    #[tokio::test]
    async fn test_not_configured_makes_no_calls() {
        let service = RandomMovieService::new(None);
        let result = service.resolve(Some("comedy")).await;
        assert!(matches!(result, Err(RandomMovieError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_known_genre_maps_to_category_code() {
        let catalog = Arc::new(MockCatalog::new());
        catalog.push_page(Ok(page(vec![summary(1, "Airplane!")], 1)));
        catalog.set_details(Ok(details(1, "Airplane!")));

        let result = service(catalog.clone()).resolve(Some("comedy")).await;
        assert!(result.is_ok());
        assert_eq!(catalog.discover_calls(), vec![(1, Some(35))]);
    }

    #[tokio::test]
    async fn test_unknown_genre_searches_unfiltered() {
        let catalog = Arc::new(MockCatalog::new());
        catalog.push_page(Ok(page(vec![summary(1, "Something")], 1)));
        catalog.set_details(Ok(details(1, "Something")));

        let result = service(catalog.clone()).resolve(Some("blorp")).await;
        assert!(result.is_ok());
        assert_eq!(catalog.discover_calls(), vec![(1, None)]);
    }

    #[tokio::test]
    async fn test_first_search_failure_is_terminal() {
        let catalog = Arc::new(MockCatalog::new());
        catalog.push_page(Err(api_error()));

        let result = service(catalog.clone()).resolve(None).await;
        assert!(matches!(result, Err(RandomMovieError::Upstream(_))));
        assert_eq!(catalog.discover_calls().len(), 1);
        assert!(catalog.detail_calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_first_page_is_no_matches() {
        let catalog = Arc::new(MockCatalog::new());
        // total_pages claims more content, but an empty page 1 is final
        catalog.push_page(Ok(page(vec![], 5)));

        let result = service(catalog.clone()).resolve(None).await;
        assert!(matches!(result, Err(RandomMovieError::NoMatches)));
        assert_eq!(catalog.discover_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_single_page_skips_reroll() {
        let catalog = Arc::new(MockCatalog::new());
        catalog.push_page(Ok(page(
            vec![summary(1, "First"), summary(2, "Second")],
            1,
        )));
        catalog.set_details(Ok(details(1, "First")));

        service(catalog.clone()).resolve(None).await.unwrap();
        assert_eq!(catalog.discover_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_reroll_failure_falls_back_to_first_page() {
        let catalog = Arc::new(MockCatalog::new());
        let first: Vec<MovieSummary> =
            (1..=5).map(|i| summary(i, &format!("Movie {}", i))).collect();
        catalog.push_page(Ok(page(first, 3)));
        // No second page queued: the re-roll call errors, the detail
        // call errors, and resolution still succeeds from page 1.

        let movie = service(catalog.clone()).resolve(None).await.unwrap();
        assert_eq!(catalog.discover_calls().len(), 2);
        assert!(movie.title.unwrap().starts_with("Movie "));
    }

    #[tokio::test]
    async fn test_reroll_page_is_within_cap() {
        let catalog = Arc::new(MockCatalog::new());
        catalog.push_page(Ok(page(vec![summary(1, "First")], 500)));
        catalog.push_page(Ok(page(vec![summary(9, "Rerolled")], 500)));
        catalog.set_details(Ok(details(9, "Rerolled")));

        service(catalog.clone()).resolve(None).await.unwrap();

        let calls = catalog.discover_calls();
        assert_eq!(calls[0].0, 1);
        assert!((1..=MAX_RANDOM_PAGE).contains(&calls[1].0));
    }

    #[tokio::test]
    async fn test_detail_failure_uses_summary_fields() {
        let catalog = Arc::new(MockCatalog::new());
        catalog.push_page(Ok(page(vec![summary(42, "Fallback")], 1)));
        // No detail result queued: the detail call errors.

        let movie = service(catalog.clone()).resolve(None).await.unwrap();
        assert_eq!(catalog.detail_calls(), vec![42]);
        assert_eq!(movie.tmdb_id, Some(42));
        assert_eq!(movie.title.as_deref(), Some("Fallback"));
        assert_eq!(movie.overview.as_deref(), Some("overview"));
        // Genres fall back to raw codes, not names
        assert_eq!(movie.genres, vec!["35".to_string(), "18".to_string()]);
        assert_eq!(movie.release_date.as_deref(), Some("2020-01-01"));
        assert_eq!(
            movie.tmdb_url.as_deref(),
            Some("https://www.themoviedb.org/movie/42")
        );
    }

    #[tokio::test]
    async fn test_detail_success_enriches_fields() {
        let catalog = Arc::new(MockCatalog::new());
        catalog.push_page(Ok(page(vec![summary(7, "Summary Title")], 1)));
        catalog.set_details(Ok(details(7, "Detail Title")));

        let movie = service(catalog.clone()).resolve(None).await.unwrap();
        assert_eq!(movie.title.as_deref(), Some("Detail Title"));
        assert_eq!(movie.overview.as_deref(), Some("full overview"));
        assert_eq!(
            movie.genres,
            vec!["Comedy".to_string(), "Drama".to_string()]
        );
        assert_eq!(movie.release_date.as_deref(), Some("2020-02-02"));
    }

    #[tokio::test]
    async fn test_summary_without_id_skips_detail_and_url() {
        let catalog = Arc::new(MockCatalog::new());
        let mut anonymous = summary(0, "No Id");
        anonymous.id = None;
        catalog.push_page(Ok(page(vec![anonymous], 1)));

        let movie = service(catalog.clone()).resolve(None).await.unwrap();
        assert!(catalog.detail_calls().is_empty());
        assert_eq!(movie.tmdb_id, None);
        assert_eq!(movie.tmdb_url, None);
        assert_eq!(movie.title.as_deref(), Some("No Id"));
    }

    #[tokio::test]
    async fn test_title_falls_back_to_alternate_name() {
        let catalog = Arc::new(MockCatalog::new());
        let mut tv_style = summary(3, "ignored");
        tv_style.title = None;
        tv_style.name = Some("Alternate".to_string());
        tv_style.release_date = None;
        tv_style.first_air_date = Some("2019-05-05".to_string());
        catalog.push_page(Ok(page(vec![tv_style], 1)));

        let movie = service(catalog.clone()).resolve(None).await.unwrap();
        assert_eq!(movie.title.as_deref(), Some("Alternate"));
        assert_eq!(movie.release_date.as_deref(), Some("2019-05-05"));
    }
}
