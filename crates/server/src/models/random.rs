use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Random movie suggestion assembled from the remote catalog.
///
/// Fields prefer the detail lookup and fall back per-field to the
/// originally picked search result when the enrichment call fails.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RandomMovie {
    pub tmdb_id: Option<i64>,
    pub title: Option<String>,
    pub overview: Option<String>,
    /// Genre names, or raw TMDB genre codes when only the search
    /// result is available
    pub genres: Vec<String>,
    pub release_date: Option<String>,
    /// Canonical TMDB page, present whenever an id is
    pub tmdb_url: Option<String>,
}
