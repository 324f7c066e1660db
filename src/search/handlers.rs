use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::{header, Method, StatusCode},
    Json,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, instrument};

use crate::{
    error::{api_error, internal, ApiError},
    search::dto::{SearchParams, SearchResponse, SearchResult},
    state::AppState,
};

/// CORS policy for the search endpoint.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(86_400))
}

#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = params.q.trim();
    if query.is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "Search query required"));
    }

    // Exactly one upstream call, no retry.
    let upstream = state.search.search(query).await.map_err(|e| {
        error!(error = %e, "upstream search failed");
        internal(e)
    })?;

    let Some(items) = upstream.items else {
        return Ok(Json(SearchResponse {
            items: Vec::new(),
            total: None,
        }));
    };

    let results: Vec<SearchResult> = items.into_iter().map(SearchResult::from).collect();
    info!(query, total = results.len(), "search completed");
    Ok(Json(SearchResponse {
        total: Some(results.len()),
        items: results,
    }))
}
