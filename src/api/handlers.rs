use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::api::pagination::{page_strip, PageEntry};
use crate::api::state::PageState;
use crate::api::view::{movie_view, MovieView};
use crate::discover::{self, DiscoverError, Facet};
use crate::server::AppState;
use crate::tmdb::Genre;

/// The one user-facing error string; the real error only goes to the log.
pub const FETCH_ERROR_MESSAGE: &str = "Erreur lors du chargement des films.";

#[derive(Debug, Serialize)]
pub struct MoviesResponse {
    pub movies: Vec<MovieView>,
    pub page: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
    pub pagination: Vec<PageEntry>,
    #[serde(rename = "hasPrevious")]
    pub has_previous: bool,
    #[serde(rename = "hasNext")]
    pub has_next: bool,
    /// Canonical query string for this state, for the address bar.
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct FacetsResponse {
    pub facets: Vec<Facet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<Genre>>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
}

/// GET /api/movies?page=&year=&genre=
///
/// The page controller: reads the state from the URL, runs the discovery
/// pipeline and returns display-ready movies plus the pagination strip.
/// Pipeline errors collapse into one generic message.
pub async fn get_movies(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let page_state = PageState::from_params(&params);

    if !state.tmdb.has_api_key() {
        info!("no TMDB API key configured, skipping movie fetch");
        return Json(empty_page(&page_state)).into_response();
    }

    let result = discover::fetch_movie_page(
        &state.tmdb,
        &state.config.ranking,
        page_state.page,
        page_state.year.as_deref(),
    )
    .await;

    match result {
        Ok(page) => {
            let movies: Vec<MovieView> = page
                .movies
                .iter()
                .map(|movie| movie_view(movie, &state.config.tmdb.image_base_url))
                .collect();

            Json(MoviesResponse {
                movies,
                page: page_state.page,
                total_pages: page.total_pages,
                pagination: page_strip(page_state.page, page.total_pages),
                has_previous: page_state.page > 1,
                has_next: page_state.page < page.total_pages,
                query: page_state.to_query_string(),
            })
            .into_response()
        }
        Err(err) => {
            error!(error = %err, page = page_state.page, year = ?page_state.year, "failed to load movie page");
            let status = match err {
                DiscoverError::InvalidFilter(_) => StatusCode::BAD_REQUEST,
                DiscoverError::Fetch(_) => StatusCode::BAD_GATEWAY,
            };
            (status, Json(ErrorResponse { error: FETCH_ERROR_MESSAGE })).into_response()
        }
    }
}

/// GET /api/facets
///
/// Static facet data (year buckets, sort keys) plus the TMDB genre list
/// when a key is configured. A failed genre fetch degrades to the static
/// facets instead of failing the request.
pub async fn get_facets(State(state): State<AppState>) -> Response {
    let genres = if state.tmdb.has_api_key() {
        match state.tmdb.movie_genres().await {
            Ok(genres) => Some(genres),
            Err(err) => {
                warn!(error = %err, "failed to load genre list");
                None
            }
        }
    } else {
        None
    };

    Json(FacetsResponse {
        facets: vec![discover::year_facet(), discover::sort_facet()],
        genres,
    })
    .into_response()
}

fn empty_page(page_state: &PageState) -> MoviesResponse {
    MoviesResponse {
        movies: Vec::new(),
        page: page_state.page,
        total_pages: 1,
        pagination: page_strip(page_state.page, 1),
        has_previous: false,
        has_next: false,
        query: page_state.to_query_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page_shape() {
        let state = PageState::default();
        let response = empty_page(&state);
        assert!(response.movies.is_empty());
        assert_eq!(response.total_pages, 1);
        assert!(!response.has_previous);
        assert!(!response.has_next);
        assert_eq!(response.query, "page=1");
    }

    #[test]
    fn test_movies_response_serializes_camel_case() {
        let state = PageState::default();
        let json = serde_json::to_value(empty_page(&state)).unwrap();
        assert!(json.get("totalPages").is_some());
        assert!(json.get("hasPrevious").is_some());
        assert!(json.get("hasNext").is_some());
    }
}
