use std::str::FromStr;

use tracing::debug;

use crate::discover::ranking::{RankedMovie, RankingConfig};
use crate::tmdb::{Credits, MovieDetails, MovieSummary, TmdbClient, TmdbError};

/// TMDB refuses discover pages beyond 500, whatever total it reports.
pub const MAX_TOTAL_PAGES: i64 = 500;

#[derive(Debug, thiserror::Error)]
pub enum DiscoverError {
    #[error("invalid year range filter: {0:?}")]
    InvalidFilter(String),
    #[error(transparent)]
    Fetch(#[from] TmdbError),
}

/// Inclusive year range parsed from a `"<start>-<end>"` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: u16,
    pub end: u16,
}

impl FromStr for YearRange {
    type Err = DiscoverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DiscoverError::InvalidFilter(s.to_string());
        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        Ok(YearRange {
            start: start.parse().map_err(|_| invalid())?,
            end: end.parse().map_err(|_| invalid())?,
        })
    }
}

impl YearRange {
    pub fn lower_bound(&self) -> String {
        format!("{}-01-01", self.start)
    }

    pub fn upper_bound(&self) -> String {
        format!("{}-12-31", self.end)
    }
}

/// Query parameters for the discover request: adult titles excluded,
/// server-side sort by raw vote average, vote-count floor, and date bounds
/// when a year range is selected.
pub fn discover_query(
    ranking: &RankingConfig,
    page: i64,
    year: Option<&YearRange>,
) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("include_adult", "false".to_string()),
        ("sort_by", "vote_average.desc".to_string()),
        ("vote_count.gte", ranking.vote_count_floor.to_string()),
        ("page", page.to_string()),
    ];

    if let Some(range) = year {
        query.push(("primary_release_date.gte", range.lower_bound()));
        query.push(("primary_release_date.lte", range.upper_bound()));
    }

    query
}

/// One ranked page of discovery results.
#[derive(Debug)]
pub struct MoviePage {
    pub movies: Vec<RankedMovie>,
    pub total_pages: i64,
}

/// The discovery pipeline: fetch one discover page, enrich every candidate
/// with details and credits, filter, score and sort.
///
/// The year token is validated before anything goes over the wire; a
/// malformed token is an `InvalidFilter` error. Enrichment is
/// all-or-nothing: the first failed fetch fails the page.
pub async fn fetch_movie_page(
    client: &TmdbClient,
    ranking: &RankingConfig,
    page: i64,
    year: Option<&str>,
) -> Result<MoviePage, DiscoverError> {
    let year_range = match year {
        Some(token) if !token.is_empty() => Some(token.parse::<YearRange>()?),
        _ => None,
    };

    let query = discover_query(ranking, page, year_range.as_ref());
    debug!(page, ?year_range, "requesting discover page");
    let discovered = client.discover_movies(&query).await?;
    let total_pages = discovered.total_pages.min(MAX_TOTAL_PAGES).max(1);

    let enriched = enrich_candidates(client, &discovered.results).await?;
    let movies = ranking.rank(enriched);
    debug!(
        candidates = discovered.results.len(),
        kept = movies.len(),
        total_pages,
        "ranked discover page"
    );

    Ok(MoviePage {
        movies,
        total_pages,
    })
}

/// Fetch details and credits for every candidate concurrently, awaited as
/// one unit.
async fn enrich_candidates(
    client: &TmdbClient,
    candidates: &[MovieSummary],
) -> Result<Vec<(MovieDetails, Credits)>, TmdbError> {
    let fetches = candidates.iter().map(|candidate| async move {
        let details = client.movie_details(candidate.id).await?;
        let credits = client.movie_credits(candidate.id).await?;
        Ok::<_, TmdbError>((details, credits))
    });

    futures::future::try_join_all(fetches).await
}
