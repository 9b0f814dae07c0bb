pub mod facets;
pub mod pipeline;
pub mod ranking;

pub use facets::{sort_facet, year_facet, Facet, FacetOption};
pub use pipeline::{fetch_movie_page, DiscoverError, MoviePage, YearRange, MAX_TOTAL_PAGES};
pub use ranking::{RankedMovie, RankingConfig};
