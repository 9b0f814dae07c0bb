use serde::{Deserialize, Serialize};

use crate::tmdb::{Credits, MovieDetails};

/// Ranking constants and filter lists. All values have the production
/// defaults but live in the config file so tests (and deployments) can
/// substitute them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Minimum vote count requested from the discover endpoint.
    #[serde(default = "default_vote_count_floor")]
    pub vote_count_floor: u32,
    /// The C constant of the weighted-rating formula: how many votes it
    /// takes before a movie's own average outweighs the global prior.
    #[serde(default = "default_prior_weight")]
    pub prior_weight: f64,
    /// Global mean rating the formula shrinks low-vote movies towards.
    #[serde(default = "default_global_average")]
    pub global_average: f64,
    /// ISO 3166-1 codes; a movie must have at least one production country
    /// in this list to be kept.
    #[serde(default = "default_allowed_countries")]
    pub allowed_countries: Vec<String>,
    /// Genre names that disqualify a movie outright.
    #[serde(default = "default_excluded_genres")]
    pub excluded_genres: Vec<String>,
}

fn default_vote_count_floor() -> u32 {
    3000
}

fn default_prior_weight() -> f64 {
    3000.0
}

fn default_global_average() -> f64 {
    6.5
}

fn default_allowed_countries() -> Vec<String> {
    ["US", "CN", "FR", "DE", "JP", "GB", "KR", "IT"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_excluded_genres() -> Vec<String> {
    vec!["Animation".to_string()]
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            vote_count_floor: default_vote_count_floor(),
            prior_weight: default_prior_weight(),
            global_average: default_global_average(),
            allowed_countries: default_allowed_countries(),
            excluded_genres: default_excluded_genres(),
        }
    }
}

/// An enriched movie together with its Bayesian weighted rating.
#[derive(Debug, Clone)]
pub struct RankedMovie {
    pub movie: MovieDetails,
    pub credits: Credits,
    pub weighted_rating: f64,
}

impl RankingConfig {
    /// Bayesian weighted rating: blends the movie's own average with the
    /// global average, weighted by vote count. With zero votes this is
    /// exactly the global average.
    pub fn weighted_rating(&self, vote_count: i64, vote_average: f64) -> f64 {
        let v = vote_count as f64;
        let c = self.prior_weight;
        (v / (v + c)) * vote_average + (c / (v + c)) * self.global_average
    }

    /// Keep the movie only if it has an allow-listed production country and
    /// none of the excluded genres.
    pub fn passes_filters(&self, movie: &MovieDetails) -> bool {
        let allowed_country = movie
            .production_countries
            .iter()
            .any(|c| self.allowed_countries.iter().any(|a| a == &c.iso_3166_1));

        let excluded_genre = movie
            .genres
            .iter()
            .any(|g| self.excluded_genres.iter().any(|e| e == &g.name));

        allowed_country && !excluded_genre
    }

    /// Filter, score and sort a batch of enriched movies. The sort is
    /// stable: equal ratings keep their post-filter order.
    pub fn rank(&self, movies: Vec<(MovieDetails, Credits)>) -> Vec<RankedMovie> {
        let mut ranked: Vec<RankedMovie> = movies
            .into_iter()
            .filter(|(movie, _)| self.passes_filters(movie))
            .map(|(movie, credits)| {
                let weighted_rating = self.weighted_rating(movie.vote_count, movie.vote_average);
                RankedMovie {
                    movie,
                    credits,
                    weighted_rating,
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.weighted_rating
                .partial_cmp(&a.weighted_rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tmdb::{Genre, ProductionCountry};

    fn movie(id: i64, countries: &[&str], genres: &[&str], votes: i64, avg: f64) -> MovieDetails {
        MovieDetails {
            id,
            title: format!("Movie {}", id),
            release_date: Some("2000-06-15".to_string()),
            runtime: Some(120),
            genres: genres
                .iter()
                .enumerate()
                .map(|(i, name)| Genre {
                    id: i as i64,
                    name: name.to_string(),
                })
                .collect(),
            overview: String::new(),
            poster_path: None,
            production_countries: countries
                .iter()
                .map(|code| ProductionCountry {
                    iso_3166_1: code.to_string(),
                    name: String::new(),
                })
                .collect(),
            vote_average: avg,
            vote_count: votes,
        }
    }

    #[test]
    fn test_weighted_rating_zero_votes_is_global_average() {
        let config = RankingConfig::default();
        assert_eq!(config.weighted_rating(0, 9.0), 6.5);
    }

    #[test]
    fn test_weighted_rating_monotonic_in_vote_count() {
        let config = RankingConfig::default();

        // Above the global average, more votes means a higher score.
        let low = config.weighted_rating(1000, 8.0);
        let high = config.weighted_rating(10000, 8.0);
        assert!(high > low);

        // Below the global average, more votes means a lower score.
        let low = config.weighted_rating(1000, 4.0);
        let high = config.weighted_rating(10000, 4.0);
        assert!(high < low);
    }

    #[test]
    fn test_weighted_rating_stays_in_range() {
        let config = RankingConfig::default();
        for &(votes, avg) in &[(0, 0.0), (1, 10.0), (3000, 5.0), (1_000_000, 10.0)] {
            let w = config.weighted_rating(votes, avg);
            assert!((0.0..=10.0).contains(&w), "out of range: {}", w);
        }
    }

    #[test]
    fn test_filters_exclude_countries_and_genres() {
        let config = RankingConfig::default();

        let batch = vec![
            (movie(1, &["XX"], &["Drama"], 5000, 7.0), Credits::default()),
            (
                movie(2, &["JP"], &["Animation", "Fantasy"], 5000, 8.0),
                Credits::default(),
            ),
            (movie(3, &["FR"], &["Drama"], 5000, 7.0), Credits::default()),
        ];

        let ranked = config.rank(batch);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].movie.id, 3);
    }

    #[test]
    fn test_rank_sorts_descending() {
        let config = RankingConfig::default();

        let batch = vec![
            (movie(1, &["US"], &["Drama"], 4000, 7.0), Credits::default()),
            (movie(2, &["US"], &["Drama"], 20000, 8.5), Credits::default()),
            (movie(3, &["US"], &["Drama"], 8000, 8.0), Credits::default()),
        ];

        let ranked = config.rank(batch);
        let ids: Vec<i64> = ranked.iter().map(|r| r.movie.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert!(ranked[0].weighted_rating >= ranked[1].weighted_rating);
    }

    #[test]
    fn test_rank_is_stable_for_equal_ratings() {
        let config = RankingConfig::default();

        // Identical vote stats produce identical weighted ratings, so the
        // post-filter order must be preserved.
        let batch = vec![
            (movie(10, &["US"], &["Drama"], 5000, 7.5), Credits::default()),
            (movie(11, &["XX"], &["Drama"], 5000, 7.5), Credits::default()),
            (movie(12, &["GB"], &["Drama"], 5000, 7.5), Credits::default()),
            (movie(13, &["DE"], &["Drama"], 5000, 7.5), Credits::default()),
        ];

        let ranked = config.rank(batch);
        let ids: Vec<i64> = ranked.iter().map(|r| r.movie.id).collect();
        assert_eq!(ids, vec![10, 12, 13]);
    }

    #[test]
    fn test_null_runtime_survives_ranking() {
        let config = RankingConfig::default();
        let mut m = movie(1, &["US"], &["Drama"], 5000, 7.0);
        m.runtime = None;

        let ranked = config.rank(vec![(m, Credits::default())]);
        assert_eq!(ranked[0].movie.runtime, None);
    }

    #[test]
    fn test_custom_config_is_honoured() {
        let config = RankingConfig {
            allowed_countries: vec!["BR".to_string()],
            excluded_genres: vec!["Horror".to_string()],
            ..RankingConfig::default()
        };

        assert!(config.passes_filters(&movie(1, &["BR"], &["Drama"], 100, 7.0)));
        assert!(!config.passes_filters(&movie(2, &["US"], &["Drama"], 100, 7.0)));
        assert!(!config.passes_filters(&movie(3, &["BR"], &["Horror"], 100, 7.0)));
    }
}
