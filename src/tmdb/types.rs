use serde::{Deserialize, Serialize};

/// One entry of a `discover/movie` page. Only carries the summary fields;
/// the interesting ones (runtime, countries, credits) come from the
/// per-movie detail endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverResponse {
    pub page: i64,
    pub results: Vec<MovieSummary>,
    pub total_pages: i64,
    pub total_results: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionCountry {
    pub iso_3166_1: String,
    #[serde(default)]
    pub name: String,
}

/// Full detail record for a single movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    /// Minutes; TMDB reports `null` or 0 for unknown runtimes.
    #[serde(default)]
    pub runtime: Option<i64>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub production_countries: Vec<ProductionCountry>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewMember {
    pub job: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastMember {
    pub name: String,
}

/// Credits for a movie. Crew and cast keep the upstream order, which for
/// cast is billing order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub crew: Vec<CrewMember>,
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenreListResponse {
    pub genres: Vec<Genre>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_discover_response() {
        let json = r#"{
            "page": 1,
            "results": [
                {
                    "id": 278,
                    "title": "Les Évadés",
                    "release_date": "1994-09-23",
                    "overview": "...",
                    "poster_path": "/x.jpg",
                    "vote_average": 8.7,
                    "vote_count": 28000
                }
            ],
            "total_pages": 100000,
            "total_results": 1999990
        }"#;

        let response: DiscoverResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].id, 278);
        assert_eq!(response.total_pages, 100000);
    }

    #[test]
    fn test_parse_movie_details_with_nulls() {
        let json = r#"{
            "id": 278,
            "title": "Les Évadés",
            "release_date": null,
            "runtime": null,
            "genres": [{"id": 18, "name": "Drame"}],
            "overview": "",
            "poster_path": null,
            "production_countries": [{"iso_3166_1": "US", "name": "United States of America"}],
            "vote_average": 8.7,
            "vote_count": 28000
        }"#;

        let details: MovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.runtime, None);
        assert_eq!(details.release_date, None);
        assert_eq!(details.production_countries[0].iso_3166_1, "US");
    }

    #[test]
    fn test_parse_credits_ignores_extra_fields() {
        let json = r#"{
            "id": 278,
            "cast": [
                {"name": "Tim Robbins", "character": "Andy Dufresne", "order": 0},
                {"name": "Morgan Freeman", "character": "Red", "order": 1}
            ],
            "crew": [
                {"job": "Director", "name": "Frank Darabont", "department": "Directing"}
            ]
        }"#;

        let credits: Credits = serde_json::from_str(json).unwrap();
        assert_eq!(credits.cast.len(), 2);
        assert_eq!(credits.cast[0].name, "Tim Robbins");
        assert_eq!(credits.crew[0].job, "Director");
    }

    #[test]
    fn test_parse_credits_missing_lists() {
        let credits: Credits = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(credits.cast.is_empty());
        assert!(credits.crew.is_empty());
    }
}
