use chrono::NaiveDate;
use serde::Serialize;

use crate::discover::RankedMovie;

const UNAVAILABLE: &str = "N/A";
const NO_GENRES: &str = "Genres non disponibles";
const NO_RUNTIME: &str = "Durée non disponible";
const CAST_LIMIT: usize = 4;

/// Display-ready projection of a ranked movie.
#[derive(Debug, Clone, Serialize)]
pub struct MovieView {
    pub title: String,
    #[serde(rename = "releaseDate")]
    pub release_date: String,
    pub duration: String,
    pub genre: String,
    pub director: String,
    pub cast: String,
    pub description: String,
    #[serde(rename = "posterUrl")]
    pub poster_url: Option<String>,
}

/// Pure projection: no network, no state. Credits resolve to "N/A"
/// sentinels when absent, genres and runtime to their French sentinels.
pub fn movie_view(ranked: &RankedMovie, image_base_url: &str) -> MovieView {
    let movie = &ranked.movie;

    let director = ranked
        .credits
        .crew
        .iter()
        .find(|member| member.job == "Director")
        .map(|member| member.name.clone())
        .unwrap_or_else(|| UNAVAILABLE.to_string());

    let cast = if ranked.credits.cast.is_empty() {
        UNAVAILABLE.to_string()
    } else {
        ranked
            .credits
            .cast
            .iter()
            .take(CAST_LIMIT)
            .map(|actor| actor.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let genre = if movie.genres.is_empty() {
        NO_GENRES.to_string()
    } else {
        movie
            .genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let duration = match movie.runtime {
        Some(minutes) if minutes > 0 => format!("{} min", minutes),
        _ => NO_RUNTIME.to_string(),
    };

    MovieView {
        title: movie.title.clone(),
        release_date: movie
            .release_date
            .as_deref()
            .map(format_release_date)
            .unwrap_or_default(),
        duration,
        genre,
        director,
        cast,
        description: movie.overview.clone(),
        poster_url: movie
            .poster_path
            .as_ref()
            .map(|path| format!("{}{}", image_base_url, path)),
    }
}

fn format_release_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
