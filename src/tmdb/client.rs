use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::TmdbConfig;
use crate::tmdb::types::{Credits, DiscoverResponse, Genre, GenreListResponse, MovieDetails};

#[derive(Debug, thiserror::Error)]
pub enum TmdbError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Client for the TMDB v3 JSON API. The API key and language are appended
/// to every request; an empty key is allowed (callers check `has_api_key`
/// and skip requests instead).
pub struct TmdbClient {
    http: Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
        })
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, TmdbError> {
        let url = self.url(path);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
            ])
            .query(query)
            .send()
            .await
            .map_err(|e| TmdbError::Transport {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TmdbError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| TmdbError::Decode { url, source: e })
    }

    /// One page of `discover/movie` results with the given extra query
    /// parameters (page, vote count floor, date bounds, ...).
    pub async fn discover_movies(
        &self,
        query: &[(&str, String)],
    ) -> Result<DiscoverResponse, TmdbError> {
        self.get_json("/discover/movie", query).await
    }

    pub async fn movie_details(&self, movie_id: i64) -> Result<MovieDetails, TmdbError> {
        self.get_json(&format!("/movie/{}", movie_id), &[]).await
    }

    pub async fn movie_credits(&self, movie_id: i64) -> Result<Credits, TmdbError> {
        self.get_json(&format!("/movie/{}/credits", movie_id), &[])
            .await
    }

    pub async fn movie_genres(&self) -> Result<Vec<Genre>, TmdbError> {
        let response: GenreListResponse = self.get_json("/genre/movie/list", &[]).await?;
        Ok(response.genres)
    }
}
