// src/integrations/open_movie/client.rs
//
// Open movie catalog integration
//
// - Fetches raw provider records over HTTP and normalizes them into
//   domain Movies (the normalization rules live here, on the record)
// - Returns DTOs mapped to domain values; never touches the store
// - Retry/timeout policy beyond the client timeout is the caller's concern

use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::{header, Client};
use serde::Deserialize;

use crate::config::CatalogClientConfig;
use crate::domain::movie::{Critic, Movie};
use crate::error::{AppError, AppResult};

/// Placeholder the provider (and therefore the domain) uses for absent
/// descriptive text. Downstream code relies on every field being
/// non-empty text, never null.
pub const NA: &str = "N/A";

/// Contract for fetching a movie record from the external catalog.
/// The id is the catalog's own identifier, so every locally stored
/// movie id is interpretable by the catalog.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait OpenMovieClient: Send + Sync {
    async fn get_by_id(&self, id: &str) -> AppResult<Movie>;
}

/// Raw provider record. Every descriptive field is optional on the
/// wire; normalization happens in [`OpenMovieRecord::into_movie`].
#[derive(Debug, Clone, Deserialize)]
pub struct OpenMovieRecord {
    #[serde(rename = "imdbID")]
    pub id: Option<String>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Rated")]
    pub rated: Option<String>,
    #[serde(rename = "Released")]
    pub release_date: Option<String>,
    #[serde(rename = "Runtime")]
    pub runtime: Option<String>,
    #[serde(rename = "Genre")]
    pub genres: Option<String>,
    #[serde(rename = "Director")]
    pub director: Option<String>,
    #[serde(rename = "Writer")]
    pub writers: Option<String>,
    #[serde(rename = "Actors")]
    pub actors: Option<String>,
    #[serde(rename = "Plot")]
    pub plot: Option<String>,
    #[serde(rename = "Language")]
    pub languages: Option<String>,
    #[serde(rename = "Awards")]
    pub award: Option<String>,
    #[serde(rename = "Poster")]
    pub poster_url: Option<String>,
    #[serde(rename = "Ratings")]
    pub critics: Option<Vec<OpenMovieCriticRecord>>,
    /// Aggregate vote count; deliberately not carried into the domain.
    #[serde(rename = "imdbVotes")]
    pub votes: Option<String>,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    #[serde(rename = "DVD")]
    pub dvd_date: Option<String>,
    #[serde(rename = "BoxOffice")]
    pub box_office: Option<String>,
    #[serde(rename = "Production")]
    pub production: Option<String>,
    #[serde(rename = "Website")]
    pub website_url: Option<String>,
    /// The provider's own success flag, the string "True" on success.
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenMovieCriticRecord {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl OpenMovieRecord {
    /// Normalize the raw record into a domain Movie.
    ///
    /// Rules: the provider's response flag gates success; absent text
    /// fields become `"N/A"`; comma-separated fields are split and
    /// trimmed (absent → empty vec, never `["N/A"]`); an unparseable
    /// year degrades to 0 instead of failing the ingestion; critic
    /// entries keep source and value only.
    pub fn into_movie(self) -> AppResult<Movie> {
        if self.response != "True" {
            return Err(AppError::not_found(
                self.error
                    .unwrap_or_else(|| "Unknown open movie API error".to_string()),
            ));
        }

        Ok(Movie {
            id: or_na(self.id),
            title: or_na(self.title),
            year: self
                .year
                .and_then(|y| y.trim().parse().ok())
                .unwrap_or(0),
            rated: or_na(self.rated),
            release_date: or_na(self.release_date),
            runtime: or_na(self.runtime),
            genres: split_list(self.genres),
            director: or_na(self.director),
            writers: split_list(self.writers),
            actors: split_list(self.actors),
            plot: or_na(self.plot),
            languages: split_list(self.languages),
            award: or_na(self.award),
            poster_url: or_na(self.poster_url),
            critics: self
                .critics
                .unwrap_or_default()
                .into_iter()
                .map(|c| Critic::new(c.source, c.value))
                .collect(),
            kind: or_na(self.kind),
            dvd_date: or_na(self.dvd_date),
            box_office: or_na(self.box_office),
            production: or_na(self.production),
            website_url: or_na(self.website_url),
        })
    }
}

fn or_na(field: Option<String>) -> String {
    field.unwrap_or_else(|| NA.to_string())
}

fn split_list(field: Option<String>) -> Vec<String> {
    field
        .map(|s| s.split(',').map(|part| part.trim().to_string()).collect())
        .unwrap_or_default()
}

/// HTTP implementation of the catalog contract.
pub struct OpenMovieHttpClient {
    http_client: Client,
    base_url: String,
    api_key: String,
}

impl OpenMovieHttpClient {
    pub fn new(config: &CatalogClientConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::server_with("failed to build HTTP client", e))?;

        Ok(Self {
            http_client,
            base_url: config.url.clone(),
            api_key: config.key.clone(),
        })
    }
}

#[async_trait]
impl OpenMovieClient for OpenMovieHttpClient {
    async fn get_by_id(&self, id: &str) -> AppResult<Movie> {
        log::info!("getting open movie record for id {}", id);

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("i", id)])
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::server(format!(
                "open movie API returned status {}",
                response.status()
            )));
        }

        let record: OpenMovieRecord = response.json().await?;

        let movie = record.into_movie()?;
        log::debug!("got movie {}", movie.id);
        Ok(movie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_from(json: &str) -> OpenMovieRecord {
        serde_json::from_str(json).expect("record should deserialize")
    }

    #[test]
    fn normalizes_a_full_record() {
        let record = record_from(
            r#"{
                "imdbID": "tt0133093",
                "Title": "The Matrix",
                "Year": "1999",
                "Rated": "R",
                "Released": "31 Mar 1999",
                "Runtime": "136 min",
                "Genre": "Action, Sci-Fi",
                "Director": "Lana Wachowski, Lilly Wachowski",
                "Writer": "Lilly Wachowski, Lana Wachowski",
                "Actors": "Keanu Reeves, Laurence Fishburne",
                "Plot": "A computer hacker learns the truth.",
                "Language": "English",
                "Awards": "Won 4 Oscars.",
                "Poster": "https://example.com/matrix.jpg",
                "Ratings": [
                    {"Source": "Internet Movie Database", "Value": "8.7/10"},
                    {"Source": "Rotten Tomatoes", "Value": "88%"}
                ],
                "imdbVotes": "1,800,000",
                "Type": "movie",
                "DVD": "21 Sep 1999",
                "BoxOffice": "$172,076,928",
                "Production": "Warner Bros.",
                "Website": "N/A",
                "Response": "True"
            }"#,
        );

        let movie = record.into_movie().expect("should normalize");

        assert_eq!(movie.id, "tt0133093");
        assert_eq!(movie.year, 1999);
        assert_eq!(movie.genres, vec!["Action", "Sci-Fi"]);
        assert_eq!(
            movie.actors,
            vec!["Keanu Reeves", "Laurence Fishburne"]
        );
        assert_eq!(movie.critics.len(), 2);
        assert_eq!(movie.critics[0].source, "Internet Movie Database");
        assert_eq!(movie.critics[0].value, "8.7/10");
        // The provider's vote count never reaches the domain critic.
        assert_eq!(movie.critics[0].votes, None);
    }

    #[test]
    fn absent_text_fields_become_na() {
        let record = record_from(r#"{"imdbID": "tt1", "Response": "True"}"#);

        let movie = record.into_movie().expect("should normalize");

        assert_eq!(movie.title, NA);
        assert_eq!(movie.director, NA);
        assert_eq!(movie.plot, NA);
        assert_eq!(movie.website_url, NA);
    }

    #[test]
    fn absent_list_fields_become_empty_not_na() {
        let record = record_from(r#"{"imdbID": "tt1", "Response": "True"}"#);

        let movie = record.into_movie().expect("should normalize");

        assert!(movie.genres.is_empty());
        assert!(movie.writers.is_empty());
        assert!(movie.actors.is_empty());
        assert!(movie.languages.is_empty());
        assert!(movie.critics.is_empty());
    }

    #[test]
    fn list_fields_are_split_and_trimmed() {
        let record = record_from(
            r#"{"imdbID": "tt1", "Genre": "Action, Thriller", "Response": "True"}"#,
        );

        let movie = record.into_movie().expect("should normalize");

        assert_eq!(movie.genres, vec!["Action", "Thriller"]);
    }

    #[test]
    fn unparseable_year_defaults_to_zero() {
        let record = record_from(
            r#"{"imdbID": "tt1", "Year": "1999-2003", "Response": "True"}"#,
        );

        let movie = record.into_movie().expect("should normalize");

        assert_eq!(movie.year, 0);
    }

    #[test]
    fn provider_failure_maps_to_not_found_with_its_message() {
        let record = record_from(
            r#"{"Response": "False", "Error": "Incorrect IMDb ID."}"#,
        );

        let err = record.into_movie().expect_err("should fail");

        match err {
            AppError::NotFound(message) => assert_eq!(message, "Incorrect IMDb ID."),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn provider_failure_without_message_gets_the_fallback() {
        let record = record_from(r#"{"Response": "False"}"#);

        let err = record.into_movie().expect_err("should fail");

        match err {
            AppError::NotFound(message) => {
                assert_eq!(message, "Unknown open movie API error")
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
