// src/services/movie_service.rs
use std::sync::Arc;

use futures::stream::BoxStream;

use crate::domain::movie::{Critic, Movie};
use crate::error::{AppError, AppResult};
use crate::integrations::OpenMovieClient;
use crate::repositories::MovieRepository;

/// Movie use-cases: ingestion from the external catalog plus the read
/// paths. Movies are never created "bare" through this service; the
/// external record is the only source.
pub struct MovieService {
    movie_repo: Arc<dyn MovieRepository>,
    open_movie_client: Arc<dyn OpenMovieClient>,
}

impl MovieService {
    pub fn new(
        movie_repo: Arc<dyn MovieRepository>,
        open_movie_client: Arc<dyn OpenMovieClient>,
    ) -> Self {
        Self {
            movie_repo,
            open_movie_client,
        }
    }

    /// Ingest the movie with this external id. Fails with AlreadyFound
    /// when it exists locally; a failing external fetch propagates
    /// unchanged and nothing is written.
    pub async fn create_from_open_movie(&self, id: &str) -> AppResult<Movie> {
        if self.movie_repo.get_by_id(id).await?.is_some() {
            return Err(AppError::already_found(format!(
                "Movie with id {} already exists",
                id
            )));
        }

        let movie = self.open_movie_client.get_by_id(id).await?;
        self.movie_repo.save(movie).await
    }

    pub async fn get_movie(&self, id: &str) -> AppResult<Movie> {
        self.movie_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Movie with id {} not found", id)))
    }

    /// The stored movie with its critics replaced by a fresh fetch from
    /// the catalog. The refreshed critics are only in the returned
    /// value; the store is untouched. A failing re-fetch discards the
    /// local read rather than fall back to stale critics.
    pub async fn get_movie_with_critics(&self, id: &str) -> AppResult<Movie> {
        let movie = self.get_movie(id).await?;
        let critics = self.find_critics(id).await?;
        Ok(Movie { critics, ..movie })
    }

    /// Critics straight from the catalog; the local store is not
    /// consulted.
    pub async fn find_critics(&self, id: &str) -> AppResult<Vec<Critic>> {
        let movie = self.open_movie_client.get_by_id(id).await?;
        Ok(movie.critics)
    }

    pub async fn find_by_title(&self, title: &str) -> AppResult<BoxStream<'static, Movie>> {
        self.movie_repo.find_by_title(title).await
    }
}
