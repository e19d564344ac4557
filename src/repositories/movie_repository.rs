// src/repositories/movie_repository.rs

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
#[cfg(test)]
use mockall::automock;

use crate::domain::movie::{Movie, MovieId};
use crate::error::AppResult;

/// Movie persistence contract. Movies are saved once at ingestion and
/// read afterwards; there is no update or delete.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn get_by_id(&self, id: &str) -> AppResult<Option<Movie>>;

    /// Case-sensitive substring match on the title. The result is a lazy
    /// stream; the repository must not force the whole set into memory
    /// on behalf of the caller.
    async fn find_by_title(&self, title: &str) -> AppResult<BoxStream<'static, Movie>>;

    async fn save(&self, movie: Movie) -> AppResult<Movie>;
}

/// HashMap-backed adapter for bootstrap and tests.
pub struct InMemoryMovieRepository {
    movies: RwLock<HashMap<MovieId, Movie>>,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self {
            movies: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryMovieRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn get_by_id(&self, id: &str) -> AppResult<Option<Movie>> {
        let movies = self.movies.read().unwrap();
        Ok(movies.get(id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> AppResult<BoxStream<'static, Movie>> {
        // Snapshot under the lock; the map has no stable iteration order,
        // so sort by id to keep results deterministic.
        let mut matches: Vec<Movie> = {
            let movies = self.movies.read().unwrap();
            movies
                .values()
                .filter(|m| m.title.contains(title))
                .cloned()
                .collect()
        };
        matches.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(stream::iter(matches).boxed())
    }

    async fn save(&self, movie: Movie) -> AppResult<Movie> {
        let mut movies = self.movies.write().unwrap();
        movies.insert(movie.id.clone(), movie.clone());
        Ok(movie)
    }
}
