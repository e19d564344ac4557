// src/repositories/rating_repository.rs

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use crate::domain::rating::{Rating, RatingToSave};
use crate::error::AppResult;

/// Rating persistence contract, structurally the same as schedules.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RatingRepository: Send + Sync {
    async fn get_by_id(&self, id: &str) -> AppResult<Option<Rating>>;

    async fn find_by_movie_id(&self, movie_id: &str) -> AppResult<BoxStream<'static, Rating>>;

    async fn create(&self, rating: RatingToSave) -> AppResult<Rating>;

    async fn update(&self, rating: Rating) -> AppResult<Rating>;

    /// Deleting an absent id is not an error.
    async fn delete_by_id(&self, id: &str) -> AppResult<()>;
}

/// HashMap-backed adapter for bootstrap and tests.
pub struct InMemoryRatingRepository {
    ratings: RwLock<HashMap<String, Rating>>,
}

impl InMemoryRatingRepository {
    pub fn new() -> Self {
        Self {
            ratings: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryRatingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RatingRepository for InMemoryRatingRepository {
    async fn get_by_id(&self, id: &str) -> AppResult<Option<Rating>> {
        let ratings = self.ratings.read().unwrap();
        Ok(ratings.get(id).cloned())
    }

    async fn find_by_movie_id(&self, movie_id: &str) -> AppResult<BoxStream<'static, Rating>> {
        let mut matches: Vec<Rating> = {
            let ratings = self.ratings.read().unwrap();
            ratings
                .values()
                .filter(|r| r.movie_id == movie_id)
                .cloned()
                .collect()
        };
        matches.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(stream::iter(matches).boxed())
    }

    async fn create(&self, rating: RatingToSave) -> AppResult<Rating> {
        let rating = rating.with_id(Uuid::new_v4().to_string());
        let mut ratings = self.ratings.write().unwrap();
        ratings.insert(rating.id.clone(), rating.clone());
        Ok(rating)
    }

    async fn update(&self, rating: Rating) -> AppResult<Rating> {
        let mut ratings = self.ratings.write().unwrap();
        ratings.insert(rating.id.clone(), rating.clone());
        Ok(rating)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        let mut ratings = self.ratings.write().unwrap();
        ratings.remove(id);
        Ok(())
    }
}
