// src/services/rating_service.rs
use std::sync::Arc;

use futures::stream::BoxStream;

use crate::domain::rating::{Rating, RatingToSave};
use crate::error::{AppError, AppResult};
use crate::repositories::{MovieRepository, RatingRepository};

/// Rating use-cases, structurally the twin of [`ScheduleService`]:
/// mutations are gated on movie existence, the list path is not, and
/// delete is unconditional. The rating value itself is not range
/// checked here.
///
/// [`ScheduleService`]: crate::services::ScheduleService
pub struct RatingService {
    movie_repo: Arc<dyn MovieRepository>,
    rating_repo: Arc<dyn RatingRepository>,
}

impl RatingService {
    pub fn new(
        movie_repo: Arc<dyn MovieRepository>,
        rating_repo: Arc<dyn RatingRepository>,
    ) -> Self {
        Self {
            movie_repo,
            rating_repo,
        }
    }

    pub async fn create_rating(&self, rating: RatingToSave) -> AppResult<Rating> {
        self.require_movie(&rating.movie_id).await?;
        self.rating_repo.create(rating).await
    }

    /// Movie check first, then rating check, both unconditional; the
    /// order decides which error message the caller sees.
    pub async fn update_rating(&self, rating: Rating) -> AppResult<Rating> {
        self.require_movie(&rating.movie_id).await?;

        if self.rating_repo.get_by_id(&rating.id).await?.is_none() {
            return Err(AppError::not_found(format!(
                "Rating with id {} not found",
                rating.id
            )));
        }

        self.rating_repo.update(rating).await
    }

    pub async fn get_rating(&self, rating_id: &str) -> AppResult<Rating> {
        self.rating_repo
            .get_by_id(rating_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Rating with id {} not found", rating_id)))
    }

    pub async fn find_by_movie_id(&self, movie_id: &str) -> AppResult<BoxStream<'static, Rating>> {
        self.rating_repo.find_by_movie_id(movie_id).await
    }

    /// Unconditional; deleting an absent rating is not an error.
    pub async fn delete_by_id(&self, rating_id: &str) -> AppResult<()> {
        self.rating_repo.delete_by_id(rating_id).await
    }

    async fn require_movie(&self, movie_id: &str) -> AppResult<()> {
        match self.movie_repo.get_by_id(movie_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found(format!(
                "Movie with id {} not found",
                movie_id
            ))),
        }
    }
}
