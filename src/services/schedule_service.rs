// src/services/schedule_service.rs
use std::sync::Arc;

use futures::stream::BoxStream;

use crate::domain::schedule::{Schedule, ScheduleToSave};
use crate::error::{AppError, AppResult};
use crate::repositories::{MovieRepository, ScheduleRepository};

/// Schedule use-cases. Every mutation re-checks that the referenced
/// movie exists; the list path deliberately does not (callers get an
/// empty stream for an unknown movie).
pub struct ScheduleService {
    movie_repo: Arc<dyn MovieRepository>,
    schedule_repo: Arc<dyn ScheduleRepository>,
}

impl ScheduleService {
    pub fn new(
        movie_repo: Arc<dyn MovieRepository>,
        schedule_repo: Arc<dyn ScheduleRepository>,
    ) -> Self {
        Self {
            movie_repo,
            schedule_repo,
        }
    }

    pub async fn create_schedule(&self, schedule: ScheduleToSave) -> AppResult<Schedule> {
        self.require_movie(&schedule.movie_id).await?;
        self.schedule_repo.create(schedule).await
    }

    /// Movie existence is checked before schedule existence so the
    /// caller always sees the movie error first. The schedule check runs
    /// even though the store update would also fail on a missing id.
    pub async fn update_schedule(&self, schedule: Schedule) -> AppResult<Schedule> {
        self.require_movie(&schedule.movie_id).await?;

        if self.schedule_repo.get_by_id(&schedule.id).await?.is_none() {
            return Err(AppError::not_found(format!(
                "Schedule with id {} not found",
                schedule.id
            )));
        }

        self.schedule_repo.update(schedule).await
    }

    pub async fn get_schedule(&self, schedule_id: &str) -> AppResult<Schedule> {
        self.schedule_repo
            .get_by_id(schedule_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Schedule with id {} not found", schedule_id))
            })
    }

    pub async fn find_by_movie_id(
        &self,
        movie_id: &str,
    ) -> AppResult<BoxStream<'static, Schedule>> {
        self.schedule_repo.find_by_movie_id(movie_id).await
    }

    /// Unconditional; deleting an absent schedule is not an error.
    pub async fn delete_by_id(&self, schedule_id: &str) -> AppResult<()> {
        self.schedule_repo.delete_by_id(schedule_id).await
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
