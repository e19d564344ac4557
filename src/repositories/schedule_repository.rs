// src/repositories/schedule_repository.rs

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use crate::domain::schedule::{Schedule, ScheduleToSave};
use crate::error::AppResult;

/// Schedule persistence contract. `create` takes the to-save shape and
/// the store assigns the identity.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn get_by_id(&self, id: &str) -> AppResult<Option<Schedule>>;

    async fn find_by_movie_id(&self, movie_id: &str) -> AppResult<BoxStream<'static, Schedule>>;

    async fn create(&self, schedule: ScheduleToSave) -> AppResult<Schedule>;

    async fn update(&self, schedule: Schedule) -> AppResult<Schedule>;

    /// Deleting an absent id is not an error.
    async fn delete_by_id(&self, id: &str) -> AppResult<()>;
}

/// HashMap-backed adapter for bootstrap and tests.
pub struct InMemoryScheduleRepository {
    schedules: RwLock<HashMap<String, Schedule>>,
}

impl InMemoryScheduleRepository {
    pub fn new() -> Self {
        Self {
            schedules: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryScheduleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScheduleRepository for InMemoryScheduleRepository {
    async fn get_by_id(&self, id: &str) -> AppResult<Option<Schedule>> {
        let schedules = self.schedules.read().unwrap();
        Ok(schedules.get(id).cloned())
    }

    async fn find_by_movie_id(&self, movie_id: &str) -> AppResult<BoxStream<'static, Schedule>> {
        let mut matches: Vec<Schedule> = {
            let schedules = self.schedules.read().unwrap();
            schedules
                .values()
                .filter(|s| s.movie_id == movie_id)
                .cloned()
                .collect()
        };
        matches.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(stream::iter(matches).boxed())
    }

    async fn create(&self, schedule: ScheduleToSave) -> AppResult<Schedule> {
        let schedule = schedule.with_id(Uuid::new_v4().to_string());
        let mut schedules = self.schedules.write().unwrap();
        schedules.insert(schedule.id.clone(), schedule.clone());
        Ok(schedule)
    }

    async fn update(&self, schedule: Schedule) -> AppResult<Schedule> {
        let mut schedules = self.schedules.write().unwrap();
        schedules.insert(schedule.id.clone(), schedule.clone());
        Ok(schedule)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        let mut schedules = self.schedules.write().unwrap();
        schedules.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_fixtures::schedule_to_save;

    #[tokio::test]
    async fn create_assigns_a_fresh_id() {
        let repo = InMemoryScheduleRepository::new();

        let first = repo.create(schedule_to_save()).await.unwrap();
        let second = repo.create(schedule_to_save()).await.unwrap();

        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);
        assert_eq!(repo.get_by_id(&first.id).await.unwrap(), Some(first));
    }

    #[tokio::test]
    async fn deleting_an_absent_id_is_not_an_error() {
        let repo = InMemoryScheduleRepository::new();
        assert!(repo.delete_by_id("missing").await.is_ok());
    }
}
