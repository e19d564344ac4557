// src/services/migration_service.rs
use std::sync::Arc;

use crate::config::MigrationConfig;
use crate::error::{AppError, AppResult};
use crate::services::MovieService;

/// Startup batch ingestion of a fixed external-id list.
///
/// The list is walked in order and ingestion stops at the first
/// AlreadyFound: the list is kept in a stable, previously-successful
/// order, so an already-present movie means this and every later id
/// has converged. Repeated runs are a no-op once everything exists.
pub struct MigrationService {
    movie_service: Arc<MovieService>,
    config: MigrationConfig,
}

impl MigrationService {
    pub fn new(movie_service: Arc<MovieService>, config: MigrationConfig) -> Self {
        Self {
            movie_service,
            config,
        }
    }

    /// Returns how many movies were ingested this run. Ids that fail
    /// for any reason other than AlreadyFound are logged and skipped.
    pub async fn run(&self) -> AppResult<usize> {
        if !self.config.enabled {
            log::debug!("startup migration disabled");
            return Ok(0);
        }

        log::debug!(
            "running startup migration for {} movies",
            self.config.ids.len()
        );

        let mut migrated = 0;
        for id in &self.config.ids {
            match self.movie_service.create_from_open_movie(id).await {
                Ok(movie) => {
                    log::info!("migrated movie {}", movie.id);
                    migrated += 1;
                }
                Err(AppError::AlreadyFound(_)) => {
                    log::debug!("no migration needed");
                    break;
                }
                Err(err) => {
                    log::warn!("migration of {} failed: {}", id, err);
                }
            }
        }

        Ok(migrated)
    }
}
