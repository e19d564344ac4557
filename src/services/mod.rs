// src/services/mod.rs
//
// Services Module - the use-case layer
//
// This is the only place where referential-integrity checks and
// failure-handling policy live; repositories and clients below it are
// dumb, the HTTP surface above it is wiring.

pub mod migration_service;
pub mod movie_service;
pub mod rating_service;
pub mod schedule_service;

#[cfg(test)]
pub(crate) mod test_fixtures;


pub use migration_service::MigrationService;
pub use movie_service::MovieService;
pub use rating_service::RatingService;
pub use schedule_service::ScheduleService;
