// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO cross-repository calls
//
// The traits are the contract the use-case layer depends on; the
// in-memory adapters exist for bootstrap and tests. A document-store
// adapter lives outside this crate.

pub mod movie_repository;
pub mod rating_repository;
pub mod schedule_repository;

pub use movie_repository::{InMemoryMovieRepository, MovieRepository};
pub use rating_repository::{InMemoryRatingRepository, RatingRepository};
pub use schedule_repository::{InMemoryScheduleRepository, ScheduleRepository};

#[cfg(test)]
pub use movie_repository::MockMovieRepository;
#[cfg(test)]
pub use rating_repository::MockRatingRepository;
#[cfg(test)]
pub use schedule_repository::MockScheduleRepository;
