// src/lib.rs
// MovieHub - movie catalog core
//
// Architecture:
// - Use-case layer (`services`) owns all invariants and failure policy
// - Repositories and the catalog client are dumb collaborators behind
//   traits; the HTTP surface on top is the embedding application's job
// - Every operation returns AppResult; no panics, no exceptions

pub mod config;
pub mod domain;
pub mod error;
pub mod integrations;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - curated re-exports
// ============================================================================

pub use config::{CatalogClientConfig, MigrationConfig};

pub use domain::{
    Critic,
    Movie,
    MovieId,
    Price,
    Rating,
    RatingToSave,
    Schedule,
    ScheduleToSave,
};

pub use error::{AppError, AppResult};

pub use integrations::{OpenMovieClient, OpenMovieHttpClient, NA};

pub use repositories::{
    InMemoryMovieRepository,
    InMemoryRatingRepository,
    InMemoryScheduleRepository,
    MovieRepository,
    RatingRepository,
    ScheduleRepository,
};

pub use services::{MigrationService, MovieService, RatingService, ScheduleService};
