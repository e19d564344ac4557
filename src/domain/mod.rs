// src/domain/mod.rs
//
// Domain Root - entities for the three aggregates
//
// All other modules import from `crate::domain::*`

pub mod movie;
pub mod rating;
pub mod schedule;

pub use movie::{Critic, Movie, MovieId};
pub use rating::{Rating, RatingToSave};
pub use schedule::{Price, Schedule, ScheduleToSave};
