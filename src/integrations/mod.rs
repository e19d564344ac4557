// src/integrations/mod.rs
//
// External Integrations Module

pub mod open_movie;

pub use open_movie::{OpenMovieClient, OpenMovieHttpClient, OpenMovieRecord, NA};

#[cfg(test)]
pub use open_movie::MockOpenMovieClient;
