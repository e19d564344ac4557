mod client;

pub use client::{OpenMovieClient, OpenMovieCriticRecord, OpenMovieHttpClient, OpenMovieRecord, NA};

#[cfg(test)]
pub use client::MockOpenMovieClient;
