mod entity;

pub use entity::{Critic, Movie, MovieId};
