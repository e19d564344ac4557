mod entity;

pub use entity::{Rating, RatingToSave};
