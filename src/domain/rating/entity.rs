use serde::{Deserialize, Serialize};

use crate::domain::movie::MovieId;

/// A user's score for a movie. Same referential rule as Schedule:
/// `movie_id` is re-checked against the store on every mutation.
///
/// `value` is not range-checked here; that belongs at the request
/// boundary if anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Store-assigned identifier.
    pub id: String,
    pub movie_id: MovieId,
    pub value: i32,
    pub user_id: String,
}

/// Creation-time shape of a Rating, without the store-assigned identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingToSave {
    pub movie_id: MovieId,
    pub value: i32,
    pub user_id: String,
}

impl RatingToSave {
    pub fn with_id(self, id: impl Into<String>) -> Rating {
        Rating {
            id: id.into(),
            movie_id: self.movie_id,
            value: self.value,
            user_id: self.user_id,
        }
    }
}
