use chrono::{NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::movie::MovieId;

/// A screening slot for a movie. `movie_id` must reference an existing
/// Movie at creation and at update time; the check is re-run on every
/// mutation, not just the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Store-assigned identifier.
    pub id: String,
    pub movie_id: MovieId,
    pub day_of_week: Weekday,
    pub start_time: NaiveTime,
    pub ticket_price: Price,
}

/// Creation-time shape of a Schedule: the store assigns the identity,
/// so callers cannot supply one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleToSave {
    pub movie_id: MovieId,
    pub day_of_week: Weekday,
    pub start_time: NaiveTime,
    pub ticket_price: Price,
}

impl ScheduleToSave {
    pub fn with_id(self, id: impl Into<String>) -> Schedule {
        Schedule {
            id: id.into(),
            movie_id: self.movie_id,
            day_of_week: self.day_of_week,
            start_time: self.start_time,
            ticket_price: self.ticket_price,
        }
    }
}

/// Money. Exact decimal amount, never floating point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub amount: Decimal,
    /// ISO 4217 currency code, e.g. "USD".
    pub currency: String,
}

impl Price {
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}
