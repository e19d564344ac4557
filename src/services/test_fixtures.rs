// src/services/test_fixtures.rs
//
// Shared entity fixtures for the service tests.

use chrono::{NaiveTime, Weekday};
use rust_decimal::Decimal;

use crate::domain::movie::{Critic, Movie};
use crate::domain::rating::{Rating, RatingToSave};
use crate::domain::schedule::{Price, Schedule, ScheduleToSave};

pub fn movie() -> Movie {
    movie_with_id("tt0000001")
}

pub fn movie_with_id(id: &str) -> Movie {
    Movie {
        id: id.to_string(),
        title: "the movie".to_string(),
        year: 2021,
        rated: "PG-13".to_string(),
        release_date: "22 Jun 2001".to_string(),
        runtime: "99 min".to_string(),
        genres: vec!["action".to_string()],
        director: "he".to_string(),
        writers: vec!["me".to_string()],
        actors: vec!["you".to_string()],
        plot: "terror".to_string(),
        languages: vec!["spanish".to_string()],
        award: "3 wins".to_string(),
        poster_url: "www.themovie.com/poster.png".to_string(),
        critics: vec![Critic::new("Metacritic", "3/100")],
        kind: "movie".to_string(),
        dvd_date: "22 Jun 2003".to_string(),
        box_office: "$123".to_string(),
        production: "universal".to_string(),
        website_url: "www.themovie.com".to_string(),
    }
}

pub fn schedule_to_save() -> ScheduleToSave {
    ScheduleToSave {
        movie_id: movie().id,
        day_of_week: Weekday::Fri,
        start_time: NaiveTime::from_hms_opt(14, 20, 0).unwrap(),
        ticket_price: Price::new(Decimal::new(400, 0), "USD"),
    }
}

pub fn schedule() -> Schedule {
    schedule_to_save().with_id("30")
}

pub fn rating_to_save() -> RatingToSave {
    RatingToSave {
        movie_id: movie().id,
        value: 7,
        user_id: "1000".to_string(),
    }
}

pub fn rating() -> Rating {
    rating_to_save().with_id("55")
}
