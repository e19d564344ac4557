use serde::{Deserialize, Serialize};

/// The external catalog's identifier, reused as the domain primary key.
/// There is no separate surrogate key.
pub type MovieId = String;

/// Root entity of the movie aggregate. Created exactly once via ingestion
/// from the external catalog and read-only afterwards; schedules and
/// ratings reference it, never the other way around.
///
/// Descriptive fields are always-present text: absence in the provider
/// record is normalized to the `"N/A"` placeholder at ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    pub rated: String,
    pub release_date: String,
    pub runtime: String,
    pub genres: Vec<String>,
    pub director: String,
    pub writers: Vec<String>,
    pub actors: Vec<String>,
    pub plot: String,
    pub languages: Vec<String>,
    pub award: String,
    pub poster_url: String,
    /// Refreshed from the external catalog on read, never written back.
    pub critics: Vec<Critic>,
    /// The catalog's media kind ("movie", "series", ...). Named `kind`
    /// because `type` is reserved; serialized as `type`.
    #[serde(rename = "type")]
    pub kind: String,
    pub dvd_date: String,
    pub box_office: String,
    pub production: String,
    pub website_url: String,
}

/// A rating-agency score, embedded in a Movie. No identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Critic {
    pub source: String,
    /// Score exactly as the provider formats it ("8.5/10", "94%", ...).
    pub value: String,
    pub votes: Option<String>,
}

impl Critic {
    pub fn new(source: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            value: value.into(),
            votes: None,
        }
    }
}
