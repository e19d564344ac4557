// src/error/types.rs
use serde::ser::SerializeStruct;
use serde::Serialize;
use thiserror::Error;

/// Underlying failure from a collaborator, kept for diagnostics.
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Closed set of domain errors. Every use-case returns one of these
/// instead of raising; callers match exhaustively.
#[derive(Debug, Error)]
pub enum AppError {
    /// A referenced entity does not exist, or the external catalog
    /// reported no match.
    #[error("{0}")]
    NotFound(String),

    /// Re-ingestion of a movie that already exists locally.
    #[error("{0}")]
    AlreadyFound(String),

    /// Caller-supplied input was invalid at a boundary. Reserved for
    /// request-shape validation; not raised by the use-cases themselves.
    #[error("{message}")]
    Client {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    /// Unexpected failure in a collaborator (store or external client).
    #[error("{message}")]
    Server {
        message: String,
        #[source]
        source: Option<Cause>,
    },
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn already_found(message: impl Into<String>) -> Self {
        AppError::AlreadyFound(message.into())
    }

    pub fn client(message: impl Into<String>) -> Self {
        AppError::Client {
            message: message.into(),
            source: None,
        }
    }

    pub fn server(message: impl Into<String>) -> Self {
        AppError::Server {
            message: message.into(),
            source: None,
        }
    }

    pub fn server_with(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        AppError::Server {
            message: message.into(),
            source: Some(cause.into()),
        }
    }

    /// Discriminant tag used in the serialized payload.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NotFoundError",
            AppError::AlreadyFound(_) => "AlreadyFoundError",
            AppError::Client { .. } => "ClientError",
            AppError::Server { .. } => "ServerError",
        }
    }
}

/// Serialized as a discriminated record; the cause stays internal.
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("AppError", 2)?;
        state.serialize_field("error", self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::server_with(format!("http transport error: {}", err), err)
    }
}

pub type AppResult<T> = Result<T, AppError>;
