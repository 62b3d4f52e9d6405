use odpt_api::OdptError;
use thiserror::Error;

/// Errors returned by the high-level [`Odpt`](crate::Odpt) client
#[derive(Error, Debug)]
pub enum Error {
    /// Error from the underlying ODPT API client
    #[error(transparent)]
    Api(#[from] OdptError),

    /// The HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// A public endpoint was selected without a consumer key
    #[error("no consumer key configured (set ODPT_CONSUMER_KEY or pass --consumer-key)")]
    MissingConsumerKey,

    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The API answered, but the requested record does not exist
    #[error("Not found: {message}")]
    NotFound { message: String },
}

impl Error {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
}

/// Type alias for Results using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
