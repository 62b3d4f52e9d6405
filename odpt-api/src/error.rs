use thiserror::Error;

/// Errors that can occur when talking to an ODPT endpoint
///
/// # Examples
///
/// ```rust,no_run
/// # use odpt_api::{OdptClient, OdptError, Configuration};
/// # use odpt_api::query::StationQuery;
/// # use std::sync::Arc;
/// # async fn example() {
/// let client = OdptClient::new(Arc::new(Configuration::data_center("key")));
/// match client.stations(&StationQuery::default()).await {
///     Ok(stations) => println!("{} stations", stations.len()),
///     Err(OdptError::Api { status: 403, .. }) => eprintln!("consumer key rejected"),
///     Err(e) => eprintln!("{}", e),
/// }
/// # }
/// ```
#[derive(Error, Debug)]
pub enum OdptError {
    /// Connection failures, timeouts, TLS or protocol errors
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The body was not the JSON shape the record type expects
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Non-success HTTP status, with the body the server sent
    #[error("ODPT API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A configured base path or a `ug:region` link is not a valid URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A shape document could not be decoded
    #[error("GeoJSON error: {0}")]
    Geometry(#[from] odpt_geojson::DecodeError),

    /// The configured API generation does not serve this call
    #[error("{operation} is not available on the {version} API")]
    Unsupported {
        operation: &'static str,
        version: crate::client::ApiVersion,
    },
}
