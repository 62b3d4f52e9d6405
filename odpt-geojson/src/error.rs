use thiserror::Error;

use crate::geometry::GeometryType;

/// Errors produced while decoding a GeoJSON document
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The input was not valid JSON
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The value handed to the decoder was not a JSON object
    #[error("expected a GeoJSON object")]
    NotAnObject,

    /// The `type` member was absent or not a string
    #[error("missing geometry type")]
    MissingType,

    /// The `type` member named a shape outside the nine GeoJSON types
    #[error("unknown geometry type: {0}")]
    UnknownType(String),

    /// The payload did not match the shape implied by the discriminator
    #[error("malformed {kind} payload: {source}")]
    Payload {
        kind: GeometryType,
        #[source]
        source: serde_json::Error,
    },

    /// A `FeatureCollection` member was some other GeoJSON type
    #[error("expected Feature, found {0}")]
    FeatureExpected(String),
}
