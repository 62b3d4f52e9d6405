//! Typed client for the Open Data Platform for Transportation (ODPT).
//!
//! - [`query`]: filter arguments mapped onto query parameters
//! - [`models`]: train, bus and airplane records
//! - [`ids`]: typed `owl:sameAs` identifiers
//! - [`OdptClient`]: one GET per call against a v2 or v4 endpoint

pub mod client;
pub mod error;
pub mod ids;
pub mod models;
pub mod query;

pub use odpt_geojson as geojson;

// Re-export the client and configuration for easy access
pub use client::{ApiVersion, Configuration, OdptClient};
pub use error::OdptError;
