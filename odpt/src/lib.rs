//! High-level ODPT client and the `odpt` command line tool.
//!
//! [`Odpt`] builds on the typed [`odpt_api`] client and answers the common
//! rider questions (line stations, service status, nearby stations,
//! departures). Configuration comes from [`OdptConfig`], usually via
//! [`OdptConfig::from_env`].

pub use odpt_api as api;
pub use odpt_api::geojson;

pub mod client;
pub mod colors;
pub mod config;
pub mod error;

pub use client::{Departure, NearbyStation, Odpt};
pub use colors::{ColorHelper, ColorMode};
pub use config::{Endpoint, OdptConfig};
pub use error::{Error, Result};
