//! Typed decoding of the GeoJSON documents ODPT serves for railway,
//! station and bus route shapes.
//!
//! Every GeoJSON object carries a `"type"` discriminator. [`Geometry`] is a
//! closed sum type over the nine shapes the format defines; decoding peeks
//! the discriminator and dispatches to the matching payload, recursing for
//! `GeometryCollection`, `Feature` and `FeatureCollection`.
//!
//! ```rust
//! use odpt_geojson::Geometry;
//!
//! let point: Geometry = r#"{"type":"Point","coordinates":[139.77,35.69]}"#.parse()?;
//! assert_eq!(point.type_name(), "Point");
//! # Ok::<(), odpt_geojson::DecodeError>(())
//! ```

mod decode;
pub mod error;
pub mod geometry;

pub use decode::{decode_many, from_slice_many, from_str_many};
pub use error::DecodeError;
pub use geometry::{
    Feature, FeatureCollection, Geometry, GeometryCollection, GeometryType, LineString,
    MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, Position,
};
