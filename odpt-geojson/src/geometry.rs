use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::decode;
use crate::error::DecodeError;

/// A `[longitude, latitude]` pair.
///
/// Each coordinate keeps the JSON number it was decoded from, so `100`
/// encodes back as `100` rather than `100.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Number, pub Number);

impl Position {
    /// `None` when either coordinate is NaN or infinite
    pub fn new(lon: f64, lat: f64) -> Option<Self> {
        Some(Self(Number::from_f64(lon)?, Number::from_f64(lat)?))
    }

    pub fn lon(&self) -> f64 {
        self.0.as_f64().unwrap_or(f64::NAN)
    }

    pub fn lat(&self) -> f64 {
        self.1.as_f64().unwrap_or(f64::NAN)
    }

    /// `(longitude, latitude)` as floats
    pub fn to_f64(&self) -> (f64, f64) {
        (self.lon(), self.lat())
    }
}

/// The nine GeoJSON discriminator values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
    Feature,
    FeatureCollection,
}

impl GeometryType {
    pub const ALL: [GeometryType; 9] = [
        GeometryType::Point,
        GeometryType::MultiPoint,
        GeometryType::LineString,
        GeometryType::MultiLineString,
        GeometryType::Polygon,
        GeometryType::MultiPolygon,
        GeometryType::GeometryCollection,
        GeometryType::Feature,
        GeometryType::FeatureCollection,
    ];

    /// The literal written to the `type` member
    pub fn as_str(self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::LineString => "LineString",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
            GeometryType::Feature => "Feature",
            GeometryType::FeatureCollection => "FeatureCollection",
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryType {
    type Err = DecodeError;

    /// Exact, case-sensitive match against the nine discriminators
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeometryType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DecodeError::UnknownType(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub coordinates: Position,
}

impl Point {
    /// `None` when either coordinate is NaN or infinite
    pub fn new(lon: f64, lat: f64) -> Option<Self> {
        Position::new(lon, lat).map(|coordinates| Self { coordinates })
    }

    pub fn lon(&self) -> f64 {
        self.coordinates.lon()
    }

    pub fn lat(&self) -> f64 {
        self.coordinates.lat()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPoint {
    pub coordinates: Vec<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineString {
    pub coordinates: Vec<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiLineString {
    pub coordinates: Vec<Vec<Position>>,
}

/// A polygon as a list of linear rings. Ring closure is not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub coordinates: Vec<Vec<Position>>,
}

impl Polygon {
    /// The outer boundary, `None` for an empty polygon
    pub fn exterior(&self) -> Option<&[Position]> {
        self.coordinates.first().map(Vec::as_slice)
    }

    /// Every ring after the first
    pub fn holes(&self) -> &[Vec<Position>] {
        self.coordinates.get(1..).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPolygon {
    pub coordinates: Vec<Vec<Vec<Position>>>,
}

/// An ordered, read-only list of nested geometries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
}

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self { geometries }
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn into_geometries(self) -> Vec<Geometry> {
        self.geometries
    }
}

/// A geometry plus an open-ended property bag.
///
/// Properties are kept as untyped JSON because operators do not agree on a
/// property schema. `geometry` and `properties` are required members, so an
/// absent one is decoded as `None` and always encoded as an explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub geometry: Option<Box<Geometry>>,
    pub properties: Option<Map<String, Value>>,
}

impl Feature {
    pub fn new(geometry: Option<Geometry>, properties: Option<Map<String, Value>>) -> Self {
        Self {
            id: None,
            geometry: geometry.map(Box::new),
            properties,
        }
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref()?.get(key)
    }
}

/// An ordered, read-only list of features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(with = "tagged_features")]
    features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn into_features(self) -> Vec<Feature> {
        self.features
    }
}

/// Any GeoJSON object, discriminated by its `type` member.
///
/// The payload structs serialize as bare bodies; this enum is what writes
/// and reads the discriminator.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    MultiLineString(MultiLineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
    Feature(Feature),
    FeatureCollection(FeatureCollection),
}

impl Geometry {
    /// Decode an in-memory JSON value
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        match value {
            Value::Object(object) => decode::decode_object(object),
            _ => Err(DecodeError::NotAnObject),
        }
    }

    /// Decode raw bytes, e.g. an HTTP response body
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
            Geometry::Feature(_) => GeometryType::Feature,
            Geometry::FeatureCollection(_) => GeometryType::FeatureCollection,
        }
    }

    /// The discriminator string this value encodes to
    pub fn type_name(&self) -> &'static str {
        self.geometry_type().as_str()
    }
}

impl FromStr for Geometry {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_value(serde_json::from_str(s)?)
    }
}

/// Writes the discriminator ahead of the payload's own members.
#[derive(Serialize)]
struct Tagged<'a, T> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(flatten)]
    body: &'a T,
}

impl<'a, T> Tagged<'a, T> {
    fn new(kind: GeometryType, body: &'a T) -> Self {
        Self {
            kind: kind.as_str(),
            body,
        }
    }
}

impl Serialize for Geometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.geometry_type();
        match self {
            Geometry::Point(body) => Tagged::new(kind, body).serialize(serializer),
            Geometry::MultiPoint(body) => Tagged::new(kind, body).serialize(serializer),
            Geometry::LineString(body) => Tagged::new(kind, body).serialize(serializer),
            Geometry::MultiLineString(body) => Tagged::new(kind, body).serialize(serializer),
            Geometry::Polygon(body) => Tagged::new(kind, body).serialize(serializer),
            Geometry::MultiPolygon(body) => Tagged::new(kind, body).serialize(serializer),
            Geometry::GeometryCollection(body) => Tagged::new(kind, body).serialize(serializer),
            Geometry::Feature(body) => Tagged::new(kind, body).serialize(serializer),
            Geometry::FeatureCollection(body) => Tagged::new(kind, body).serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Geometry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        decode::decode_object(object).map_err(de::Error::custom)
    }
}

mod tagged_features {
    use serde::de::{self, Deserializer};
    use serde::ser::Serializer;
    use serde::Deserialize;

    use super::{Feature, Geometry, GeometryType, Tagged};
    use crate::error::DecodeError;

    pub(super) fn serialize<S: Serializer>(
        features: &[Feature],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            features
                .iter()
                .map(|feature| Tagged::new(GeometryType::Feature, feature)),
        )
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Feature>, D::Error> {
        Vec::<Geometry>::deserialize(deserializer)?
            .into_iter()
            .map(|member| match member {
                Geometry::Feature(feature) => Ok(feature),
                other => Err(de::Error::custom(DecodeError::FeatureExpected(
                    other.type_name().to_string(),
                ))),
            })
            .collect()
    }
}
