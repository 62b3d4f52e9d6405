use serde::de::{DeserializeOwned, Error as _};
use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::geometry::{Feature, FeatureCollection, Geometry, GeometryCollection, GeometryType};

/// Read the discriminator without touching the rest of the object.
pub(crate) fn peek_type(object: &Map<String, Value>) -> Result<GeometryType, DecodeError> {
    match object.get("type") {
        Some(Value::String(tag)) => tag.parse(),
        _ => Err(DecodeError::MissingType),
    }
}

pub(crate) fn decode_object(mut object: Map<String, Value>) -> Result<Geometry, DecodeError> {
    let kind = peek_type(&object)?;

    // Nested objects go back through the decoder so their errors surface as-is.
    let geometry = match kind {
        GeometryType::GeometryCollection => {
            let geometries = members(kind, &mut object, "geometries")?
                .into_iter()
                .map(Geometry::from_value)
                .collect::<Result<_, _>>()?;
            Geometry::GeometryCollection(GeometryCollection::new(geometries))
        }
        GeometryType::FeatureCollection => {
            let features = members(kind, &mut object, "features")?
                .into_iter()
                .map(|member| match Geometry::from_value(member)? {
                    Geometry::Feature(feature) => Ok(feature),
                    other => Err(DecodeError::FeatureExpected(other.type_name().to_string())),
                })
                .collect::<Result<_, _>>()?;
            Geometry::FeatureCollection(FeatureCollection::new(features))
        }
        GeometryType::Feature => {
            let geometry = match object.remove("geometry") {
                None | Some(Value::Null) => None,
                Some(value) => Some(Geometry::from_value(value)?),
            };
            let mut feature: Feature = payload(kind, Value::Object(object))?;
            feature.geometry = geometry.map(Box::new);
            Geometry::Feature(feature)
        }
        GeometryType::Point => Geometry::Point(payload(kind, Value::Object(object))?),
        GeometryType::MultiPoint => Geometry::MultiPoint(payload(kind, Value::Object(object))?),
        GeometryType::LineString => Geometry::LineString(payload(kind, Value::Object(object))?),
        GeometryType::MultiLineString => {
            Geometry::MultiLineString(payload(kind, Value::Object(object))?)
        }
        GeometryType::Polygon => Geometry::Polygon(payload(kind, Value::Object(object))?),
        GeometryType::MultiPolygon => {
            Geometry::MultiPolygon(payload(kind, Value::Object(object))?)
        }
    };

    Ok(geometry)
}

// The discriminator stays in the object; payload structs ignore unknown members.
fn payload<T: DeserializeOwned>(kind: GeometryType, body: Value) -> Result<T, DecodeError> {
    serde_json::from_value(body).map_err(|source| DecodeError::Payload { kind, source })
}

fn members(
    kind: GeometryType,
    object: &mut Map<String, Value>,
    key: &'static str,
) -> Result<Vec<Value>, DecodeError> {
    match object.remove(key) {
        Some(value) => payload(kind, value),
        None => Err(DecodeError::Payload {
            kind,
            source: serde_json::Error::missing_field(key),
        }),
    }
}

/// Decode a batch response: either a JSON array of GeoJSON objects or a
/// single object, which yields a one-element vector.
pub fn decode_many(value: Value) -> Result<Vec<Geometry>, DecodeError> {
    match value {
        Value::Array(items) => items.into_iter().map(Geometry::from_value).collect(),
        Value::Object(object) => Ok(vec![decode_object(object)?]),
        _ => Err(DecodeError::NotAnObject),
    }
}

/// [`decode_many`] over JSON text
pub fn from_str_many(text: &str) -> Result<Vec<Geometry>, DecodeError> {
    decode_many(serde_json::from_str(text)?)
}

/// [`decode_many`] over raw bytes, e.g. an HTTP response body
pub fn from_slice_many(bytes: &[u8]) -> Result<Vec<Geometry>, DecodeError> {
    decode_many(serde_json::from_slice(bytes)?)
}
