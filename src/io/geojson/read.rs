//! GeoJSON reading operations.

use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

#[derive(Debug, Deserialize)]
struct FeatureCollection<G> {
    features: Vec<Feature<G>>,
}

/// A feature whose geometry is parsed as `G` and whose properties stay untyped,
/// since property names differ per source. Missing and null members both read as `None`.
#[derive(Debug, Deserialize)]
pub(crate) struct Feature<G> {
    geometry: Option<G>,
    properties: Option<Map<String, Value>>,
}

/// Parse a FeatureCollection from bytes.
pub(crate) fn read_features<G: DeserializeOwned>(bytes: &[u8], source_name: &str) -> Result<Vec<Feature<G>>> {
    serde_json::from_slice::<FeatureCollection<G>>(bytes)
        .map(|collection| collection.features)
        .map_err(|e| Error::malformed(source_name, format!("[io::geojson::read] Failed to parse feature collection: {e}")))
}

impl<G> Feature<G> {
    pub(crate) fn geometry(&self, index: usize, source_name: &str) -> Result<&G> {
        self.geometry.as_ref()
            .ok_or_else(|| Error::malformed(source_name, format!("feature {index} has no geometry")))
    }

    fn property(&self, key: &str, index: usize, source_name: &str) -> Result<&Value> {
        self.properties.as_ref()
            .and_then(|properties| properties.get(key))
            .ok_or_else(|| Error::malformed(source_name, format!("feature {index} has no '{key}' property")))
    }

    pub(crate) fn string_property(&self, key: &str, index: usize, source_name: &str) -> Result<String> {
        match self.property(key, index, source_name)? {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(Error::malformed(source_name, format!("feature {index}: '{key}' is not a string ({other})"))),
        }
    }

    /// A numeric property that may be explicitly null. Numeric strings are accepted.
    pub(crate) fn nullable_number_property(&self, key: &str, index: usize, source_name: &str) -> Result<Option<f64>> {
        let value = self.property(key, index, source_name)?;
        let number = match value {
            Value::Null => return Ok(None),
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        number.filter(|n| n.is_finite())
            .map(Some)
            .ok_or_else(|| Error::malformed(source_name, format!("feature {index}: '{key}' is not a number ({value})")))
    }

    pub(crate) fn number_property(&self, key: &str, index: usize, source_name: &str) -> Result<f64> {
        self.nullable_number_property(key, index, source_name)?
            .ok_or_else(|| Error::malformed(source_name, format!("feature {index}: '{key}' is null")))
    }
}
