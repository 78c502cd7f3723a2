use tracing::debug;

use crate::{geom::{normalize_line, RawLineGeometry}, io::geojson::read_features, types::LinearAsset, Error, Result};

/// Parse a bike lane collection, normalizing every geometry to 2-D.
///
/// Every feature must carry a geometry and a numeric `length_field`; the first
/// one that does not fails the whole collection.
pub fn load_linear_assets(bytes: &[u8], length_field: &str, source_name: &str) -> Result<Vec<LinearAsset>> {
    let features = read_features::<RawLineGeometry>(bytes, source_name)?;
    let lanes = features.iter().enumerate()
        .map(|(i, feature)| {
            let length = feature.number_property(length_field, i, source_name)?;
            let geometry = normalize_line(feature.geometry(i, source_name)?)
                .map_err(|reason| Error::malformed(source_name, format!("feature {i}: {reason}")))?;
            Ok(LinearAsset { geometry, length })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(source = source_name, lanes = lanes.len(), "loaded bike lanes");
    Ok(lanes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::LaneGeometry;

    #[test]
    fn mixed_line_kinds_are_loaded() {
        let json = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {"Shape_Leng": 100.0},
             "geometry": {"type": "LineString", "coordinates": [[-0.1, 51.5, 12.0], [-0.2, 51.6, 13.0]]}},
            {"type": "Feature", "properties": {"Shape_Leng": 200.0},
             "geometry": {"type": "MultiLineString", "coordinates": [[[-0.1, 51.5], [-0.2, 51.6]], [[-0.3, 51.7], [-0.4, 51.8]]]}}
        ]}"#;
        let lanes = load_linear_assets(json.as_bytes(), "Shape_Leng", "lanes").unwrap();
        assert_eq!(lanes.len(), 2);
        assert_eq!(lanes[0].length, 100.0);
        assert!(matches!(lanes[0].geometry, LaneGeometry::Line(_)));
        assert!(matches!(lanes[1].geometry, LaneGeometry::MultiLine(_)));
        assert_eq!(lanes[1].geometry.vertex_count(), 4);
    }

    #[test]
    fn missing_length_fails_the_collection() {
        let json = r#"{"features": [
            {"properties": {"LAENGE": 10}, "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}},
            {"properties": {"OTHER": 10}, "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}}
        ]}"#;
        let err = load_linear_assets(json.as_bytes(), "LAENGE", "lanes").unwrap_err();
        assert!(matches!(err, Error::MalformedSource { ref reason, .. } if reason.contains("feature 1")));
    }
}
