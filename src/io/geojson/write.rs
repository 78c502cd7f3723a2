//! GeoJSON writing operations.

use geo::{LineString, MultiPolygon};
use serde_json::{json, Value};

use crate::{geom::LaneGeometry, metrics::classify, types::{LinearAsset, Region}};

fn line_coords(line: &LineString<f64>) -> Vec<[f64; 2]> {
    line.coords().map(|c| [c.x, c.y]).collect()
}

/// Helper to convert a lane geometry to a serde_json::Value representing GeoJSON Geometry.
fn lane_geometry_to_geojson(geometry: &LaneGeometry) -> Value {
    match geometry {
        LaneGeometry::Line(line) => json!({
            "type": "LineString",
            "coordinates": line_coords(line),
        }),
        LaneGeometry::MultiLine(lines) => json!({
            "type": "MultiLineString",
            "coordinates": lines.iter().map(line_coords).collect::<Vec<_>>(),
        }),
    }
}

/// Helper to convert a MultiPolygon to a serde_json::Value representing GeoJSON Geometry.
fn multipolygon_to_geojson(mp: &MultiPolygon<f64>) -> Value {
    let polygons: Vec<Vec<Vec<[f64; 2]>>> = mp.iter()
        .map(|polygon| std::iter::once(polygon.exterior())
            .chain(polygon.interiors())
            .map(line_coords)
            .collect())
        .collect();
    json!({
        "type": "MultiPolygon",
        "coordinates": polygons,
    })
}

/// Export a city's lanes and regions as one GeoJSON FeatureCollection.
/// Region features carry their NO2 class and fill colour for rendering.
pub(crate) fn city_to_geojson(lanes: &[LinearAsset], regions: &[Region]) -> Value {
    let lane_features = lanes.iter().map(|lane| json!({
        "type": "Feature",
        "geometry": lane_geometry_to_geojson(&lane.geometry),
        "properties": {
            "kind": "lane",
            "length": lane.length,
        },
    }));

    let region_features = regions.iter().map(|region| {
        let class = classify(region.no2);
        json!({
            "type": "Feature",
            "id": region.name,
            "geometry": multipolygon_to_geojson(&region.geometry),
            "properties": {
                "kind": "region",
                "name": region.name,
                "no2": region.no2,
                "class": class,
                "fill_color": class.fill_color(),
            },
        })
    });

    json!({
        "type": "FeatureCollection",
        "features": lane_features.chain(region_features).collect::<Vec<_>>(),
    })
}
