use geo::MultiPolygon;

use crate::geom::LaneGeometry;

/// One bike lane: a 2-D line geometry and the length declared by the source, in meters.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearAsset {
    pub geometry: LaneGeometry,
    pub length: f64,
}

/// One administrative region and its NO2 value in µg/m³, if any was measured.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub name: String,
    pub geometry: MultiPolygon<f64>,
    pub no2: Option<f64>,
}
