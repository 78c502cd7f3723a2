use geo::MultiPolygon;
use tracing::debug;

use crate::{
    city::StationColumns,
    geom::{attribute_stations, normalize_polygon, RawPolygonGeometry, StationReading},
    io::{csv::{read_csv_bytes, read_station_readings}, geojson::{read_features, Feature}},
    types::Region,
    Error, Result,
};

/// A named region polygon without a pollution value.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionBoundary {
    pub name: String,
    pub geometry: MultiPolygon<f64>,
}

fn boundary(feature: &Feature<RawPolygonGeometry>, i: usize, name_field: &str, source_name: &str) -> Result<RegionBoundary> {
    let name = feature.string_property(name_field, i, source_name)?;
    let geometry = normalize_polygon(feature.geometry(i, source_name)?)
        .map_err(|reason| Error::malformed(source_name, format!("feature {i}: {reason}")))?;
    Ok(RegionBoundary { name, geometry })
}

/// Parse region boundary polygons, each named by `name_field`.
pub fn load_region_boundaries(bytes: &[u8], name_field: &str, source_name: &str) -> Result<Vec<RegionBoundary>> {
    let features = read_features::<RawPolygonGeometry>(bytes, source_name)?;
    let boundaries = features.iter().enumerate()
        .map(|(i, feature)| boundary(feature, i, name_field, source_name))
        .collect::<Result<Vec<_>>>()?;

    debug!(source = source_name, regions = boundaries.len(), "loaded region boundaries");
    Ok(boundaries)
}

/// Parse regions that already declare their NO2 value under `no2_field`.
/// The property must be present; an explicit null means no measurement.
pub fn load_declared_regions(bytes: &[u8], name_field: &str, no2_field: &str, source_name: &str) -> Result<Vec<Region>> {
    let features = read_features::<RawPolygonGeometry>(bytes, source_name)?;
    let regions = features.iter().enumerate()
        .map(|(i, feature)| {
            let RegionBoundary { name, geometry } = boundary(feature, i, name_field, source_name)?;
            let no2 = feature.nullable_number_property(no2_field, i, source_name)?;
            Ok(Region { name, geometry, no2 })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(source = source_name, regions = regions.len(), "loaded regions with declared NO2");
    Ok(regions)
}

/// Parse a station readings table, keeping file order.
pub fn load_station_readings(bytes: &[u8], columns: &StationColumns, source_name: &str) -> Result<Vec<StationReading>> {
    let df = read_csv_bytes(bytes, source_name)?;
    let readings = read_station_readings(&df, columns, source_name)?;

    debug!(source = source_name, stations = readings.len(), "loaded station readings");
    Ok(readings)
}

/// Join station readings onto boundaries. See [`attribute_stations`] for the
/// tie-break when a region holds several stations.
pub fn attribute_regions(boundaries: Vec<RegionBoundary>, readings: &[StationReading]) -> Vec<Region> {
    let geometries: Vec<MultiPolygon<f64>> = boundaries.iter().map(|b| b.geometry.clone()).collect();
    let values = attribute_stations(&geometries, readings);

    boundaries.into_iter().zip(values)
        .map(|(RegionBoundary { name, geometry }, no2)| Region { name, geometry, no2 })
        .collect()
}
