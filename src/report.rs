//! Read-side summary consumed by the map dashboard.

use serde::Serialize;
use serde_json::Value;

use crate::{
    city::City,
    io::geojson::city_to_geojson,
    metrics::{self, classify, PollutionClass, Rgb},
    store::Store,
    Result,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionReport {
    pub name: String,
    pub no2: Option<f64>,
    pub class: PollutionClass,
    pub fill_color: Rgb,
}

/// Per-city totals, ratios, map framing point and classified regions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityReport {
    pub city: String,
    /// Meters of bike lane.
    pub total_length: f64,
    pub length_per_km2: f64,
    pub length_per_capita: f64,
    /// Summed NO2 in µg/m³ over regions with a value.
    pub total_no2: f64,
    pub no2_per_km2: f64,
    /// `[lon, lat]`
    pub centroid: [f64; 2],
    pub regions: Vec<RegionReport>,
}

impl CityReport {
    /// Gather every derived value of `city`. Fails on the first missing piece.
    pub fn build(store: &Store, city: City) -> Result<Self> {
        let centroid = store.city_centroid(city)?;
        let regions = store.regions(city)?.into_iter()
            .map(|region| {
                let class = classify(region.no2);
                RegionReport { name: region.name, no2: region.no2, class, fill_color: class.fill_color() }
            })
            .collect();

        Ok(Self {
            city: city.to_string(),
            total_length: metrics::total_length(store, city)?,
            length_per_km2: metrics::length_per_area(store, city)?,
            length_per_capita: metrics::length_per_capita(store, city)?,
            total_no2: metrics::total_pollution(store, city)?,
            no2_per_km2: metrics::average_pollution_density(store, city)?,
            centroid: [centroid.x(), centroid.y()],
            regions,
        })
    }
}

/// The city's stored lanes and regions as a GeoJSON FeatureCollection.
pub fn export_geojson(store: &Store, city: City) -> Result<Value> {
    Ok(city_to_geojson(&store.linear_assets(city)?, &store.regions(city)?))
}
