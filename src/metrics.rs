//! Per-city aggregates and the NO2 classification used for rendering.

use std::fmt;

use serde::Serialize;

use crate::{city::City, store::Store, Error, Result};

/// NO2 concentration (µg/m³) separating low from high pollution.
pub const NO2_THRESHOLD: f64 = 25.0;

/// Sum of lane lengths in meters. NotFound when the city has no lanes.
pub fn total_length(store: &Store, city: City) -> Result<f64> {
    store.sum_lane_length(city)?
        .ok_or_else(|| Error::not_found(format!("no bike lanes stored for {city}")))
}

/// Meters of bike lane per km² of city area.
pub fn length_per_area(store: &Store, city: City) -> Result<f64> {
    Ok(total_length(store, city)? / store.city_area(city)?)
}

/// Meters of bike lane per inhabitant.
pub fn length_per_capita(store: &Store, city: City) -> Result<f64> {
    Ok(total_length(store, city)? / store.city_population(city)?)
}

/// Sum of region NO2 values. Regions without a value are left out of the sum;
/// NotFound when no region of the city has one.
pub fn total_pollution(store: &Store, city: City) -> Result<f64> {
    store.sum_region_no2(city)?
        .ok_or_else(|| Error::not_found(format!("no NO2 values stored for {city}")))
}

/// Summed NO2 per km² of city area.
pub fn average_pollution_density(store: &Store, city: City) -> Result<f64> {
    Ok(total_pollution(store, city)? / store.city_area(city)?)
}

/// Rendering bucket of a region's NO2 value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PollutionClass {
    Low,
    High,
    NoData,
}

/// Classify a NO2 value against [`NO2_THRESHOLD`].
///
/// A value exactly at the threshold lands in `NoData`, as does a missing value.
pub fn classify(no2: Option<f64>) -> PollutionClass {
    match no2 {
        Some(v) if v < NO2_THRESHOLD => PollutionClass::Low,
        Some(v) if v > NO2_THRESHOLD => PollutionClass::High,
        _ => PollutionClass::NoData,
    }
}

impl PollutionClass {
    /// Fill colour of the class on the map.
    pub fn fill_color(self) -> Rgb {
        match self {
            PollutionClass::Low => Rgb { r: 32, g: 178, b: 170 },
            PollutionClass::High => Rgb { r: 255, g: 0, b: 0 },
            PollutionClass::NoData => Rgb { r: 128, g: 128, b: 128 },
        }
    }
}

/// Simple RGB color, serialized as `[r, g, b]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self { [c.r, c.g, c.b] }
}

impl fmt::Display for Rgb {
    /// Format as CSS: rgb(r,g,b)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}
