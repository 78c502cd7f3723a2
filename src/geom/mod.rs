//! Geometry normalization and the station-to-region spatial join.

mod attribution;
mod normalize;

pub use attribution::{attribute_stations, StationReading};
pub use normalize::{normalize_line, normalize_polygon, LaneGeometry, Position, RawLineGeometry, RawPolygonGeometry};
