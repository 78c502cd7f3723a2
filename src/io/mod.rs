//! IO module for format-specific reading and writing operations.
//!
//! # Format Modules
//!
//! - `geojson` - Feature collections for lanes and regions, and the city export
//! - `csv` - Station readings
//! - `wkb` - Well-Known Binary for the store's geometry columns

pub(crate) mod csv;
pub(crate) mod geojson;
pub(crate) mod wkb;
