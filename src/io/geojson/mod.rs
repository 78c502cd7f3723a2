//! GeoJSON reading (source feature collections) and writing (city export).

mod read;
mod write;

pub(crate) use read::*;
pub(crate) use write::*;
