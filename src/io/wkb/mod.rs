//! Well-Known Binary codec for geometry columns.
//!
//! Only the 2-D ISO type codes are supported; Z/M variants are rejected on read,
//! which keeps every stored geometry two-dimensional.

mod read;
mod write;

pub(crate) use read::*;
pub(crate) use write::*;

/// WKB byte order: little endian
const WKB_LE: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WkbKind {
    Point,
    LineString,
    Polygon,
    MultiLineString,
    MultiPolygon,
}

impl WkbKind {
    fn code(self) -> u32 {
        match self {
            WkbKind::Point => 1,
            WkbKind::LineString => 2,
            WkbKind::Polygon => 3,
            WkbKind::MultiLineString => 5,
            WkbKind::MultiPolygon => 6,
        }
    }

    fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(WkbKind::Point),
            2 => Some(WkbKind::LineString),
            3 => Some(WkbKind::Polygon),
            5 => Some(WkbKind::MultiLineString),
            6 => Some(WkbKind::MultiPolygon),
            _ => None,
        }
    }

    /// Upper-case name, as returned by `ST_GeometryType`.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            WkbKind::Point => "POINT",
            WkbKind::LineString => "LINESTRING",
            WkbKind::Polygon => "POLYGON",
            WkbKind::MultiLineString => "MULTILINESTRING",
            WkbKind::MultiPolygon => "MULTIPOLYGON",
        }
    }
}
