use geo::{Coord, Geometry, LineString, MultiLineString, MultiPolygon, Polygon};
use serde::Deserialize;

/// A GeoJSON position: two or more ordinates.
pub type Position = Vec<f64>;

/// Line geometry as declared in a source file, before dimension reduction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum RawLineGeometry {
    LineString(Vec<Position>),
    MultiLineString(Vec<Vec<Position>>),
}

/// Polygon geometry as declared in a source file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum RawPolygonGeometry {
    Polygon(Vec<Vec<Position>>),
    MultiPolygon(Vec<Vec<Vec<Position>>>),
}

/// 2-D geometry of a linear asset. Keeps the single/multi distinction of the source.
#[derive(Debug, Clone, PartialEq)]
pub enum LaneGeometry {
    Line(LineString<f64>),
    MultiLine(MultiLineString<f64>),
}

impl LaneGeometry {
    /// Total number of vertices across all parts.
    pub fn vertex_count(&self) -> usize {
        match self {
            LaneGeometry::Line(line) => line.0.len(),
            LaneGeometry::MultiLine(lines) => lines.iter().map(|line| line.0.len()).sum(),
        }
    }

    /// All parts as a multi-line.
    pub fn into_multi_line(self) -> MultiLineString<f64> {
        match self {
            LaneGeometry::Line(line) => MultiLineString(vec![line]),
            LaneGeometry::MultiLine(lines) => lines,
        }
    }
}

impl From<LaneGeometry> for Geometry<f64> {
    fn from(geometry: LaneGeometry) -> Self {
        match geometry {
            LaneGeometry::Line(line) => Geometry::LineString(line),
            LaneGeometry::MultiLine(lines) => Geometry::MultiLineString(lines),
        }
    }
}

impl TryFrom<Geometry<f64>> for LaneGeometry {
    type Error = Geometry<f64>;

    fn try_from(geometry: Geometry<f64>) -> Result<Self, Self::Error> {
        match geometry {
            Geometry::LineString(line) => Ok(LaneGeometry::Line(line)),
            Geometry::MultiLineString(lines) => Ok(LaneGeometry::MultiLine(lines)),
            other => Err(other),
        }
    }
}

/// Reduce a position to its first two ordinates.
fn coord_2d(position: &[f64]) -> Result<Coord<f64>, String> {
    match position {
        [x, y, ..] => Ok(Coord { x: *x, y: *y }),
        _ => Err(format!("position has {} ordinate(s), expected at least 2", position.len())),
    }
}

fn line_2d(positions: &[Position]) -> Result<LineString<f64>, String> {
    positions.iter()
        .map(|position| coord_2d(position))
        .collect::<Result<Vec<_>, _>>()
        .map(LineString)
}

fn polygon_2d(rings: &[Vec<Position>]) -> Result<Polygon<f64>, String> {
    let (exterior, interiors) = rings.split_first()
        .ok_or_else(|| "polygon has no rings".to_string())?;
    Ok(Polygon::new(
        line_2d(exterior)?,
        interiors.iter().map(|ring| line_2d(ring)).collect::<Result<_, _>>()?,
    ))
}

/// Strip every ordinate past the second, keeping vertex order and part boundaries.
/// The declared kind decides whether a single line or a multi-line comes out.
pub fn normalize_line(raw: &RawLineGeometry) -> Result<LaneGeometry, String> {
    match raw {
        RawLineGeometry::LineString(positions) => line_2d(positions).map(LaneGeometry::Line),
        RawLineGeometry::MultiLineString(parts) => parts.iter()
            .map(|positions| line_2d(positions))
            .collect::<Result<Vec<_>, _>>()
            .map(|lines| LaneGeometry::MultiLine(MultiLineString(lines))),
    }
}

/// Same reduction for region polygons; a single polygon becomes a one-part multipolygon.
pub fn normalize_polygon(raw: &RawPolygonGeometry) -> Result<MultiPolygon<f64>, String> {
    match raw {
        RawPolygonGeometry::Polygon(rings) => Ok(MultiPolygon(vec![polygon_2d(rings)?])),
        RawPolygonGeometry::MultiPolygon(polygons) => polygons.iter()
            .map(|rings| polygon_2d(rings))
            .collect::<Result<Vec<_>, _>>()
            .map(MultiPolygon),
    }
}
