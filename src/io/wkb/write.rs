//! WKB writing operations.

use geo::{Coord, Geometry, LineString, Polygon};

use super::{WkbKind, WKB_LE};
use crate::{Error, Result};

/// Little-endian 2-D WKB buffer.
struct WkbWriter {
    buf: Vec<u8>,
}

impl WkbWriter {
    fn header(&mut self, kind: WkbKind) {
        self.buf.push(WKB_LE);
        self.buf.extend_from_slice(&kind.code().to_le_bytes());
    }

    fn count(&mut self, n: usize) -> Result<()> {
        let n = u32::try_from(n)
            .map_err(|_| Error::Geometry(format!("[io::wkb::write] Element count {n} exceeds u32")))?;
        self.buf.extend_from_slice(&n.to_le_bytes());
        Ok(())
    }

    fn coord(&mut self, coord: &Coord<f64>) {
        self.buf.extend_from_slice(&coord.x.to_le_bytes());
        self.buf.extend_from_slice(&coord.y.to_le_bytes());
    }

    fn line(&mut self, line: &LineString<f64>) -> Result<()> {
        self.count(line.0.len())?;
        line.coords().for_each(|coord| self.coord(coord));
        Ok(())
    }

    fn polygon(&mut self, polygon: &Polygon<f64>) -> Result<()> {
        self.count(1 + polygon.interiors().len())?;
        self.line(polygon.exterior())?;
        for interior in polygon.interiors() {
            self.line(interior)?;
        }
        Ok(())
    }
}

/// Encode a geometry as 2-D little-endian WKB.
pub(crate) fn geometry_to_wkb(geometry: &Geometry<f64>) -> Result<Vec<u8>> {
    let mut w = WkbWriter { buf: Vec::new() };
    match geometry {
        Geometry::Point(point) => {
            w.header(WkbKind::Point);
            w.coord(&point.0);
        }
        Geometry::LineString(line) => {
            w.header(WkbKind::LineString);
            w.line(line)?;
        }
        Geometry::Polygon(polygon) => {
            w.header(WkbKind::Polygon);
            w.polygon(polygon)?;
        }
        Geometry::MultiLineString(lines) => {
            w.header(WkbKind::MultiLineString);
            w.count(lines.0.len())?;
            for line in lines {
                w.header(WkbKind::LineString);
                w.line(line)?;
            }
        }
        Geometry::MultiPolygon(polygons) => {
            w.header(WkbKind::MultiPolygon);
            w.count(polygons.0.len())?;
            for polygon in polygons {
                w.header(WkbKind::Polygon);
                w.polygon(polygon)?;
            }
        }
        other => return Err(Error::Geometry(format!("[io::wkb::write] Unsupported geometry: {other:?}"))),
    }
    Ok(w.buf)
}
