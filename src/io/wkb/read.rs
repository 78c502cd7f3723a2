//! WKB reading operations.

use std::io::{Cursor, Read};

use geo::{Coord, Geometry, LineString, MultiLineString, MultiPolygon, Point, Polygon};

use super::{WkbKind, WKB_LE};
use crate::{Error, Result};

/// Cursor over a WKB buffer that tracks the byte order of the current geometry.
struct WkbReader<'a> {
    cursor: Cursor<&'a [u8]>,
    is_le: bool,
}

impl<'a> WkbReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { cursor: Cursor::new(bytes), is_le: true }
    }

    fn bytes<const N: usize>(&mut self, what: &str) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.cursor.read_exact(&mut buf)
            .map_err(|_| Error::Geometry(format!("[io::wkb::read] Failed to read {what}")))?;
        Ok(buf)
    }

    fn u32(&mut self, what: &str) -> Result<u32> {
        let bytes = self.bytes::<4>(what)?;
        Ok(if self.is_le { u32::from_le_bytes(bytes) } else { u32::from_be_bytes(bytes) })
    }

    fn f64(&mut self, what: &str) -> Result<f64> {
        let bytes = self.bytes::<8>(what)?;
        Ok(if self.is_le { f64::from_le_bytes(bytes) } else { f64::from_be_bytes(bytes) })
    }

    /// Read byte order and geometry type.
    fn header(&mut self) -> Result<WkbKind> {
        let [byte_order] = self.bytes::<1>("byte order")?;
        self.is_le = byte_order == WKB_LE;
        let code = self.u32("geometry type")?;
        WkbKind::from_code(code)
            .ok_or_else(|| Error::Geometry(format!("[io::wkb::read] Unsupported geometry type {code}")))
    }

    fn expect_kind(&mut self, expected: WkbKind) -> Result<()> {
        let kind = self.header()?;
        if kind != expected {
            return Err(Error::Geometry(format!("[io::wkb::read] Expected {}, got {}", expected.as_str(), kind.as_str())));
        }
        Ok(())
    }

    fn coord(&mut self) -> Result<Coord<f64>> {
        Ok(Coord { x: self.f64("x coordinate")?, y: self.f64("y coordinate")? })
    }

    fn line(&mut self) -> Result<LineString<f64>> {
        let len = self.u32("point count")?;
        (0..len).map(|_| self.coord()).collect::<Result<Vec<_>>>().map(LineString)
    }

    fn polygon(&mut self) -> Result<Polygon<f64>> {
        let num_rings = self.u32("ring count")?;
        if num_rings == 0 {
            return Err(Error::Geometry("[io::wkb::read] Polygon must have at least one ring".into()));
        }
        let exterior = self.line()?;
        let interiors = (1..num_rings).map(|_| self.line()).collect::<Result<Vec<_>>>()?;
        Ok(Polygon::new(exterior, interiors))
    }

    fn geometry(&mut self) -> Result<Geometry<f64>> {
        Ok(match self.header()? {
            WkbKind::Point => Geometry::Point(Point(self.coord()?)),
            WkbKind::LineString => Geometry::LineString(self.line()?),
            WkbKind::Polygon => Geometry::Polygon(self.polygon()?),
            WkbKind::MultiLineString => {
                let count = self.u32("part count")?;
                let lines = (0..count)
                    .map(|_| { self.expect_kind(WkbKind::LineString)?; self.line() })
                    .collect::<Result<Vec<_>>>()?;
                Geometry::MultiLineString(MultiLineString(lines))
            }
            WkbKind::MultiPolygon => {
                let count = self.u32("part count")?;
                let polygons = (0..count)
                    .map(|_| { self.expect_kind(WkbKind::Polygon)?; self.polygon() })
                    .collect::<Result<Vec<_>>>()?;
                Geometry::MultiPolygon(MultiPolygon(polygons))
            }
        })
    }
}

/// Decode a 2-D WKB geometry. Trailing bytes are rejected.
pub(crate) fn geometry_from_wkb(bytes: &[u8]) -> Result<Geometry<f64>> {
    let mut reader = WkbReader::new(bytes);
    let geometry = reader.geometry()?;
    if reader.cursor.position() as usize != bytes.len() {
        return Err(Error::Geometry("[io::wkb::read] Trailing bytes after geometry".into()));
    }
    Ok(geometry)
}

/// Read only the top-level geometry type.
pub(crate) fn wkb_kind(bytes: &[u8]) -> Result<WkbKind> {
    WkbReader::new(bytes).header()
}
