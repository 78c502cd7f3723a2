use geo::{Geometry, MultiPolygon};
use rusqlite::params;
use tracing::info;

use super::Store;
use crate::{
    city::City,
    io::wkb::{geometry_from_wkb, geometry_to_wkb},
    types::Region,
    Error, Result,
};

impl Store {
    /// Insert a batch of pollution regions for `city_id` in one transaction.
    pub fn insert_regions(&mut self, city_id: i64, regions: &[Region]) -> Result<usize> {
        let fail = |source| Error::WriteFailure {
            operation: "insert_regions",
            target: format!("city id {city_id}"),
            source,
        };

        let tx = self.conn.transaction().map_err(fail)?;
        {
            let mut stmt = tx
                .prepare_cached("INSERT INTO Pollution (CityID, Name, Geom, NO2) VALUES (?1, ?2, ?3, ?4)")
                .map_err(fail)?;
            for region in regions {
                let wkb = geometry_to_wkb(&Geometry::MultiPolygon(region.geometry.clone()))?;
                stmt.execute(params![city_id, region.name, wkb, region.no2]).map_err(fail)?;
            }
        }
        tx.commit().map_err(fail)?;

        info!(city_id, regions = regions.len(), "pollution regions added");
        Ok(regions.len())
    }

    /// Every region of the city, in insertion order. NotFound when there are none.
    pub fn regions(&self, city: City) -> Result<Vec<Region>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT p.Name, p.Geom, p.NO2 FROM Pollution p
             JOIN City c ON p.CityID = c.ID
             WHERE c.Name = ?1 ORDER BY p.ID",
        )?;
        let regions = stmt
            .query_map([city.name()], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, Vec<u8>>(1)?, row.get::<_, Option<f64>>(2)?))
            })?
            .map(|row| {
                let (name, wkb, no2) = row?;
                let geometry = match geometry_from_wkb(&wkb)? {
                    Geometry::MultiPolygon(mp) => mp,
                    Geometry::Polygon(p) => MultiPolygon(vec![p]),
                    other => return Err(Error::Geometry(format!("expected a polygon geometry, got {other:?}"))),
                };
                Ok(Region { name, geometry, no2 })
            })
            .collect::<Result<Vec<_>>>()?;

        if regions.is_empty() {
            return Err(Error::not_found(format!("could not find any pollution data for {city}")));
        }
        Ok(regions)
    }

    /// `SUM(NO2)` over the city's regions. SQL `SUM` skips nulls; `None` when
    /// no region of the city has a value.
    pub fn sum_region_no2(&self, city: City) -> Result<Option<f64>> {
        let sum = self.conn
            .prepare_cached(
                "SELECT SUM(p.NO2) FROM Pollution p
                 JOIN City c ON p.CityID = c.ID
                 WHERE c.Name = ?1",
            )?
            .query_row([city.name()], |row| row.get(0))?;
        Ok(sum)
    }
}
