use geo::Geometry;
use rusqlite::params;
use tracing::info;

use super::Store;
use crate::{
    city::City,
    geom::LaneGeometry,
    io::wkb::{geometry_from_wkb, geometry_to_wkb},
    types::LinearAsset,
    Error, Result,
};

impl Store {
    /// Insert a batch of bike lanes for `city_id` in one transaction.
    pub fn insert_linear_assets(&mut self, city_id: i64, lanes: &[LinearAsset]) -> Result<usize> {
        let fail = |source| Error::WriteFailure {
            operation: "insert_linear_assets",
            target: format!("city id {city_id}"),
            source,
        };

        let tx = self.conn.transaction().map_err(fail)?;
        {
            let mut stmt = tx
                .prepare_cached("INSERT INTO BikeLane (CityID, Geom, Length) VALUES (?1, ?2, ?3)")
                .map_err(fail)?;
            for lane in lanes {
                let wkb = geometry_to_wkb(&Geometry::from(lane.geometry.clone()))?;
                stmt.execute(params![city_id, wkb, lane.length]).map_err(fail)?;
            }
        }
        tx.commit().map_err(fail)?;

        info!(city_id, lanes = lanes.len(), "bike lanes added");
        Ok(lanes.len())
    }

    /// Every bike lane of the city, in insertion order. NotFound when there are none.
    pub fn linear_assets(&self, city: City) -> Result<Vec<LinearAsset>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT b.Geom, b.Length FROM BikeLane b
             JOIN City c ON b.CityID = c.ID
             WHERE c.Name = ?1 ORDER BY b.ID",
        )?;
        let lanes = stmt
            .query_map([city.name()], |row| Ok((row.get::<_, Vec<u8>>(0)?, row.get::<_, f64>(1)?)))?
            .map(|row| {
                let (wkb, length) = row?;
                let geometry = LaneGeometry::try_from(geometry_from_wkb(&wkb)?)
                    .map_err(|other| Error::Geometry(format!("expected a line geometry, got {other:?}")))?;
                Ok(LinearAsset { geometry, length })
            })
            .collect::<Result<Vec<_>>>()?;

        if lanes.is_empty() {
            return Err(Error::not_found(format!("could not find any bike lane data for {city}")));
        }
        Ok(lanes)
    }

    /// `SUM(Length)` over the city's bike lanes; `None` when the city has none.
    pub fn sum_lane_length(&self, city: City) -> Result<Option<f64>> {
        let sum = self.conn
            .prepare_cached(
                "SELECT SUM(b.Length) FROM BikeLane b
                 JOIN City c ON b.CityID = c.ID
                 WHERE c.Name = ?1",
            )?
            .query_row([city.name()], |row| row.get(0))?;
        Ok(sum)
    }
}
