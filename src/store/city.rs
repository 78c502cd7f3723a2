use geo::{Centroid, MultiLineString, Point};
use rusqlite::{params, types::FromSql, OptionalExtension};
use tracing::info;

use super::Store;
use crate::{city::{City, CityRecord}, Error, Result};

impl Store {
    /// Insert a city row and return its ID.
    pub fn insert_city(&mut self, record: &CityRecord) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO City (Name, Area, Population) VALUES (?1, ?2, ?3)",
                params![record.city.name(), record.area_km2, record.population],
            )
            .map_err(|source| Error::WriteFailure {
                operation: "insert_city",
                target: record.city.to_string(),
                source,
            })?;
        let id = self.conn.last_insert_rowid();
        info!(city = %record.city, id, "city added");
        Ok(id)
    }

    /// One column of the city's row. `Name` is unique, so at most one row matches.
    fn city_value<T: FromSql>(&self, column: &'static str, city: City) -> Result<T> {
        let sql = format!("SELECT {column} FROM City WHERE Name = ?1");
        self.conn.prepare_cached(&sql)?
            .query_row([city.name()], |row| row.get(0))
            .optional()?
            .ok_or_else(|| Error::not_found(format!("no city by the name of {city} in the store ({column})")))
    }

    pub fn city_id(&self, city: City) -> Result<i64> {
        self.city_value("ID", city)
    }

    /// Area in km².
    pub fn city_area(&self, city: City) -> Result<f64> {
        self.city_value("Area", city)
    }

    pub fn city_population(&self, city: City) -> Result<f64> {
        self.city_value("Population", city)
    }

    /// Centroid of all of the city's bike lanes taken together, as (lon, lat).
    /// Used to frame the initial map view.
    pub fn city_centroid(&self, city: City) -> Result<Point<f64>> {
        let lines = MultiLineString(
            self.linear_assets(city)?.into_iter()
                .flat_map(|lane| lane.geometry.into_multi_line())
                .collect()
        );
        lines.centroid()
            .ok_or_else(|| Error::not_found(format!("could not compute the centroid of {city}")))
    }
}
