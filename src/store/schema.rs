use tracing::info;

use super::Store;
use crate::Result;

const CREATE_SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS City (
        ID INTEGER PRIMARY KEY,
        Name TEXT NOT NULL UNIQUE,
        Area REAL NOT NULL CHECK (Area > 0),
        Population REAL NOT NULL CHECK (Population > 0)
    );

    CREATE TABLE IF NOT EXISTS BikeLane (
        ID INTEGER PRIMARY KEY,
        CityID INTEGER NOT NULL REFERENCES City(ID),
        Geom BLOB NOT NULL CHECK (ST_GeometryType(Geom) IN ('LINESTRING', 'MULTILINESTRING')),
        Length REAL NOT NULL
    );

    CREATE TABLE IF NOT EXISTS Pollution (
        ID INTEGER PRIMARY KEY,
        CityID INTEGER NOT NULL REFERENCES City(ID),
        Name TEXT NOT NULL,
        Geom BLOB NOT NULL CHECK (ST_GeometryType(Geom) IN ('POLYGON', 'MULTIPOLYGON')),
        NO2 REAL,
        UNIQUE (CityID, Name)
    );

    CREATE INDEX IF NOT EXISTS idx_bikelane_city ON BikeLane(CityID);
    CREATE INDEX IF NOT EXISTS idx_pollution_city ON Pollution(CityID);
"#;

// Children first, so foreign keys never dangle.
const DROP_SCHEMA: &str = r#"
    DROP TABLE IF EXISTS BikeLane;
    DROP TABLE IF EXISTS Pollution;
    DROP TABLE IF EXISTS City;
"#;

impl Store {
    /// Create all tables and indexes that do not exist yet.
    pub fn create_schema(&self) -> Result<()> {
        self.conn.execute_batch(CREATE_SCHEMA)?;
        info!("all tables created");
        Ok(())
    }

    /// Drop all tables, if present.
    pub fn drop_schema(&self) -> Result<()> {
        self.conn.execute_batch(DROP_SCHEMA)?;
        info!("all tables dropped");
        Ok(())
    }
}
