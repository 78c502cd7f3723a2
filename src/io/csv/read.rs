//! CSV reading operations.

use std::io::Cursor;

use geo::Point;
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReader, DataType}};
use tracing::warn;

use crate::{city::StationColumns, geom::StationReading, Error, Result};

/// Reads CSV bytes into a Polars DataFrame.
pub(crate) fn read_csv_bytes(bytes: &[u8], source_name: &str) -> Result<DataFrame> {
    CsvReader::new(Cursor::new(bytes))
        .finish()
        .map_err(|e| Error::malformed(source_name, format!("[io::csv::read] Failed to read CSV: {e}")))
}

/// Pull one column out as nullable floats.
fn float_column(df: &DataFrame, name: &str, source_name: &str) -> Result<Vec<Option<f64>>> {
    let column = df.column(name)
        .map_err(|_| Error::malformed(source_name, format!("missing column '{name}'")))?
        .cast(&DataType::Float64)
        .map_err(|e| Error::malformed(source_name, format!("column '{name}' is not numeric: {e}")))?;
    let values = column.f64()
        .map_err(|e| Error::malformed(source_name, format!("column '{name}' is not numeric: {e}")))?;
    Ok(values.into_iter().collect())
}

/// Read station readings, in file order.
///
/// Rows without coordinates are malformed. Rows without a finite NO2 value
/// carry no measurement and are skipped.
pub(crate) fn read_station_readings(df: &DataFrame, columns: &StationColumns, source_name: &str) -> Result<Vec<StationReading>> {
    let longitudes = float_column(df, columns.longitude, source_name)?;
    let latitudes = float_column(df, columns.latitude, source_name)?;
    let values = float_column(df, columns.no2, source_name)?;

    let mut readings = Vec::with_capacity(df.height());
    for (row, ((lon, lat), no2)) in longitudes.into_iter().zip(latitudes).zip(values).enumerate() {
        let (Some(lon), Some(lat)) = (lon, lat) else {
            return Err(Error::malformed(source_name, format!("row {row} has no coordinates")));
        };
        match no2 {
            Some(no2) if no2.is_finite() => readings.push(StationReading { location: Point::new(lon, lat), no2 }),
            _ => warn!(source = source_name, row, "skipping station without NO2 reading"),
        }
    }
    Ok(readings)
}
