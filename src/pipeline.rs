//! Full rebuild of the store from the source files.

use std::path::Path;

use tracing::info;

use crate::{
    city::City,
    load::{load_city, CitySources},
    store::Store,
    Error, Result,
};

/// Drop and recreate the schema, then ingest every supported city in turn.
/// Any failure aborts the rebuild; rerun from scratch after fixing the cause.
pub fn build_database(store: &mut Store, data_dir: &Path) -> Result<()> {
    store.drop_schema()?;
    store.create_schema()?;
    for city in City::ALL {
        ingest_city(store, data_dir, city)?;
    }
    info!(cities = City::ALL.len(), "database built");
    Ok(())
}

/// Load and validate all of the city's sources, then write them.
/// A malformed source stops the city before anything of it is written.
pub fn ingest_city(store: &mut Store, data_dir: &Path, city: City) -> Result<()> {
    let wrap = |source| Error::Ingest { city: city.to_string(), source: Box::new(source) };

    let sources = load_city(data_dir, city).map_err(wrap)?;
    write_city(store, city, &sources).map_err(wrap)
}

/// Write an already loaded city: its `City` row, then lanes and regions.
pub fn write_city(store: &mut Store, city: City, sources: &CitySources) -> Result<()> {
    let city_id = store.insert_city(&city.record())?;
    store.insert_linear_assets(city_id, &sources.lanes)?;
    store.insert_regions(city_id, &sources.regions)?;
    info!(%city, lanes = sources.lanes.len(), regions = sources.regions.len(), "city ingested");
    Ok(())
}
