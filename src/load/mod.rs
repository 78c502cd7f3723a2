//! Source loaders: turn a city's raw files into rows staged for the store.

mod lanes;
mod regions;

use std::{fs, path::Path};

pub use lanes::load_linear_assets;
pub use regions::{attribute_regions, load_declared_regions, load_region_boundaries, load_station_readings, RegionBoundary};

use crate::{
    city::{City, PollutionSource},
    types::{LinearAsset, Region},
    Error, Result,
};

/// Every row of one city, parsed and validated, ready to be written.
#[derive(Debug, Clone)]
pub struct CitySources {
    pub lanes: Vec<LinearAsset>,
    pub regions: Vec<Region>,
}

fn read_source(data_dir: &Path, file: &str) -> Result<Vec<u8>> {
    let path = data_dir.join(file);
    fs::read(&path).map_err(|source| Error::Io { path, source })
}

/// Load all sources of `city` from `data_dir`, using the city's pollution strategy.
pub fn load_city(data_dir: &Path, city: City) -> Result<CitySources> {
    let profile = city.profile();

    let lanes = load_linear_assets(
        &read_source(data_dir, profile.lanes.file)?,
        profile.lanes.length_field,
        profile.lanes.file,
    )?;

    let regions = match profile.pollution {
        PollutionSource::Declared { file, name_field, no2_field } => {
            load_declared_regions(&read_source(data_dir, file)?, name_field, no2_field, file)?
        }
        PollutionSource::Stations { boundaries_file, name_field, readings_file, readings } => {
            let boundaries = load_region_boundaries(&read_source(data_dir, boundaries_file)?, name_field, boundaries_file)?;
            let readings = load_station_readings(&read_source(data_dir, readings_file)?, &readings, readings_file)?;
            attribute_regions(boundaries, &readings)
        }
    };

    Ok(CitySources { lanes, regions })
}
