#![doc = "velo-air: bike lane and NO2 pollution ETL over a spatially typed SQLite store"]
pub mod city;
mod error;
pub mod geom;
mod io;
pub mod load;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod store;
mod types;

#[doc(inline)]
pub use city::City;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use store::Store;

#[doc(inline)]
pub use types::{LinearAsset, Region};
