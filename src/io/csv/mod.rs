//! CSV reading operations for tabular station data.

mod read;

pub(crate) use read::*;
