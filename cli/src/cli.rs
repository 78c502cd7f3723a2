use std::path::PathBuf;

use velo_air::City;

/// Cycling infrastructure vs. NO2 pollution ETL
#[derive(clap::Parser, Debug)]
#[command(name = "velo-air", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// SQLite store file
    #[arg(long, env = "VELO_AIR_DB", default_value = "velo_air.sqlite", global = true, value_hint = clap::ValueHint::FilePath)]
    pub db: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Drop, recreate and fill the store from the source files of every city
    Build(BuildArgs),

    /// Print a city's metrics and classified regions as JSON
    Report(ReportArgs),

    /// Write a city's lanes and regions as a GeoJSON FeatureCollection
    Export(ExportArgs),
}

#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Directory holding the GeoJSON and CSV sources
    #[arg(long, env = "VELO_AIR_DATA", default_value = "data", value_hint = clap::ValueHint::DirPath)]
    pub data_dir: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct ReportArgs {
    /// City name, e.g. London, Berlin
    pub city: City,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// City name, e.g. London, Berlin
    pub city: City,

    /// Output GeoJSON file
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,
}
