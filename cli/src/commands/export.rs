use std::fs;

use anyhow::{Context, Result};
use velo_air::{report::export_geojson, Store};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::ExportArgs) -> Result<()> {
    let out_path = &args.output;
    anyhow::ensure!(args.force || !out_path.exists(), "Output file already exists (use --force): {}", out_path.display());

    let store = Store::open(&cli.db)
        .with_context(|| format!("[export] Failed to open store {}", cli.db.display()))?;
    let collection = export_geojson(&store, args.city)
        .with_context(|| format!("[export] Failed to export {}", args.city))?;

    fs::write(out_path, serde_json::to_vec(&collection)?)
        .with_context(|| format!("[export] Failed to write {}", out_path.display()))?;

    tracing::info!(city = %args.city, path = %out_path.display(), "exported GeoJSON");
    Ok(())
}
