use anyhow::{Context, Result};
use velo_air::{pipeline::build_database, Store};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::BuildArgs) -> Result<()> {
    let data_dir = &args.data_dir;
    anyhow::ensure!(data_dir.is_dir(), "Data directory does not exist: {}", data_dir.display());

    let mut store = Store::open(&cli.db)
        .with_context(|| format!("[build] Failed to open store {}", cli.db.display()))?;
    build_database(&mut store, data_dir)
        .with_context(|| format!("[build] Failed to build {} from {}", cli.db.display(), data_dir.display()))?;

    tracing::info!(path = %cli.db.display(), "store written");
    Ok(())
}
