use anyhow::{Context, Result};
use velo_air::{report::CityReport, Store};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::ReportArgs) -> Result<()> {
    let store = Store::open(&cli.db)
        .with_context(|| format!("[report] Failed to open store {}", cli.db.display()))?;
    let report = CityReport::build(&store, args.city)
        .with_context(|| format!("[report] Failed to build report for {}", args.city))?;

    let json = if args.pretty { serde_json::to_string_pretty(&report)? } else { serde_json::to_string(&report)? };
    println!("{json}");
    Ok(())
}
