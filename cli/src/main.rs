
mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{build, export, report};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Build(args) => build::run(&cli, args),
        Commands::Report(args) => report::run(&cli, args),
        Commands::Export(args) => export::run(&cli, args),
    }
}

/// Log to stderr; stdout is reserved for command output.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> { run() }
