mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{handle_build, handle_node, handle_points, handle_route, handle_status, Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wayfinder_config::{Config, ErrorFormatter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let loaded = match cli.config.as_deref() {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", ErrorFormatter::new(e));
            std::process::exit(2);
        }
    };
    tracing::debug!(source = ?config.data.source, path = %config.data.path.display(), "configuration loaded");

    match cli.command {
        Commands::Route(args) => handle_route(args, config)?,
        Commands::Points { json } => handle_points(config, json)?,
        Commands::Node { id, json } => handle_node(config, &id, json)?,
        Commands::Build => handle_build(config)?,
        Commands::Status => handle_status(config)?,
    }

    Ok(())
}
