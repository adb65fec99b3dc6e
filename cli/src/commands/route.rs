use super::ui::{print_header, print_route, print_warning};
use anyhow::{Context, Result};
use clap::Parser;
use wayfinder_config::Config;
use wayfinder_graph::{NavService, RouteOutcome};

#[derive(Parser)]
pub struct RouteArgs {
    /// Origin: a point label or a category name
    pub from: String,
    /// Destination: a point label or a category name
    pub to: String,
    /// Route for a wheelchair user (avoids staircases)
    #[arg(long, conflicts_with = "walking")]
    pub wheelchair: bool,
    /// Route on foot (avoids elevators), overriding the configured default
    #[arg(long)]
    pub walking: bool,
    /// Output in JSON format
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl RouteArgs {
    fn wheelchair_mode(&self, config: &Config) -> bool {
        if self.wheelchair {
            true
        } else if self.walking {
            false
        } else {
            config.routing.default_wheelchair
        }
    }
}

pub fn handle_route(args: RouteArgs, config: Config) -> Result<()> {
    let wheelchair = args.wheelchair_mode(&config);
    let service = NavService::open(config).context("failed to load the building graph")?;
    let outcome = service.route(&args.from, &args.to, wheelchair)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        RouteOutcome::Found(summary) => {
            let mode = if wheelchair { "wheelchair" } else { "walking" };
            print_header(&format!("{} → {} ({mode})", args.from, args.to));
            print_route(&summary, &service.graph());
            if summary.changes_floor() {
                print_warning("the route continues on another floor");
            }
        }
        RouteOutcome::NoPath => {
            println!("No route from '{}' to '{}'.", args.from, args.to);
        }
        RouteOutcome::UnresolvedStart { selection } | RouteOutcome::UnresolvedTarget { selection } => {
            println!("Unknown point or category '{selection}'. Run `wayfinder points` to list them.");
        }
    }
    Ok(())
}
