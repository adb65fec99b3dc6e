pub mod build;
pub mod node;
pub mod points;
pub mod route;
pub mod status;
pub mod ui;

pub use build::handle_build;
pub use node::handle_node;
pub use points::handle_points;
pub use route::{handle_route, RouteArgs};
pub use status::handle_status;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wayfinder")]
#[command(about = "indoor route planning over a multi-floor building graph")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: first of .wayfinder.{toml,yml,yaml,json})
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the best route between two points or categories
    Route(RouteArgs),
    /// List every label and category that can be routed to or from
    Points {
        /// Output in JSON format
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show floor, position, type and label of one node
    Node {
        /// Node identifier
        id: String,
        /// Output in JSON format
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Re-read the dataset and refresh the cached graph snapshot
    Build,
    /// Show configuration, snapshot and graph statistics
    Status,
}
