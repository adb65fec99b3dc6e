use super::ui::print_header;
use anyhow::{Context, Result};
use wayfinder_config::Config;
use wayfinder_graph::NavService;

pub fn handle_points(config: Config, json: bool) -> Result<()> {
    let service = NavService::open(config).context("failed to load the building graph")?;
    let points = service.points();

    if json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    // Labels come first, then categories
    let graph = service.graph();
    let (labels, categories) = points.split_at(graph.labels().len());

    print_header("Points");
    for label in labels {
        println!("  {label}");
    }
    print_header("Categories");
    for category in categories {
        let count = graph.categories().get(category).map_or(0, Vec::len);
        println!("  {category} ({count})");
    }
    Ok(())
}
