use super::ui::print_success;
use anyhow::{Context, Result};
use wayfinder_config::Config;
use wayfinder_graph::NavService;

/// Rebuild from the dataset regardless of any cached snapshot.
pub fn handle_build(mut config: Config) -> Result<()> {
    let use_snapshot = config.data.use_snapshot;
    config.data.use_snapshot = false;
    let service = NavService::open(config).context("failed to load the building graph")?;
    let graph = service.graph();

    if use_snapshot {
        let path = &service.config().data.snapshot_path;
        graph.save_snapshot(path)?;
        print_success(&format!(
            "built {} nodes / {} edges, snapshot at {}",
            graph.node_count(),
            graph.edge_count(),
            path.display()
        ));
    } else {
        print_success(&format!(
            "built {} nodes / {} edges (snapshot disabled)",
            graph.node_count(),
            graph.edge_count()
        ));
    }
    Ok(())
}
