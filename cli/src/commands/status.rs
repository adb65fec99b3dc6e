use super::ui::{print_field, print_header};
use anyhow::{Context, Result};
use wayfinder_config::Config;
use wayfinder_core::open_source;
use wayfinder_graph::NavService;

pub fn handle_status(config: Config) -> Result<()> {
    let data = &config.data;
    let snapshot_exists = data.snapshot_path.exists();

    print_header("Configuration");
    print_field("source", open_source(data).describe());
    print_field(
        "snapshot",
        format!(
            "{} ({})",
            data.snapshot_path.display(),
            match (data.use_snapshot, snapshot_exists) {
                (false, _) => "disabled",
                (true, true) => "present",
                (true, false) => "missing",
            }
        ),
    );
    print_field("wheelchair", config.routing.default_wheelchair);
    print_field("stairs", config.accessibility.staircase_types.join(", "));
    print_field("elevators", config.accessibility.elevator_types.join(", "));

    let service = NavService::open(config).context("failed to load the building graph")?;
    let graph = service.graph();
    print_header("Graph");
    print_field("nodes", graph.node_count());
    print_field("edges", graph.edge_count());
    print_field(
        "floors",
        graph
            .floors()
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    );
    print_field("labels", graph.labels().len());
    print_field("categories", graph.categories().len());
    Ok(())
}
