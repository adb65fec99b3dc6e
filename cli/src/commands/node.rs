use super::ui::{print_field, print_header};
use anyhow::{anyhow, Context, Result};
use wayfinder_config::Config;
use wayfinder_graph::NavService;

pub fn handle_node(config: Config, id: &str, json: bool) -> Result<()> {
    let service = NavService::open(config).context("failed to load the building graph")?;
    let graph = service.graph();
    let node = graph
        .node(id)
        .ok_or_else(|| anyhow!("no node with id '{id}'"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(node)?);
        return Ok(());
    }

    print_header(&format!("Node {}", node.id));
    print_field("floor", node.floor);
    print_field("position", format!("({}, {})", node.x, node.y));
    print_field("type", &node.node_type);
    print_field("label", node.label.as_deref().unwrap_or("-"));
    Ok(())
}
