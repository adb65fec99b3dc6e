use console::Style;
use wayfinder_graph::{NavGraph, RouteSummary};

pub fn print_header(title: &str) {
    println!("\n{}", Style::new().bold().cyan().apply_to(title));
    println!("{}", Style::new().dim().apply_to("─".repeat(title.chars().count())));
}

pub fn print_success(msg: &str) {
    println!("{} {}", Style::new().green().bold().apply_to("OK:"), msg);
}

pub fn print_warning(msg: &str) {
    println!("{} {}", Style::new().yellow().bold().apply_to("NOTE:"), msg);
}

pub fn print_field(name: &str, value: impl std::fmt::Display) {
    println!("{:>12}  {}", Style::new().dim().apply_to(name), value);
}

/// One line per hop, with a marker wherever the floor changes.
pub fn print_route(summary: &RouteSummary, graph: &NavGraph) {
    let floor_style = Style::new().bold().magenta();
    let mut current = None;

    for (i, id) in summary.path.iter().enumerate() {
        let floor = graph.floor(id);
        if floor != current {
            if let Some(floor) = floor {
                println!("{}", floor_style.apply_to(format!("Floor {floor}")));
            }
            current = floor;
        }
        let name = match graph.label_of(id) {
            Some(label) => format!("{label} ({id})"),
            None => id.clone(),
        };
        println!("  {:>3}. {}", i + 1, name);
    }

    println!();
    print_field("weight", summary.total_weight);
    print_field("distance", format!("{} m", summary.distance_meters));
    print_field("time", format!("~{} min", summary.estimated_minutes));
    print_field("start floor", summary.start_floor);
    print_field(
        "floors",
        summary
            .floors
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" → "),
    );
}
