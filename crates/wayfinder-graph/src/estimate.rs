use crate::error::{GraphError, Result};
use crate::graph::NavGraph;
use serde::Serialize;

/// Weight units per meter.
pub const WEIGHT_UNITS_PER_METER: f64 = 3.5;
/// Walking pace, meters per minute.
pub const METERS_PER_MINUTE: f64 = 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    pub total_weight: f64,
    pub distance_meters: u64,
    pub minutes: u64,
}

impl Estimate {
    /// Convert a summed edge weight into meters and walking minutes.
    ///
    /// Meters use floor division; minutes round half to even, so 36 m is
    /// 0 min and 108 m is 2 min.
    pub fn from_weight(total_weight: f64) -> Self {
        let meters = floor_div(total_weight, WEIGHT_UNITS_PER_METER).max(0.0);
        let minutes = (meters / METERS_PER_MINUTE).round_ties_even();
        Self {
            total_weight,
            distance_meters: meters as u64,
            minutes: minutes as u64,
        }
    }
}

/// Sum base-graph edge weights along `path` and convert the total.
///
/// Weights come from the unfiltered graph. Fails if a node is unknown or two
/// consecutive nodes share no edge.
pub fn estimate(graph: &NavGraph, path: &[String]) -> Result<Estimate> {
    if let Some(missing) = path.iter().find(|id| !graph.contains(id)) {
        return Err(GraphError::UnknownNode(missing.clone()));
    }

    let total = path.windows(2).try_fold(0.0, |acc, pair| {
        graph
            .edge_weight(&pair[0], &pair[1])
            .map(|w| acc + w)
            .ok_or_else(|| GraphError::NotAdjacent {
                from: pair[0].clone(),
                to: pair[1].clone(),
            })
    })?;

    Ok(Estimate::from_weight(total))
}

/// Floor division with the sign and rounding rules of a remainder that
/// takes the divisor's sign.
fn floor_div(a: f64, b: f64) -> f64 {
    let m = a % b;
    let mut div = (a - m) / b;
    if m != 0.0 && (b < 0.0) != (m < 0.0) {
        div -= 1.0;
    }
    let floor = div.floor();
    if div - floor > 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfinder_config::LabelsConfig;
    use wayfinder_core::{Dataset, EdgeRecord, NodeRecord};

    #[test]
    fn test_from_weight() {
        let e = Estimate::from_weight(252.0);
        assert_eq!(e.distance_meters, 72);
        assert_eq!(e.minutes, 1);

        assert_eq!(Estimate::from_weight(0.0).distance_meters, 0);
        assert_eq!(Estimate::from_weight(3.4).distance_meters, 0);
        assert_eq!(Estimate::from_weight(7.0).distance_meters, 2);
        assert_eq!(Estimate::from_weight(10.0).distance_meters, 2);
    }

    #[test]
    fn test_minutes_round_half_to_even() {
        // 36 m -> 0.5 min, 108 m -> 1.5 min, 180 m -> 2.5 min
        assert_eq!(Estimate::from_weight(126.0).minutes, 0);
        assert_eq!(Estimate::from_weight(378.0).minutes, 2);
        assert_eq!(Estimate::from_weight(630.0).minutes, 2);
        // 37 m -> 0.51 min
        assert_eq!(Estimate::from_weight(129.5).minutes, 1);
    }

    #[test]
    fn test_floor_div() {
        assert_eq!(floor_div(252.0, 3.5), 72.0);
        assert_eq!(floor_div(7.1, 3.5), 2.0);
        assert_eq!(floor_div(-1.0, 3.5), -1.0);
    }

    #[test]
    fn test_estimate_path() {
        let data = Dataset {
            nodes: vec![
                NodeRecord::new("a", 0.0, 0.0, 1),
                NodeRecord::new("b", 0.0, 0.0, 1),
                NodeRecord::new("c", 0.0, 0.0, 1),
            ],
            edges: vec![EdgeRecord::new("a", "b", 100.0), EdgeRecord::new("b", "c", 152.0)],
        };
        let nav = NavGraph::build(data, &LabelsConfig::default()).unwrap();
        let path = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        let e = estimate(&nav, &path(&["c", "b", "a"])).unwrap();
        assert_eq!(e.total_weight, 252.0);
        assert_eq!(e.distance_meters, 72);

        let single = estimate(&nav, &path(&["a"])).unwrap();
        assert_eq!(single.total_weight, 0.0);
        assert_eq!(single.minutes, 0);

        assert!(matches!(
            estimate(&nav, &path(&["a", "c"])),
            Err(GraphError::NotAdjacent { .. })
        ));
        assert!(matches!(
            estimate(&nav, &path(&["a", "zz"])),
            Err(GraphError::UnknownNode(id)) if id == "zz"
        ));
    }
}
