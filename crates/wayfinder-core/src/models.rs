use serde::{Deserialize, Deserializer, Serialize};

/// One row of the node table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeRecord {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub floor: u32,
    #[serde(rename = "type", default, deserialize_with = "blank_as_none")]
    pub node_type: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub person: Option<String>,
}

impl NodeRecord {
    pub fn new(id: impl Into<String>, x: f64, y: f64, floor: u32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            floor,
            node_type: None,
            label: None,
            person: None,
        }
    }

    pub fn with_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = Some(node_type.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_person(mut self, person: impl Into<String>) -> Self {
        self.person = Some(person.into());
        self
    }
}

/// One row of the edge table. Direction is irrelevant for traversal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    #[serde(deserialize_with = "weight_from_number_or_text")]
    pub weight: f64,
}

impl EdgeRecord {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// Everything a data source yields in one read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn weight_from_number_or_text<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawWeight {
        Number(f64),
        Text(String),
    }

    match RawWeight::deserialize(deserializer)? {
        RawWeight::Number(n) => Ok(n),
        RawWeight::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("weight '{}' is not a number", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_node_defaults() {
        let node: NodeRecord =
            serde_json::from_str(r#"{"id": "n1", "x": 1.5, "y": 2, "floor": 2, "label": ""}"#)
                .unwrap();
        assert_eq!(node.floor, 2);
        assert_eq!(node.node_type, None);
        assert_eq!(node.label, None);
        assert_eq!(node.person, None);
    }

    #[test]
    fn test_weight_accepts_text() {
        let edge: EdgeRecord =
            serde_json::from_str(r#"{"from": "a", "to": "b", "weight": " 12.5 "}"#).unwrap();
        assert_eq!(edge.weight, 12.5);

        let bad = serde_json::from_str::<EdgeRecord>(r#"{"from": "a", "to": "b", "weight": "far"}"#);
        assert!(bad.is_err());
    }
}
