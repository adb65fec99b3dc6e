use std::collections::HashMap;

/// What a user-supplied origin or destination string refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Exact label match; one node.
    Label(String),
    /// Category match; every node of that type, in source order.
    Category(Vec<String>),
    Unresolved,
}

impl Selection {
    /// Candidate node ids. Empty when unresolved.
    pub fn candidates(&self) -> &[String] {
        match self {
            Selection::Label(id) => std::slice::from_ref(id),
            Selection::Category(ids) => ids,
            Selection::Unresolved => &[],
        }
    }

    pub fn is_resolved(&self) -> bool {
        !self.candidates().is_empty()
    }
}

/// Labels win over categories when a string names both.
pub fn resolve(
    selection: &str,
    labels: &HashMap<String, String>,
    categories: &HashMap<String, Vec<String>>,
) -> Selection {
    if let Some(id) = labels.get(selection) {
        return Selection::Label(id.clone());
    }
    match categories.get(selection) {
        Some(ids) if !ids.is_empty() => Selection::Category(ids.clone()),
        _ => Selection::Unresolved,
    }
}
