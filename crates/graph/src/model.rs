use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tree_layout::Point;

/// Classification of a JSON value
///
/// Renderers key node styling off this tag (objects, arrays and primitives
/// each get their own border color by convention).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Object,
    Array,
    Primitive,
}

impl NodeKind {
    /// Classify a JSON value
    ///
    /// Order-sensitive and total: arrays win over objects, everything else
    /// (`null` included) is a primitive.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Array(_) => NodeKind::Array,
            Value::Object(_) => NodeKind::Object,
            _ => NodeKind::Primitive,
        }
    }
}

/// Rendering-safe node identifier derived from a logical path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One visual node per visited JSON value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualNode {
    pub id: NodeId,
    pub label: String,
    pub kind: NodeKind,
    pub pos: Point,
    /// Logical path of the value, `"$"` for the root
    pub path: String,
    /// Scalar payload, present on primitive nodes only
    pub value: Option<Value>,
}

/// Parent to child connection between two visual nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualEdge {
    pub id: String,
    pub source: NodeId,
    pub target: NodeId,
}

/// Lookup table from canonical logical path to node identifier
///
/// Holds exactly one entry per node: `"$"` for the root, the raw
/// accumulated path for everything else.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, From)]
pub struct PathIndex(pub HashMap<String, NodeId>);

impl PathIndex {
    pub fn get(&self, path: &str) -> Option<&NodeId> {
        self.0.get(path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn insert(&mut self, path: String, id: NodeId) -> Option<NodeId> {
        self.0.insert(path, id)
    }
}

/// The complete positioned tree produced by one build call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeGraph {
    pub nodes: Vec<VisualNode>,
    pub edges: Vec<VisualEdge>,
    pub index: PathIndex,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kinds_are_total_and_order_sensitive() {
        assert_eq!(NodeKind::of(&json!([1])), NodeKind::Array);
        assert_eq!(NodeKind::of(&json!({ "a": 1 })), NodeKind::Object);
        assert_eq!(NodeKind::of(&json!("text")), NodeKind::Primitive);
        assert_eq!(NodeKind::of(&json!(3.5)), NodeKind::Primitive);
        assert_eq!(NodeKind::of(&json!(true)), NodeKind::Primitive);
        assert_eq!(NodeKind::of(&json!(null)), NodeKind::Primitive);
    }

    #[test]
    fn node_ids_display_their_path_form() {
        let id = NodeId::from("user_address".to_string());
        assert_eq!(id.to_string(), "user_address");
        assert_eq!(id.as_str(), "user_address");
    }
}
