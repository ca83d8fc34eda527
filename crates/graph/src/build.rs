use crate::model::{NodeId, NodeKind, PathIndex, TreeGraph, VisualEdge, VisualNode};
use jsonflow_path::{append_index, append_key, last_segment, normalize_id};
use petgraph::graphmap::DiGraphMap;
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, warn};
use tree_layout::{Point, TidyLayout, TidyLayoutError};

/// Horizontal footprint reserved for a single node
pub const BASE_NODE_WIDTH: f32 = 260.0;
/// Gap between sibling subtrees
pub const HORIZONTAL_GAP: f32 = 40.0;
/// Vertical distance between consecutive depth levels
pub const VERTICAL_SPACING: f32 = 140.0;
/// Anchor position of the root node
pub const ROOT_X: f32 = 600.0;
pub const ROOT_Y: f32 = 100.0;

/// Errors that can occur while building a tree graph
#[derive(Debug, Error)]
pub enum BuildError {
    /// The document is nested deeper than the configured limit
    #[error("JSON document nested deeper than the limit of {limit}")]
    TooDeep { limit: usize },

    /// The layout engine rejected the flattened tree
    #[error(transparent)]
    Layout(#[from] TidyLayoutError<usize>),
}

/// Builds positioned tree graphs out of parsed JSON values
///
/// One instance can serve any number of builds; every call is an
/// independent, deterministic transform of the given value.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    /// Layout engine configuration
    pub layout: TidyLayout,

    /// Uniform width handed to the layout for every node
    pub node_width: f32,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self {
            layout: TidyLayout {
                horizontal_gap: HORIZONTAL_GAP,
                vertical_spacing: VERTICAL_SPACING,
                anchor: Point::new(ROOT_X, ROOT_Y),
                ..TidyLayout::default()
            },
            node_width: BASE_NODE_WIDTH,
        }
    }
}

/// One JSON value flattened into the traversal arena
struct FlatNode<'a> {
    value: &'a Value,
    path: String,
    parent: Option<usize>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the positioned tree graph for one JSON value
    ///
    /// Emits nodes and edges in pre-order (a parent always precedes its
    /// descendants, and every edge immediately precedes its target node)
    /// and indexes every node under its canonical path. Total over
    /// well-formed JSON within the configured depth limit.
    pub fn build(&self, root: &Value) -> Result<TreeGraph, BuildError> {
        let flat = self.flatten(root)?;

        // Mirror the arena into a graph for the layout engine; edge
        // insertion order preserves child order
        let mut tree = DiGraphMap::new();
        for idx in 0..flat.len() {
            tree.add_node(idx);
        }
        for (idx, node) in flat.iter().enumerate() {
            if let Some(parent) = node.parent {
                tree.add_edge(parent, idx, ());
            }
        }

        let node_width = self.node_width;
        let widths = move |_node: usize| node_width;
        let subtrees = self.layout.compute_widths(&tree, 0, &widths)?;
        let positions = self.layout.compute_positions(&subtrees);

        let mut graph = TreeGraph {
            nodes: Vec::with_capacity(flat.len()),
            edges: Vec::with_capacity(flat.len().saturating_sub(1)),
            index: PathIndex::default(),
        };
        let mut seen = HashSet::with_capacity(flat.len());

        for (idx, node) in flat.iter().enumerate() {
            let kind = NodeKind::of(node.value);
            let id = NodeId::from(if node.path.is_empty() {
                "root".to_string()
            } else {
                normalize_id(&node.path)
            });

            if !seen.insert(id.clone()) {
                warn!(
                    "Identifier {id} of {path:?} collides with an earlier node",
                    path = node.path
                );
            }

            if let Some(parent) = node.parent {
                let source = graph.nodes[parent].id.clone();
                graph.edges.push(VisualEdge {
                    id: format!("e-{source}-{id}"),
                    source,
                    target: id.clone(),
                });
            }

            let canonical = if node.path.is_empty() {
                "$".to_string()
            } else {
                node.path.clone()
            };
            graph.index.insert(canonical.clone(), id.clone());

            graph.nodes.push(VisualNode {
                id,
                label: node_label(&node.path, node.value, kind),
                kind,
                pos: positions[&idx],
                path: canonical,
                value: (kind == NodeKind::Primitive).then(|| node.value.clone()),
            });
        }

        debug!(
            "Built tree graph: {} nodes, {} edges",
            graph.nodes.len(),
            graph.edges.len()
        );
        Ok(graph)
    }

    /// Flatten the value into a pre-order arena of (value, path, parent)
    ///
    /// Iterative with an explicit stack; depth beyond the configured limit
    /// is reported instead of recursed into.
    fn flatten<'a>(&self, root: &'a Value) -> Result<Vec<FlatNode<'a>>, BuildError> {
        let limit = self.layout.max_depth;
        let mut flat = Vec::new();
        let mut stack = vec![(root, String::new(), 0usize, None)];

        while let Some((value, path, depth, parent)) = stack.pop() {
            if depth > limit {
                return Err(BuildError::TooDeep { limit });
            }
            let idx = flat.len();

            // Children pushed in reverse so they pop in document order
            match value {
                Value::Object(members) => {
                    for (key, child) in members.iter().rev() {
                        stack.push((child, append_key(&path, key), depth + 1, Some(idx)));
                    }
                }
                Value::Array(items) => {
                    for (i, child) in items.iter().enumerate().rev() {
                        stack.push((child, append_index(&path, i), depth + 1, Some(idx)));
                    }
                }
                _ => {}
            }

            flat.push(FlatNode {
                value,
                path,
                parent,
            });
        }

        Ok(flat)
    }
}

/// Display label for a node: the last path segment, enriched per kind
fn node_label(path: &str, value: &Value, kind: NodeKind) -> String {
    if path.is_empty() {
        return "root".to_string();
    }

    let segment = last_segment(path);
    match kind {
        NodeKind::Primitive => format!("{segment}: {}", scalar_text(value)),
        NodeKind::Array => format!("{segment} [{}]", value.as_array().map_or(0, Vec::len)),
        NodeKind::Object => segment.to_string(),
    }
}

/// Scalar rendered the way a label shows it: strings bare, the rest in
/// their JSON form
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
