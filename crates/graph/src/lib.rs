//! JSON tree diagram builder
//!
//! Turns an already parsed JSON value into a positioned tree diagram: one
//! visual node per scalar, object and array, parent to child edges, and a
//! path index resolving logical JSON paths to node identifiers. Rendering,
//! search UI and export are left to consumers; this crate only produces
//! the geometry and the lookup structures they read.
//!
//! # Example
//!
//! ```
//! use jsonflow_graph::{find_node_id, GraphBuilder};
//! use serde_json::json;
//!
//! let doc = json!({ "user": { "name": "ada" } });
//! let graph = GraphBuilder::new().build(&doc).unwrap();
//!
//! assert_eq!(graph.nodes.len(), 3);
//! assert_eq!(graph.edges.len(), 2);
//! assert!(find_node_id(&graph, "user.name").is_some());
//! ```

pub mod build;
pub mod model;
pub mod search;

pub use build::{
    BuildError, GraphBuilder, BASE_NODE_WIDTH, HORIZONTAL_GAP, ROOT_X, ROOT_Y, VERTICAL_SPACING,
};
pub use model::{NodeId, NodeKind, PathIndex, TreeGraph, VisualEdge, VisualNode};
pub use search::find_node_id;
