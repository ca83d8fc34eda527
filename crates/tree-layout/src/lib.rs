//! Generic tidy tree layout
//!
//! This crate positions the nodes of a rooted tree so that no two sibling
//! subtrees overlap horizontally and every parent sits centered over the
//! extent of its children. It works with any graph implementing petgraph's
//! visitor traits; the tree shape (single root, one parent per node) is
//! verified at layout time.
//!
//! # Layout Engines
//!
//! - [`TidyLayout`]: subtree-width driven layout for trees, with
//!   depth-proportional vertical placement
//!
//! # Example
//!
//! ```
//! use tree_layout::{LayoutEngine, TidyLayout};
//! use petgraph::graphmap::DiGraphMap;
//!
//! // Create a tree
//! let mut graph = DiGraphMap::new();
//! graph.add_edge(1, 2, ());
//! graph.add_edge(1, 3, ());
//!
//! // Create a layout engine
//! let engine = TidyLayout::default();
//!
//! // Provide node widths
//! let widths = |_node| 120.0;
//!
//! // Use the LayoutEngine trait (simple, single-phase):
//! let positions = engine.layout(&graph, 1, &widths).unwrap();
//!
//! // Or directly by calling each step for better control
//! let subtrees = engine.compute_widths(&graph, 1, &widths).unwrap();
//! let positions = engine.compute_positions(&subtrees);
//! ```

mod engine;
mod geometry;
mod widths;

pub mod tidy;

// Re-export core types and traits
pub use engine::LayoutEngine;
pub use geometry::Point;
pub use widths::NodeWidths;

// Re-export petgraph visitor traits for graph abstraction
pub use petgraph::visit::{GraphBase, IntoNeighborsDirected, IntoNodeIdentifiers};
pub use petgraph::Direction;

// Re-export tidy layout types
pub use tidy::{Subtrees, TidyLayout, TidyLayoutError};
