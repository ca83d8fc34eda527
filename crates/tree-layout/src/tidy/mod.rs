mod measure;
mod positions;

use crate::{LayoutEngine, NodeWidths, Point};
use petgraph::graphmap::DiGraphMap;
use petgraph::visit::{IntoNeighborsDirected, IntoNodeIdentifiers};
use petgraph::Direction;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use thiserror::Error;

use measure::{preorder, subtree_widths};
use positions::assign_coordinates;

/// Errors that can occur during tidy layout computation
#[derive(Debug, Error)]
pub enum TidyLayoutError<N>
where
    N: fmt::Debug,
{
    /// The root is not a node of the graph
    #[error("root node {0:?} is not part of the graph")]
    MissingRoot(N),

    /// The graph is not a tree below the root
    #[error("node {0:?} is reachable through more than one path")]
    NotATree(N),

    /// The tree is nested deeper than the configured limit
    #[error("tree depth exceeds the configured limit of {limit}")]
    TooDeep { limit: usize },
}

/// Configuration for the tidy (subtree-width) tree layout
#[derive(Debug, Clone)]
pub struct TidyLayout {
    /// Horizontal gap between sibling subtrees
    pub horizontal_gap: f32,

    /// Vertical distance between consecutive depth levels
    pub vertical_spacing: f32,

    /// Position assigned to the root node
    pub anchor: Point,

    /// Maximum tree depth accepted before the layout gives up
    pub max_depth: usize,
}

impl Default for TidyLayout {
    fn default() -> Self {
        Self {
            horizontal_gap: 40.0,
            vertical_spacing: 140.0,
            anchor: Point::zero(),
            max_depth: 512,
        }
    }
}

impl TidyLayout {
    /// Create a new tidy layout with the given gaps
    pub fn new(horizontal_gap: f32, vertical_spacing: f32) -> Self {
        Self {
            horizontal_gap,
            vertical_spacing,
            ..Default::default()
        }
    }
}

/// Measured tree structure that can be cached and reused
#[derive(Debug, Clone)]
pub struct Subtrees<N>
where
    N: Copy + Ord + Hash,
{
    /// Internal graph representation for efficient child lookups
    pub(crate) graph: DiGraphMap<N, ()>,

    /// The node the tree hangs from
    pub(crate) root: N,

    /// Nodes in pre-order
    pub order: Vec<N>,

    /// Depth of every node below the root
    pub depths: HashMap<N, usize>,

    /// Horizontal extent reserved for every node's subtree
    pub widths: HashMap<N, f32>,
}

impl TidyLayout {
    /// Measure subtree extents (depends on the graph, cache this)
    ///
    /// This phase walks the tree from the root and computes, bottom-up, the
    /// horizontal extent every subtree needs. Nodes not reachable from the
    /// root take no part in the layout and are absent from the result.
    ///
    /// # Errors
    /// Returns an error if the root is not in the graph, if a node is
    /// reachable through more than one path, or if the tree is nested
    /// deeper than [`TidyLayout::max_depth`]
    pub fn compute_widths<G, W>(
        &self,
        graph: G,
        root: G::NodeId,
        node_widths: &W,
    ) -> Result<Subtrees<G::NodeId>, TidyLayoutError<G::NodeId>>
    where
        G: IntoNodeIdentifiers + IntoNeighborsDirected,
        G::NodeId: Copy + Ord + Hash + fmt::Debug,
        W: NodeWidths<G::NodeId>,
    {
        if !graph.node_identifiers().any(|node| node == root) {
            return Err(TidyLayoutError::MissingRoot(root));
        }

        let (order, depths) = preorder(graph, root, self.max_depth)?;
        let widths = subtree_widths(graph, &order, node_widths, self.horizontal_gap);

        // Convert the reachable part to a DiGraphMap for efficient lookups
        // during positioning
        let mut internal_graph = DiGraphMap::new();
        for &node in &order {
            internal_graph.add_node(node);
        }
        for &node in &order {
            for succ in graph.neighbors_directed(node, Direction::Outgoing) {
                internal_graph.add_edge(node, succ, ());
            }
        }

        Ok(Subtrees {
            graph: internal_graph,
            root,
            order,
            depths,
            widths,
        })
    }

    /// Compute positions from measured subtrees (cheap, rerun when the
    /// anchor or spacing changes)
    pub fn compute_positions<N>(&self, subtrees: &Subtrees<N>) -> HashMap<N, Point>
    where
        N: Copy + Ord + Hash,
    {
        assign_coordinates(
            &subtrees.graph,
            subtrees.root,
            &subtrees.depths,
            &subtrees.widths,
            self.anchor,
            self.horizontal_gap,
            self.vertical_spacing,
        )
    }
}

// Implement LayoutEngine for any graph with the required capabilities
impl<G> LayoutEngine<G> for TidyLayout
where
    G: IntoNodeIdentifiers + IntoNeighborsDirected,
    G::NodeId: Copy + Ord + Hash + fmt::Debug,
{
    type NodeId = G::NodeId;
    type Error = TidyLayoutError<G::NodeId>;

    fn layout<W>(
        &self,
        graph: G,
        root: Self::NodeId,
        widths: &W,
    ) -> Result<HashMap<Self::NodeId, Point>, Self::Error>
    where
        W: NodeWidths<Self::NodeId>,
    {
        let subtrees = self.compute_widths(graph, root, widths)?;
        Ok(self.compute_positions(&subtrees))
    }
}
