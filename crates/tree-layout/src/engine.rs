use crate::{NodeWidths, Point};
use std::collections::HashMap;
use std::hash::Hash;

/// A layout engine that can compute positions for the nodes of a rooted tree
///
/// This trait is generic over the graph type `G`, allowing different layout
/// engines to work with different graph types:
/// - Tidy layouts implement `LayoutEngine<G>` for trees
/// - Other layouts can specify their own graph requirements
pub trait LayoutEngine<G> {
    /// The type used to identify nodes in the graph
    type NodeId: Copy + Ord + Hash;

    /// The error produced when the input cannot be laid out
    type Error;

    /// Compute positions for all nodes reachable from `root`
    ///
    /// # Errors
    /// Returns an error if the layout computation fails (e.g., the graph is
    /// not a tree below `root`, or other layout-specific constraints are
    /// violated)
    fn layout<W>(
        &self,
        graph: G,
        root: Self::NodeId,
        widths: &W,
    ) -> Result<HashMap<Self::NodeId, Point>, Self::Error>
    where
        W: NodeWidths<Self::NodeId>;
}
