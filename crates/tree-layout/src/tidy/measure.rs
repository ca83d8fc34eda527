use super::TidyLayoutError;
use crate::NodeWidths;
use petgraph::visit::IntoNeighborsDirected;
use petgraph::Direction;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Walk the tree from the root in pre-order, recording the depth of every node
///
/// Uses an explicit stack so document depth cannot exhaust the call stack;
/// the configured limit turns pathological nesting into an error instead.
pub(crate) fn preorder<G>(
    graph: G,
    root: G::NodeId,
    max_depth: usize,
) -> Result<(Vec<G::NodeId>, HashMap<G::NodeId, usize>), TidyLayoutError<G::NodeId>>
where
    G: IntoNeighborsDirected,
    G::NodeId: Copy + Ord + Hash + fmt::Debug,
{
    let mut order = Vec::new();
    let mut depths = HashMap::new();
    let mut stack = vec![(root, 0usize)];

    while let Some((node, depth)) = stack.pop() {
        if depth > max_depth {
            return Err(TidyLayoutError::TooDeep { limit: max_depth });
        }
        if depths.insert(node, depth).is_some() {
            // Second arrival: either a shared child or a cycle
            return Err(TidyLayoutError::NotATree(node));
        }
        order.push(node);

        let children: Vec<_> = graph.neighbors_directed(node, Direction::Outgoing).collect();
        // Reversed so children pop in their insertion order
        for &child in children.iter().rev() {
            stack.push((child, depth + 1));
        }
    }

    Ok((order, depths))
}

/// Accumulate the horizontal extent reserved for every node's subtree
///
/// A leaf reserves its own width; a branch the sum of its children's extents
/// plus gaps, floored at its own width so every node keeps its footprint.
pub(crate) fn subtree_widths<G, W>(
    graph: G,
    order: &[G::NodeId],
    node_widths: &W,
    gap: f32,
) -> HashMap<G::NodeId, f32>
where
    G: IntoNeighborsDirected,
    G::NodeId: Copy + Ord + Hash,
    W: NodeWidths<G::NodeId>,
{
    let mut widths = HashMap::with_capacity(order.len());

    // Children follow their parent in pre-order, so a reverse sweep sees
    // every child before its parent
    for &node in order.iter().rev() {
        let mut sum = 0.0;
        let mut count = 0usize;
        for child in graph.neighbors_directed(node, Direction::Outgoing) {
            sum += widths[&child];
            count += 1;
        }

        let own = node_widths.width(node);
        let width = if count == 0 {
            own
        } else {
            (sum + gap * (count - 1) as f32).max(own)
        };
        widths.insert(node, width);
    }

    widths
}
