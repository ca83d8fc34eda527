use crate::Point;
use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;
use std::collections::HashMap;
use std::hash::Hash;

/// Assign coordinates to nodes from their measured subtree extents
///
/// The root is pinned at the anchor. For every node a cursor starts at the
/// left edge of its subtree extent; each child is centered within a slice
/// equal to its own extent and the cursor advances by that extent plus the
/// gap, so sibling subtrees never overlap. The vertical position is purely
/// a function of depth.
pub(crate) fn assign_coordinates<N>(
    graph: &DiGraphMap<N, ()>,
    root: N,
    depths: &HashMap<N, usize>,
    widths: &HashMap<N, f32>,
    anchor: Point,
    horizontal_gap: f32,
    vertical_spacing: f32,
) -> HashMap<N, Point>
where
    N: Copy + Ord + Hash,
{
    let mut positions = HashMap::with_capacity(widths.len());
    let mut stack = vec![(root, anchor.x)];

    while let Some((node, x_center)) = stack.pop() {
        let y = anchor.y + depths[&node] as f32 * vertical_spacing;
        positions.insert(node, Point::new(x_center, y));

        let mut cursor = x_center - widths[&node] / 2.0;
        for child in graph.neighbors_directed(node, Direction::Outgoing) {
            let child_width = widths[&child];
            stack.push((child, cursor + child_width / 2.0));
            cursor += child_width + horizontal_gap;
        }
    }

    positions
}
