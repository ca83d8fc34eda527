use crate::model::{NodeId, TreeGraph};
use jsonflow_path::{canonicalize, strip_root};

/// Resolve a user-entered search path to a node identifier
///
/// The query is canonicalized first, so `user.address.city` and
/// `$.user.address.city` name the same node. Resolution goes through the
/// path index (canonical form, then the raw stored form) with a linear
/// scan over node paths as a last resort. Absence of a match is a normal
/// result, never an error.
pub fn find_node_id<'a>(graph: &'a TreeGraph, query: &str) -> Option<&'a NodeId> {
    let canonical = canonicalize(query);
    if canonical == "$" {
        return graph.index.get("$");
    }

    let raw = strip_root(&canonical);
    graph
        .index
        .get(&canonical)
        .or_else(|| graph.index.get(raw))
        .or_else(|| {
            graph
                .nodes
                .iter()
                .find(|node| node.path == canonical || node.path == raw)
                .map(|node| &node.id)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::GraphBuilder;
    use serde_json::json;

    fn sample() -> TreeGraph {
        GraphBuilder::new()
            .build(&json!({
                "user": { "address": { "city": "NYC" } },
                "items": [10, 20]
            }))
            .unwrap()
    }

    #[test]
    fn the_root_always_resolves() {
        let graph = sample();

        let root = find_node_id(&graph, "$").unwrap();
        assert_eq!(root.as_str(), "root");
        assert_eq!(find_node_id(&graph, ""), Some(root));
        assert_eq!(find_node_id(&graph, "   "), Some(root));
    }

    #[test]
    fn bare_and_rooted_queries_agree() {
        let graph = sample();

        let bare = find_node_id(&graph, "user.address.city").unwrap();
        let rooted = find_node_id(&graph, "$.user.address.city").unwrap();
        assert_eq!(bare, rooted);

        let node = graph.nodes.iter().find(|n| &n.id == bare).unwrap();
        assert_eq!(node.label, "city: NYC");
    }

    #[test]
    fn array_indices_resolve() {
        let graph = sample();

        let id = find_node_id(&graph, "items[1]").unwrap();
        let node = graph.nodes.iter().find(|n| &n.id == id).unwrap();
        assert_eq!(node.label, "items[1]: 20");
        assert_eq!(find_node_id(&graph, "$.items[1]"), Some(id));
    }

    #[test]
    fn unknown_paths_are_not_found() {
        let graph = sample();

        assert_eq!(find_node_id(&graph, "user.missing"), None);
        assert_eq!(find_node_id(&graph, "items[9]"), None);
    }
}
