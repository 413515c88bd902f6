use super::node::Node;
use serde::Serialize;

/// Flat, serializable view of one tree state.
///
/// This is the read-only boundary handed to rendering collaborators; the
/// simulation tree itself is never given out for mutation.
#[derive(Debug, Clone, Serialize)]
pub struct TreeSnapshot {
    pub node_count: usize,
    /// The root's visit count, which is also the rollout total. Renderers
    /// scale visit-count encodings against it.
    pub root_visit_count: u32,
    pub nodes: Vec<NodeSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeSnapshot {
    pub name: String,
    pub depth: usize,
    pub is_terminal: bool,
    pub accumulated_value: f64,
    pub avg_value: f64,
    pub visit_count: u32,
    pub last_traversed: bool,
}

impl TreeSnapshot {
    /// Captures the whole tree in preorder, parents before children.
    pub fn capture(tree: &Node) -> TreeSnapshot {
        let nodes: Vec<NodeSnapshot> = tree
            .flatten()
            .into_iter()
            .map(|node| NodeSnapshot {
                name: node.name.clone(),
                depth: node.depth(),
                is_terminal: node.is_terminal(),
                accumulated_value: node.accumulated_value,
                avg_value: node.avg_value(),
                visit_count: node.visit_count,
                last_traversed: node.last_traversed,
            })
            .collect();
        TreeSnapshot {
            node_count: nodes.len(),
            root_visit_count: tree.visit_count,
            nodes,
        }
    }
}
