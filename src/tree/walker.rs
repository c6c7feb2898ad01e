//! Pre-order traversal over a planned tree

use crate::tree::builder::Tree;
use crate::types::NodeId;

/// Pre-order walker yielding `(node, depth)` pairs.
///
/// Nodes are visited before their children, siblings in append order. Depth
/// travels with each pending entry rather than living in a shared counter.
pub struct Walker<'a> {
    tree: &'a Tree,
    stack: Vec<(NodeId, usize)>,
}

impl<'a> Walker<'a> {
    /// Walk the subtree rooted at `start`; `start` is reported at depth 0
    pub fn new(tree: &'a Tree, start: NodeId) -> Self {
        let stack = if tree.get(start).is_some() {
            vec![(start, 0)]
        } else {
            Vec::new()
        };
        Self { tree, stack }
    }
}

impl<'a> Iterator for Walker<'a> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        if let Some(node) = self.tree.get(id) {
            // Reverse so the first-appended child is popped first
            for child in node.children().iter().rev() {
                self.stack.push((*child, depth + 1));
            }
        }
        Some((id, depth))
    }
}
