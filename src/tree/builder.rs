//! Tree builder for planning filesystem layouts

use crate::error::PlanError;
use crate::tree::node::Node;
use crate::tree::path;
use crate::tree::walker::Walker;
use crate::types::{NodeId, NodeKind, Permission};
use std::path::Path;
use tracing::{debug, instrument, trace};

/// Complete planned tree.
///
/// Nodes live in an arena indexed by `NodeId`; each directory keeps its
/// children as an ordered list of ids. The structure is frozen once built,
/// only digests change afterwards.
#[derive(Debug, Clone)]
pub struct Tree {
    root_id: NodeId,
    nodes: Vec<Node>,
}

impl Tree {
    pub fn root_id(&self) -> NodeId {
        self.root_id
    }

    pub fn root(&self) -> &Node {
        &self.nodes[self.root_id.index()]
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Lookup that reports a missing id as an error
    pub fn node(&self, id: NodeId) -> Result<&Node, PlanError> {
        self.get(id).ok_or(PlanError::UnknownNode(id))
    }

    /// Children of a node in append order; empty for files and unknown ids
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children()).unwrap_or(&[])
    }

    /// Find the parent NodeId for a given node
    ///
    /// Returns None if the node is the root or not found.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order walk of the whole tree
    pub fn walk(&self) -> Walker<'_> {
        Walker::new(self, self.root_id)
    }

    /// Pre-order walk of the subtree rooted at `id`
    pub fn walk_from(&self, id: NodeId) -> Walker<'_> {
        Walker::new(self, id)
    }

    /// File nodes in pre-order
    pub fn files(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.walk()
            .map(|(id, _)| id)
            .filter(move |id| self.get(*id).map(|n| !n.is_dir()).unwrap_or(false))
    }

    /// Find a node by its full path
    pub fn find(&self, full_path: &Path) -> Option<NodeId> {
        self.walk()
            .map(|(id, _)| id)
            .find(|id| self.get(*id).map(|n| n.full_path() == full_path).unwrap_or(false))
    }
}

/// Tree builder for planning a directory layout before it is materialized
pub struct TreeBuilder {
    tree: Tree,
}

impl TreeBuilder {
    /// Create the root directory node under the process working directory
    pub fn root(name: &str, permission: Permission) -> Result<Self, PlanError> {
        let cwd = std::env::current_dir().map_err(PlanError::WorkingDirectory)?;
        Self::root_in(&cwd, name, permission)
    }

    /// Create the root directory node under an explicit base directory
    #[instrument(skip(base), fields(base = %base.display()))]
    pub fn root_in(base: &Path, name: &str, permission: Permission) -> Result<Self, PlanError> {
        path::validate_segment(name)?;
        let root = Node::new(
            name.to_string(),
            NodeKind::Directory,
            permission,
            base.to_path_buf(),
            None,
        );
        debug!(root = %root.full_path().display(), "Planned root");
        Ok(Self {
            tree: Tree {
                root_id: NodeId::new(0),
                nodes: vec![root],
            },
        })
    }

    pub fn root_id(&self) -> NodeId {
        self.tree.root_id
    }

    /// Add a directory or file node under `parent`.
    ///
    /// The new node's parent path is the parent's full path. Sibling names are
    /// not checked for uniqueness; duplicates collide at materialization.
    pub fn node(
        &mut self,
        parent: NodeId,
        name: &str,
        permission: Permission,
        kind: NodeKind,
    ) -> Result<NodeId, PlanError> {
        path::validate_segment(name)?;
        let parent_node = self.tree.node(parent)?;
        if !parent_node.is_dir() {
            return Err(PlanError::NotADirectory(parent));
        }
        let parent_path = parent_node.full_path().to_path_buf();

        let id = NodeId::new(self.tree.nodes.len());
        let node = Node::new(name.to_string(), kind, permission, parent_path, Some(parent));
        trace!(node = %id, path = %node.full_path().display(), ?kind, "Planned node");
        self.tree.nodes.push(node);

        if let Some(parent_node) = self.tree.get_mut(parent) {
            parent_node.push_child(id);
        }
        Ok(id)
    }

    /// Read access to the tree planned so far
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Freeze the structure
    pub fn build(self) -> Tree {
        debug!(node_count = self.tree.len(), "Tree plan completed");
        self.tree
    }
}
