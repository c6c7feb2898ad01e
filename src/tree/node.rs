//! Planned filesystem node

use crate::types::{NodeId, NodeKind, Permission, Sha1Digest, Sha256Digest};
use std::path::{Path, PathBuf};

/// A planned directory or file.
///
/// `full_path` is derived from `parent_path` and `name` once, when the node is
/// created, and never changes afterwards. Digests stay `None` until the hash
/// engine has run over the node, and are only ever set on file nodes.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    kind: NodeKind,
    permission: Permission,
    parent_path: PathBuf,
    full_path: PathBuf,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    pub(crate) sha1: Option<Sha1Digest>,
    pub(crate) sha256: Option<Sha256Digest>,
}

impl Node {
    pub(crate) fn new(
        name: String,
        kind: NodeKind,
        permission: Permission,
        parent_path: PathBuf,
        parent: Option<NodeId>,
    ) -> Self {
        let full_path = parent_path.join(&name);
        Self {
            name,
            kind,
            permission,
            parent_path,
            full_path,
            parent,
            children: Vec::new(),
            sha1: None,
            sha256: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Target permission, applied during permission finalization
    pub fn permission(&self) -> Permission {
        self.permission
    }

    /// Absolute path of the containing directory
    pub fn parent_path(&self) -> &Path {
        &self.parent_path
    }

    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Containing node; `None` for the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in append order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn sha1(&self) -> Option<&Sha1Digest> {
        self.sha1.as_ref()
    }

    pub fn sha256(&self) -> Option<&Sha256Digest> {
        self.sha256.as_ref()
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }
}
