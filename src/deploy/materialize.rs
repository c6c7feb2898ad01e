//! Materializer: create planned directories and files on disk

use crate::deploy::chmod;
use crate::error::{IoOp, PlanError};
use crate::tree::builder::Tree;
use crate::types::{NodeId, Permission};
use std::fs::OpenOptions;
use tracing::{debug, instrument, trace};

/// Create every node of the tree on disk, starting at the root
pub fn generate(tree: &Tree) -> Result<(), PlanError> {
    generate_from(tree, tree.root_id())?;
    debug!(node_count = tree.len(), "Tree materialized");
    Ok(())
}

/// Create the subtree rooted at `id`.
///
/// Pre-order, children in append order. Everything is created with the
/// permissive mode; target permissions are applied by `set_perms` once
/// content has been written. The first failure stops the walk and is returned
/// as-is. Nothing already created is removed, and an entry that already
/// exists counts as a failure.
///
/// Files are created exclusively, never truncated. Two sibling files with the
/// same name are therefore rejected: the second one fails with
/// `AlreadyExists` instead of silently replacing the first.
#[instrument(skip(tree))]
pub fn generate_from(tree: &Tree, id: NodeId) -> Result<(), PlanError> {
    let node = tree.node(id)?;
    let path = node.full_path();

    if node.is_dir() {
        create_dir(path)?;
        trace!(path = %path.display(), "Created directory");
        for child in node.children() {
            generate_from(tree, *child)?;
        }
    } else {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| PlanError::io(IoOp::CreateFile, path, e))?;
        chmod(path, Permission::ALL)?;
        trace!(path = %path.display(), "Created file");
    }
    Ok(())
}

fn create_dir(path: &std::path::Path) -> Result<(), PlanError> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        std::fs::DirBuilder::new()
            .mode(Permission::ALL.mode())
            .create(path)
            .map_err(|e| PlanError::io(IoOp::CreateDir, path, e))
    }
    #[cfg(not(unix))]
    {
        std::fs::create_dir(path).map_err(|e| PlanError::io(IoOp::CreateDir, path, e))
    }
}
