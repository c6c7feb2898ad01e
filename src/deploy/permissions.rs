//! Permission finalization

use crate::deploy::chmod;
use crate::error::PlanError;
use crate::tree::builder::Tree;
use crate::types::NodeId;
use tracing::{instrument, trace};

/// Apply each node's configured permission, starting below the root.
///
/// The root itself is never touched and keeps the mode it was created with.
pub fn set_perms(tree: &Tree) -> Result<(), PlanError> {
    set_perms_from(tree, tree.root_id())
}

/// Apply configured permissions to every descendant of `id` (not `id` itself).
///
/// Each child is chmod-ed before its own subtree is visited, siblings in
/// append order. Stops at the first failure.
#[instrument(skip(tree))]
pub fn set_perms_from(tree: &Tree, id: NodeId) -> Result<(), PlanError> {
    let node = tree.node(id)?;
    for child_id in node.children() {
        let child = tree.node(*child_id)?;
        chmod(child.full_path(), child.permission())?;
        trace!(path = %child.full_path().display(), mode = %child.permission(), "Applied permission");
        set_perms_from(tree, *child_id)?;
    }
    Ok(())
}
