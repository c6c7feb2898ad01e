//! Content writer for materialized file nodes

use crate::error::{IoOp, PlanError};
use crate::tree::builder::Tree;
use crate::types::NodeId;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::trace;

/// Write `content` into the file node `id`, starting at offset zero.
///
/// The file is opened read-write and created if absent. It is not truncated:
/// writing fewer bytes than the file already holds leaves the old tail in
/// place.
pub fn write_file(tree: &Tree, id: NodeId, content: &[u8]) -> Result<(), PlanError> {
    let node = tree.node(id)?;
    if node.is_dir() {
        return Err(PlanError::NotAFile(id));
    }
    let path = node.full_path();

    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .open(path)
        .map_err(|e| PlanError::io(IoOp::Open, path, e))?;
    file.write_all(content)
        .map_err(|e| PlanError::io(IoOp::Write, path, e))?;

    trace!(path = %path.display(), bytes = content.len(), "Wrote file content");
    Ok(())
}
