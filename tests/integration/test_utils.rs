//! Shared test utilities for integration tests

use fsplan::tree::{Tree, TreeBuilder};
use fsplan::types::{NodeId, NodeKind, Permission};
use std::fs;
use std::path::Path;

/// Ids of the nodes in the sample layout
pub struct SampleIds {
    pub content: NodeId,
    pub content1: NodeId,
    pub content2: NodeId,
}

/// Plan the sample layout under `base`:
///
/// ```text
/// build/
///   content/
///     content2.txt  (0444)
///   content1.txt    (0444)
/// ```
pub fn sample_tree(base: &Path) -> (Tree, SampleIds) {
    let mut builder = TreeBuilder::root_in(base, "build", Permission::ALL).unwrap();
    let root = builder.root_id();
    let content = builder
        .node(root, "content", Permission::ALL, NodeKind::Directory)
        .unwrap();
    let content1 = builder
        .node(root, "content1.txt", Permission::READ_ONLY, NodeKind::File)
        .unwrap();
    let content2 = builder
        .node(content, "content2.txt", Permission::READ_ONLY, NodeKind::File)
        .unwrap();
    (
        builder.build(),
        SampleIds {
            content,
            content1,
            content2,
        },
    )
}

/// Count directories and regular files below (and including) `path`
pub fn count_entries(path: &Path) -> usize {
    let meta = fs::symlink_metadata(path).unwrap();
    if meta.is_dir() {
        1 + fs::read_dir(path)
            .unwrap()
            .map(|e| count_entries(&e.unwrap().path()))
            .sum::<usize>()
    } else {
        1
    }
}

#[cfg(unix)]
pub fn mode_of(path: &Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path).unwrap().permissions().mode() & 0o7777
}
