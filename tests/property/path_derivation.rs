//! Property-based tests for path derivation and traversal order

use fsplan::tree::TreeBuilder;
use fsplan::types::{NodeId, NodeKind, Permission};
use proptest::prelude::*;
use std::path::Path;

/// A random tree shape: for each new node, the index of an earlier node to
/// attach to and whether the new node is a directory.
fn shape() -> impl Strategy<Value = Vec<(usize, bool, String)>> {
    prop::collection::vec((any::<usize>(), any::<bool>(), "[a-z0-9_.-]{1,12}"), 0..40)
}

/// Test that every node's paths derive from its parent
#[test]
fn test_full_path_derivation_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&shape(), |steps| {
            prop_assume!(steps.iter().all(|(_, _, name)| name != "." && name != ".."));

            let mut builder =
                TreeBuilder::root_in(Path::new("/plan"), "root", Permission::ALL).unwrap();
            let mut dirs: Vec<NodeId> = vec![builder.root_id()];
            for (pick, is_dir, name) in &steps {
                let parent = dirs[pick % dirs.len()];
                let kind = if *is_dir { NodeKind::Directory } else { NodeKind::File };
                let id = builder.node(parent, name, Permission::ALL, kind).unwrap();
                if *is_dir {
                    dirs.push(id);
                }
            }
            let tree = builder.build();

            for (id, _) in tree.walk() {
                let node = tree.get(id).unwrap();
                let derived = node.parent_path().join(node.name());
                prop_assert_eq!(node.full_path(), derived.as_path());
                match tree.parent(id) {
                    Some(parent) => {
                        prop_assert_eq!(node.parent_path(), tree.get(parent).unwrap().full_path())
                    }
                    None => prop_assert_eq!(node.parent_path(), Path::new("/plan")),
                }
                if !node.is_dir() {
                    prop_assert!(node.children().is_empty());
                }
            }
            prop_assert_eq!(tree.walk().count(), steps.len() + 1);

            Ok(())
        })
        .unwrap();
}

/// Test that walk depth only grows by one step at a time
#[test]
fn test_walk_depth_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&shape(), |steps| {
            prop_assume!(steps.iter().all(|(_, _, name)| name != "." && name != ".."));

            let mut builder =
                TreeBuilder::root_in(Path::new("/plan"), "root", Permission::ALL).unwrap();
            let mut dirs: Vec<NodeId> = vec![builder.root_id()];
            for (pick, is_dir, name) in &steps {
                let parent = dirs[pick % dirs.len()];
                let kind = if *is_dir { NodeKind::Directory } else { NodeKind::File };
                let id = builder.node(parent, name, Permission::ALL, kind).unwrap();
                if *is_dir {
                    dirs.push(id);
                }
            }
            let tree = builder.build();

            let depths: Vec<usize> = tree.walk().map(|(_, d)| d).collect();
            prop_assert_eq!(depths[0], 0);
            for pair in depths.windows(2) {
                prop_assert!(pair[1] <= pair[0] + 1);
                prop_assert!(pair[1] >= 1);
            }

            Ok(())
        })
        .unwrap();
}
