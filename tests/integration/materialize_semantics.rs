//! Materialization and content-writing behavior on a real filesystem

use super::test_utils::sample_tree;
use fsplan::deploy;
use fsplan::error::{IoOp, PlanError};
use fsplan::tree::TreeBuilder;
use fsplan::types::{NodeKind, Permission};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_second_generate_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let (tree, _) = sample_tree(temp_dir.path());

    deploy::generate(&tree).unwrap();
    let err = deploy::generate(&tree).unwrap_err();
    assert!(err.is_io());
}

#[test]
fn test_failed_subtree_is_not_rolled_back() {
    let temp_dir = TempDir::new().unwrap();
    let mut builder = TreeBuilder::root_in(temp_dir.path(), "build", Permission::ALL).unwrap();
    let root = builder.root_id();
    builder.node(root, "first", Permission::ALL, NodeKind::Directory).unwrap();
    builder.node(root, "dup", Permission::ALL, NodeKind::Directory).unwrap();
    let second = builder.node(root, "dup", Permission::ALL, NodeKind::Directory).unwrap();
    builder.node(second, "inner.txt", Permission::ALL, NodeKind::File).unwrap();
    builder.node(root, "last.txt", Permission::ALL, NodeKind::File).unwrap();
    let tree = builder.build();

    let err = deploy::generate(&tree).unwrap_err();

    assert!(matches!(err, PlanError::Io { op: IoOp::CreateDir, .. }));
    assert!(temp_dir.path().join("build/first").is_dir());
    assert!(temp_dir.path().join("build/dup").is_dir());
    assert!(!temp_dir.path().join("build/dup/inner.txt").exists());
    assert!(!temp_dir.path().join("build/last.txt").exists());
}

#[test]
fn test_rewrite_does_not_truncate() {
    let temp_dir = TempDir::new().unwrap();
    let (tree, ids) = sample_tree(temp_dir.path());
    deploy::generate(&tree).unwrap();

    deploy::write_file(&tree, ids.content1, b"Hello twice.").unwrap();
    deploy::write_file(&tree, ids.content1, b"Hello once.").unwrap();

    let on_disk = fs::read(tree.get(ids.content1).unwrap().full_path()).unwrap();
    assert_eq!(on_disk, b"Hello once..");
}

#[test]
fn test_write_before_generate_creates_file_when_parent_exists() {
    let temp_dir = TempDir::new().unwrap();
    let (tree, ids) = sample_tree(temp_dir.path());
    fs::create_dir(temp_dir.path().join("build")).unwrap();

    deploy::write_file(&tree, ids.content1, b"early").unwrap();
    assert_eq!(
        fs::read(temp_dir.path().join("build/content1.txt")).unwrap(),
        b"early"
    );
}
