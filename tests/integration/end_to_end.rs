//! Full pipeline over the sample layout

use super::test_utils::{count_entries, sample_tree};
use fsplan::deploy;
use fsplan::pipeline::Deployment;
use fsplan::tree::hasher;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_stages_in_order_over_sample_layout() {
    let temp_dir = TempDir::new().unwrap();
    let (mut tree, ids) = sample_tree(temp_dir.path());

    deploy::generate(&tree).unwrap();
    deploy::write_file(&tree, ids.content1, b"Hello once.").unwrap();
    deploy::write_file(&tree, ids.content2, b"Hello twice.").unwrap();
    hasher::build_hashes(&mut tree).unwrap();
    deploy::set_perms(&tree).unwrap();

    let build = temp_dir.path().join("build");
    assert_eq!(count_entries(&build), tree.len());
    assert_eq!(fs::read(build.join("content1.txt")).unwrap(), b"Hello once.");
    assert_eq!(
        fs::read(build.join("content/content2.txt")).unwrap(),
        b"Hello twice."
    );

    for (id, content) in [(ids.content1, &b"Hello once."[..]), (ids.content2, &b"Hello twice."[..])] {
        let node = tree.get(id).unwrap();
        let sha1: [u8; 20] = Sha1::digest(content).into();
        let sha256: [u8; 32] = Sha256::digest(content).into();
        assert_eq!(node.sha1(), Some(&sha1));
        assert_eq!(node.sha256(), Some(&sha256));
    }

    // Directories never carry digests
    assert!(tree.root().sha1().is_none());
    assert!(tree.get(ids.content).unwrap().sha256().is_none());
}

#[cfg(unix)]
#[test]
fn test_final_modes_and_root_asymmetry() {
    use super::test_utils::mode_of;

    let temp_dir = TempDir::new().unwrap();
    let (tree, ids) = sample_tree(temp_dir.path());
    let root_path = tree.root().full_path().to_path_buf();
    let content1_path = tree.get(ids.content1).unwrap().full_path().to_path_buf();
    let content2_path = tree.get(ids.content2).unwrap().full_path().to_path_buf();

    let tree = Deployment::new(tree)
        .with_content(ids.content1, "Hello once.")
        .with_content(ids.content2, "Hello twice.")
        .run()
        .unwrap();

    assert_eq!(mode_of(&content1_path), 0o444);
    assert_eq!(mode_of(&content2_path), 0o444);
    assert_ne!(mode_of(&root_path), 0o444);
    assert_eq!(tree.files().count(), 2);
}

#[test]
fn test_demo_deployment_matches_manual_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let tree = fsplan::cli::demo_deployment(Some(temp_dir.path()))
        .unwrap()
        .run()
        .unwrap();

    let file = tree
        .find(&temp_dir.path().join("build/content/content2.txt"))
        .unwrap();
    assert_eq!(
        tree.get(file).unwrap().sha256(),
        Some(&hasher::sha256_of(b"Hello twice."))
    );
}
