//! Rendering of planned and deployed trees

use super::test_utils::sample_tree;
use fsplan::pipeline::Deployment;
use fsplan::tree::render::{self, DEPTH_MARKER};

fn depth_of(line: &str) -> usize {
    let mut depth = 0;
    let mut rest = line;
    while let Some(r) = rest.strip_prefix(DEPTH_MARKER) {
        depth += 1;
        rest = r;
    }
    depth
}

#[test]
fn test_one_block_per_node_in_preorder() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let (tree, _) = sample_tree(temp_dir.path());
    let out = render::tree_string(&tree);

    let blocks: Vec<(usize, String)> = out
        .lines()
        .filter(|l| l.contains(" Name:"))
        .map(|l| (depth_of(l), l.split_whitespace().last().unwrap().to_string()))
        .collect();
    assert_eq!(blocks.len(), tree.len());

    let expected: Vec<(usize, String)> = tree
        .walk()
        .map(|(id, depth)| (depth, tree.get(id).unwrap().name().to_string()))
        .collect();
    assert_eq!(blocks, expected);

    // Every line of a block shares its depth marker
    let full_paths: Vec<usize> = out
        .lines()
        .filter(|l| l.contains(" Full path:"))
        .map(depth_of)
        .collect();
    assert_eq!(full_paths, expected.iter().map(|(d, _)| *d).collect::<Vec<_>>());
}

#[test]
fn test_deployed_tree_renders_hex_digests() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let (tree, ids) = sample_tree(temp_dir.path());
    let tree = Deployment::new(tree)
        .with_content(ids.content1, "Hello once.")
        .run()
        .unwrap();

    let out = tree.to_string();
    let expected = hex::encode(fsplan::tree::hasher::sha256_of(b"Hello once."));
    assert!(out.contains(&expected));
    assert!(out.contains("-r--r--r--"));
}
