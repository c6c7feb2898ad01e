//! Human-readable dump of a planned tree

use crate::tree::builder::Tree;
use crate::tree::node::Node;
use crate::types::NodeId;
use std::fmt::Write;

/// Marker repeated once per nesting level
pub const DEPTH_MARKER: &str = "---";

/// Spaces between the label column and the value column
const PADDING: usize = 3;

/// Rendering options
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Include hex SHA-1/SHA-256 lines for file nodes
    pub show_digests: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { show_digests: true }
    }
}

/// Render a single node as one block, without nesting markers
pub fn node_string(tree: &Tree, id: NodeId) -> String {
    let mut out = String::new();
    if let Some(node) = tree.get(id) {
        write_block(&mut out, node, 0, RenderOptions::default());
    }
    out
}

/// Render the whole tree, one block per node in pre-order
pub fn tree_string(tree: &Tree) -> String {
    tree_string_with(tree, RenderOptions::default())
}

pub fn tree_string_with(tree: &Tree, options: RenderOptions) -> String {
    let mut out = String::new();
    for (id, depth) in tree.walk() {
        if let Some(node) = tree.get(id) {
            write_block(&mut out, node, depth, options);
        }
    }
    out
}

fn write_block(out: &mut String, node: &Node, depth: usize, options: RenderOptions) {
    let offset = DEPTH_MARKER.repeat(depth);

    let mut rows: Vec<(&str, String)> = vec![
        ("Name:", node.name().to_string()),
        ("Is Directory:", node.is_dir().to_string()),
        ("Permissions:", node.permission().to_string()),
        ("Directory:", node.parent_path().display().to_string()),
        ("Full path:", node.full_path().display().to_string()),
    ];
    if !node.is_dir() && options.show_digests {
        rows.push(("SHA1:", node.sha1().map(hex::encode).unwrap_or_default()));
        rows.push(("SHA256:", node.sha256().map(hex::encode).unwrap_or_default()));
    }

    let cells: Vec<String> = rows
        .iter()
        .map(|(label, _)| format!("{} {}", offset, label))
        .collect();
    let width = cells.iter().map(|c| c.chars().count()).max().unwrap_or(0) + PADDING;

    for (cell, (_, value)) in cells.iter().zip(rows.iter()) {
        let _ = writeln!(out, "{:<width$} {}", cell, value, width = width);
    }
}

impl std::fmt::Display for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&tree_string(self))
    }
}
