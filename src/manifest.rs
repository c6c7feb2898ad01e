//! Declarative layout manifest
//!
//! A TOML description of a directory layout that plans straight into a
//! `Deployment`:
//!
//! ```toml
//! [root]
//! name = "build"
//!
//! [[root.children]]
//! name = "content"
//! kind = "directory"
//!
//! [[root.children.children]]
//! name = "content2.txt"
//! mode = "0444"
//! content = "Hello twice."
//! ```

use crate::error::PlanError;
use crate::pipeline::Deployment;
use crate::tree::builder::TreeBuilder;
use crate::types::{NodeId, NodeKind, Permission};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Parsed manifest
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub root: RootEntry,
}

/// The root directory of a manifest
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RootEntry {
    pub name: String,
    pub mode: Option<String>,
    #[serde(default)]
    pub children: Vec<Entry>,
}

/// A directory or file below the root
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Entry {
    pub name: String,
    #[serde(default)]
    pub kind: NodeKind,
    pub mode: Option<String>,
    pub content: Option<String>,
    #[serde(default)]
    pub children: Vec<Entry>,
}

impl Manifest {
    pub fn from_toml_str(s: &str) -> Result<Self, PlanError> {
        toml::from_str(s).map_err(|e| PlanError::Manifest(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, PlanError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            PlanError::Manifest(format!("Failed to read manifest {:?}: {}", path, e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Plan the manifest under `base`, or under the working directory when
    /// no base is given.
    pub fn plan(&self, base: Option<&Path>) -> Result<Deployment, PlanError> {
        let root_mode = parse_mode(self.root.mode.as_deref(), &self.root.name)?;
        let mut builder = match base {
            Some(base) => TreeBuilder::root_in(base, &self.root.name, root_mode)?,
            None => TreeBuilder::root(&self.root.name, root_mode)?,
        };

        let mut contents = Vec::new();
        let root = builder.root_id();
        for entry in &self.root.children {
            add_entry(&mut builder, root, entry, &mut contents)?;
        }

        let mut deployment = Deployment::new(builder.build());
        for (id, content) in contents {
            deployment.add_content(id, content);
        }
        debug!(
            node_count = deployment.tree().len(),
            files_with_content = deployment.contents().len(),
            "Planned manifest"
        );
        Ok(deployment)
    }
}

fn add_entry(
    builder: &mut TreeBuilder,
    parent: NodeId,
    entry: &Entry,
    contents: &mut Vec<(NodeId, Vec<u8>)>,
) -> Result<(), PlanError> {
    match entry.kind {
        NodeKind::Directory if entry.content.is_some() => {
            return Err(PlanError::Manifest(format!(
                "directory '{}' cannot have content",
                entry.name
            )));
        }
        NodeKind::File if !entry.children.is_empty() => {
            return Err(PlanError::Manifest(format!(
                "file '{}' cannot have children",
                entry.name
            )));
        }
        _ => {}
    }

    let mode = parse_mode(entry.mode.as_deref(), &entry.name)?;
    let id = builder.node(parent, &entry.name, mode, entry.kind)?;
    if let Some(content) = &entry.content {
        contents.push((id, content.clone().into_bytes()));
    }
    for child in &entry.children {
        add_entry(builder, id, child, contents)?;
    }
    Ok(())
}

fn parse_mode(mode: Option<&str>, name: &str) -> Result<Permission, PlanError> {
    match mode {
        None => Ok(Permission::ALL),
        Some(s) => Permission::parse_octal(s).ok_or_else(|| {
            PlanError::Manifest(format!("invalid mode {:?} for '{}'", s, name))
        }),
    }
}
