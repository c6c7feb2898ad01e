//! Deployment pipeline
//!
//! Runs the stages over a planned tree in their mandatory order:
//! materialize, write content, hash, finalize permissions.

use crate::deploy;
use crate::error::{PlanError, Stage};
use crate::tree::builder::Tree;
use crate::tree::hasher;
use crate::types::NodeId;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// A planned tree plus the bytes to write into its file nodes
#[derive(Debug, Clone)]
pub struct Deployment {
    tree: Tree,
    contents: Vec<(NodeId, Vec<u8>)>,
}

impl Deployment {
    pub fn new(tree: Tree) -> Self {
        Self {
            tree,
            contents: Vec::new(),
        }
    }

    /// Queue content for a file node. Writes happen in queue order.
    pub fn with_content(mut self, id: NodeId, content: impl Into<Vec<u8>>) -> Self {
        self.contents.push((id, content.into()));
        self
    }

    pub fn add_content(&mut self, id: NodeId, content: impl Into<Vec<u8>>) {
        self.contents.push((id, content.into()));
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn contents(&self) -> &[(NodeId, Vec<u8>)] {
        &self.contents
    }

    /// Run every stage and return the hashed tree.
    ///
    /// Stops at the first failing stage; whatever was created on disk up to
    /// that point is left in place.
    #[instrument(skip_all)]
    pub fn run(self) -> Result<Tree, PlanError> {
        let start = Instant::now();
        let Deployment { mut tree, contents } = self;
        debug!(root = %tree.root().full_path().display(), "Starting deployment");

        deploy::generate(&tree).map_err(|e| staged(Stage::Materialize, e))?;
        debug!("Materialized tree");

        for (id, content) in &contents {
            deploy::write_file(&tree, *id, content).map_err(|e| staged(Stage::WriteContent, e))?;
        }
        debug!(files_written = contents.len(), "Wrote file contents");

        hasher::build_hashes(&mut tree).map_err(|e| staged(Stage::Hash, e))?;
        debug!("Computed digests");

        deploy::set_perms(&tree).map_err(|e| staged(Stage::Permissions, e))?;

        info!(
            node_count = tree.len(),
            duration_ms = start.elapsed().as_millis(),
            "Deployment completed"
        );
        Ok(tree)
    }
}

fn staged(stage: Stage, source: PlanError) -> PlanError {
    PlanError::Stage {
        stage,
        source: Box::new(source),
    }
}
