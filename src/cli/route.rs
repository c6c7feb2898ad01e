//! CLI route: run context and command dispatch.

use crate::cli::parse::Commands;
use crate::config::{ConfigLoader, FsPlanConfig};
use crate::error::PlanError;
use crate::manifest::Manifest;
use crate::pipeline::Deployment;
use crate::tree::builder::{Tree, TreeBuilder};
use crate::tree::render::{tree_string_with, RenderOptions};
use crate::types::{NodeKind, Permission};
use std::path::{Path, PathBuf};
use tracing::info;

/// Runtime context for CLI execution, built from the loaded configuration
pub struct RunContext {
    config: FsPlanConfig,
}

impl RunContext {
    /// Load configuration from `config_path`, or from the working directory
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, PlanError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(&path)?,
            None => {
                let cwd = std::env::current_dir().map_err(PlanError::WorkingDirectory)?;
                ConfigLoader::load(&cwd)?
            }
        };
        Ok(Self { config })
    }

    pub fn from_config(config: FsPlanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FsPlanConfig {
        &self.config
    }

    /// Execute a command and return the text to print
    pub fn execute(&self, command: &Commands) -> Result<String, PlanError> {
        match command {
            Commands::Deploy {
                manifest,
                base,
                no_render,
            } => {
                info!(manifest = %manifest.display(), "Deploying manifest");
                let plan = Manifest::load(manifest)?;
                let deployment = plan.plan(self.base_dir(base.as_deref()))?;
                let tree = deployment.run()?;
                Ok(self.present(&tree, !*no_render))
            }
            Commands::Demo { base } => {
                info!("Deploying sample layout");
                let deployment = demo_deployment(self.base_dir(base.as_deref()))?;
                let tree = deployment.run()?;
                Ok(self.present(&tree, true))
            }
        }
    }

    fn base_dir<'a>(&'a self, flag: Option<&'a Path>) -> Option<&'a Path> {
        flag.or(self.config.deploy.base_dir.as_deref())
    }

    fn present(&self, tree: &Tree, render: bool) -> String {
        if render && self.config.deploy.render {
            tree_string_with(
                tree,
                RenderOptions {
                    show_digests: self.config.deploy.show_digests,
                },
            )
        } else {
            format!(
                "Deployed {} nodes to {}",
                tree.len(),
                tree.root().full_path().display()
            )
        }
    }
}

/// The sample layout: `build/` holding `content/content2.txt` and
/// `content1.txt`, both files read-only.
pub fn demo_deployment(base: Option<&Path>) -> Result<Deployment, PlanError> {
    let mut builder = match base {
        Some(base) => TreeBuilder::root_in(base, "build", Permission::ALL)?,
        None => TreeBuilder::root("build", Permission::ALL)?,
    };
    let root = builder.root_id();
    let content = builder.node(root, "content", Permission::ALL, NodeKind::Directory)?;
    let file1 = builder.node(root, "content1.txt", Permission::READ_ONLY, NodeKind::File)?;
    let file2 = builder.node(content, "content2.txt", Permission::READ_ONLY, NodeKind::File)?;

    Ok(Deployment::new(builder.build())
        .with_content(file1, "Hello once.")
        .with_content(file2, "Hello twice."))
}
