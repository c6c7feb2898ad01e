//! Error types for filesystem plan construction and deployment.

use crate::types::NodeId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while planning, deploying, hashing or finalizing a tree
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Failed to resolve working directory: {0}")]
    WorkingDirectory(#[source] std::io::Error),

    #[error("I/O error during {op} on {path:?}: {source}")]
    Io {
        op: IoOp,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Node {0} is not a directory and cannot hold children")]
    NotADirectory(NodeId),

    #[error("Node {0} is not a file")]
    NotAFile(NodeId),

    #[error("Invalid node name: {0:?}")]
    InvalidName(String),

    #[error("Node not found: {0}")]
    UnknownNode(NodeId),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Deployment stage '{stage}' failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: Box<PlanError>,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PlanError {
    pub(crate) fn io(op: IoOp, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlanError::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// True for the I/O class of failures (create, chmod, open, read, write)
    pub fn is_io(&self) -> bool {
        match self {
            PlanError::Io { .. } => true,
            PlanError::Stage { source, .. } => source.is_io(),
            _ => false,
        }
    }
}

impl From<config::ConfigError> for PlanError {
    fn from(err: config::ConfigError) -> Self {
        PlanError::Config(err.to_string())
    }
}

/// Filesystem operation that produced an I/O failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOp {
    CreateDir,
    CreateFile,
    Chmod,
    Open,
    Read,
    Write,
}

impl std::fmt::Display for IoOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            IoOp::CreateDir => "create_dir",
            IoOp::CreateFile => "create_file",
            IoOp::Chmod => "chmod",
            IoOp::Open => "open",
            IoOp::Read => "read",
            IoOp::Write => "write",
        };
        f.write_str(name)
    }
}

/// Pipeline stage, in mandatory execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Materialize,
    WriteContent,
    Hash,
    Permissions,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Materialize => "materialize",
            Stage::WriteContent => "write-content",
            Stage::Hash => "hash",
            Stage::Permissions => "permissions",
        };
        f.write_str(name)
    }
}
