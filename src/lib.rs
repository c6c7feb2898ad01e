//! fsplan: Declarative Filesystem Layout Deployment
//!
//! Plan a directory subtree in memory, realize it on disk, write file
//! contents, compute SHA-1 and SHA-256 digests of every file, then apply the
//! planned permissions.
//!
//! ```no_run
//! use fsplan::deploy;
//! use fsplan::tree::{hasher, TreeBuilder};
//! use fsplan::types::{NodeKind, Permission};
//!
//! # fn main() -> Result<(), fsplan::error::PlanError> {
//! let mut builder = TreeBuilder::root("build", Permission::ALL)?;
//! let root = builder.root_id();
//! let file = builder.node(root, "content1.txt", Permission::READ_ONLY, NodeKind::File)?;
//! let mut tree = builder.build();
//!
//! deploy::generate(&tree)?;
//! deploy::write_file(&tree, file, b"Hello once.")?;
//! hasher::build_hashes(&mut tree)?;
//! deploy::set_perms(&tree)?;
//! println!("{}", tree);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod deploy;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod pipeline;
pub mod tree;
pub mod types;
