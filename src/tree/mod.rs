//! Planned Filesystem Tree
//!
//! An in-memory plan of directories and files, the digests computed over the
//! deployed files, and a human-readable rendering of the whole plan.

pub mod builder;
pub mod hasher;
pub mod node;
pub mod path;
pub mod render;
pub mod walker;

pub use builder::{Tree, TreeBuilder};
pub use node::Node;
