//! CLI parse: clap types for fsplan. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fsplan CLI - Declarative filesystem layout deployment
#[derive(Parser)]
#[command(name = "fsplan")]
#[command(about = "Plan a directory layout, deploy it, and digest every file")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (default: ./fsplan.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Deploy the layout described by a TOML manifest
    Deploy {
        /// Manifest path
        manifest: PathBuf,
        /// Directory to create the layout root in
        #[arg(long)]
        base: Option<PathBuf>,
        /// Do not print the deployed tree
        #[arg(long)]
        no_render: bool,
    },
    /// Deploy the built-in sample layout
    Demo {
        /// Directory to create the layout root in
        #[arg(long)]
        base: Option<PathBuf>,
    },
}
