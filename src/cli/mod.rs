//! CLI module for Playwright
//!
//! This module provides the command-line interface for Playwright,
//! including argument parsing and subcommand handling.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Playwright - Ansible playbook scaffolding
///
/// Creates the directory skeleton for a new playbook under the configured
/// roles path. Without a subcommand, scaffolds `my-playbook` with tasks only.
#[derive(Parser, Debug, Clone)]
#[command(name = "playwright")]
#[command(version)]
#[command(about = "Scaffold Ansible playbook directory structures", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Human)]
    pub output: OutputFormat,

    /// Path to the Ansible configuration file (overrides ANSIBLE_CONFIG)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output with colors
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a new playbook structure
    New(commands::new::NewArgs),

    /// Print the configuration file and roles path in use
    #[command(name = "roles-path")]
    RolesPath(commands::roles_path::RolesPathArgs),
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Get the effective verbosity level (0-3)
    pub fn verbosity(&self) -> u8 {
        self.verbose.min(3)
    }

    /// Check if JSON output is requested
    pub fn is_json(&self) -> bool {
        matches!(self.output, OutputFormat::Json)
    }
}
