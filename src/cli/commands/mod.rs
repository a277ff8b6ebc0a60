//! Subcommands module for Playwright CLI
//!
//! This module contains all the subcommand implementations.

pub mod new;
pub mod roles_path;

use crate::cli::output::OutputFormatter;
use playwright::config::{ConfigLocator, SearchPaths};
use playwright::playbook::PlaybookLayout;
use playwright::roles::RolesPathResolver;
use std::path::PathBuf;

/// Common context shared between commands
pub struct CommandContext {
    /// Output formatter
    pub output: OutputFormatter,
    /// Where to look for the Ansible configuration file
    pub search: SearchPaths,
}

/// A located configuration file and the roles path it declares
#[derive(Debug, Clone, serde::Serialize)]
pub struct ResolvedRoles {
    /// Configuration file that was read
    pub config: PathBuf,
    /// Resolved roles path
    pub roles_path: String,
}

impl CommandContext {
    /// Create a new command context from CLI arguments
    pub fn new(cli: &crate::cli::Cli, search: SearchPaths) -> Self {
        let output = OutputFormatter::new(!cli.no_color, cli.is_json(), cli.verbosity());

        let search = match &cli.config {
            Some(path) => search.with_override(path.to_string_lossy()),
            None => search,
        };

        Self { output, search }
    }

    /// Locate the configuration file and resolve the roles path from it
    pub fn resolve_roles(&self) -> playwright::Result<ResolvedRoles> {
        let config = ConfigLocator::new(self.search.clone()).locate()?;
        self.output
            .debug(&format!("Using configuration file: {}", config.display()));

        let roles_path = RolesPathResolver::new().resolve(&config)?;
        Ok(ResolvedRoles { config, roles_path })
    }

    /// Resolve the roles path, reporting it, or report the failure and
    /// return the exit code to use.
    pub fn resolve_roles_or_exit(&self) -> std::result::Result<ResolvedRoles, i32> {
        match self.resolve_roles() {
            Ok(resolved) => {
                self.output.field("Roles path is", &resolved.roles_path);
                Ok(resolved)
            }
            Err(e) => Err(self.fail(&e)),
        }
    }

    /// Print what a generation run created
    pub fn report_layout(&self, layout: &PlaybookLayout) {
        if self.output.is_json() {
            self.output.result("playbook", layout);
            return;
        }

        let created: Vec<String> = layout
            .directories
            .iter()
            .chain(layout.files.iter())
            .map(|p| p.display().to_string())
            .collect();
        self.output.list(
            &format!("Created playbook at {}", layout.root.display()),
            &created,
        );
    }

    /// Report a library error and return its exit code
    pub fn fail(&self, err: &playwright::Error) -> i32 {
        self.output.error(&err.to_string());
        if let Some(source) = std::error::Error::source(err) {
            self.output.debug(&format!("Caused by: {}", source));
        }
        if err.is_config_error() {
            self.output.warning(
                "No playbook was created. Set ANSIBLE_CONFIG or pass --config to point at an ansible.cfg.",
            );
        }
        err.exit_code()
    }
}
