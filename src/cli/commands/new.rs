//! New command - scaffold a playbook
//!
//! This module implements the `new` subcommand and the default invocation
//! used when no subcommand is given.

use super::CommandContext;
use anyhow::Result;
use clap::Parser;
use playwright::playbook::{PlaybookRequest, StructureGenerator};

/// Arguments for the new command
#[derive(Parser, Debug, Clone)]
pub struct NewArgs {
    /// Name of the playbook directory to create
    #[arg(required = true)]
    pub name: String,

    /// Create a handlers folder
    #[arg(long)]
    pub with_handlers: bool,

    /// Create a templates folder
    #[arg(long)]
    pub with_templates: bool,

    /// Create a files folder
    #[arg(long)]
    pub with_files: bool,

    /// Create a vars folder
    #[arg(long)]
    pub with_vars: bool,

    /// Create a defaults folder
    #[arg(long)]
    pub with_defaults: bool,

    /// Create a meta folder
    #[arg(long)]
    pub with_meta: bool,

    /// Create every folder
    #[arg(long)]
    pub all: bool,
}

impl NewArgs {
    /// Build the scaffolding request described by these flags
    pub fn request(&self) -> PlaybookRequest {
        PlaybookRequest {
            name: self.name.clone(),
            with_handlers: self.with_handlers,
            with_templates: self.with_templates,
            with_files: self.with_files,
            with_vars: self.with_vars,
            with_defaults: self.with_defaults,
            with_meta: self.with_meta,
            all: self.all,
        }
    }

    /// Execute the new command
    pub fn execute(&self, ctx: &mut CommandContext) -> Result<i32> {
        scaffold(ctx, &self.request())
    }
}

/// Scaffold `my-playbook` with tasks only
pub fn execute_default(ctx: &mut CommandContext) -> Result<i32> {
    scaffold(ctx, &PlaybookRequest::new(playwright::playbook::DEFAULT_PLAYBOOK_NAME))
}

fn scaffold(ctx: &mut CommandContext, request: &PlaybookRequest) -> Result<i32> {
    // Stop here rather than scaffold under an empty roles path
    let resolved = match ctx.resolve_roles_or_exit() {
        Ok(resolved) => resolved,
        Err(code) => return Ok(code),
    };

    let folders: Vec<String> = request.folders().iter().map(ToString::to_string).collect();
    ctx.output.info(&format!(
        "Creating playbook '{}' with folders: {}",
        request.name,
        folders.join(", ")
    ));

    match StructureGenerator::new().generate_request(&resolved.roles_path, request) {
        Ok(layout) => {
            ctx.report_layout(&layout);
            Ok(0)
        }
        Err(e) => Ok(ctx.fail(&e)),
    }
}
