//! Roles-path command - report the resolved roles path
//!
//! Locates the configuration file and prints the roles path it declares
//! without creating anything.

use super::CommandContext;
use anyhow::Result;
use clap::Parser;

/// Arguments for the roles-path command
#[derive(Parser, Debug, Clone)]
pub struct RolesPathArgs {}

impl RolesPathArgs {
    /// Execute the roles-path command
    pub fn execute(&self, ctx: &mut CommandContext) -> Result<i32> {
        let resolved = match ctx.resolve_roles_or_exit() {
            Ok(resolved) => resolved,
            Err(code) => return Ok(code),
        };

        if ctx.output.is_json() {
            ctx.output.result("roles_path", &resolved);
        } else {
            ctx.output
                .field("Configuration file", &resolved.config.display().to_string());
        }

        Ok(0)
    }
}
