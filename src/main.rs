//! Playwright - Ansible playbook scaffolding
//!
//! This is the main entry point for the Playwright CLI.

mod cli;

use anyhow::Result;
use cli::commands::CommandContext;
use cli::{Cli, Commands};
use playwright::config::SearchPaths;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Application version information
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    if cli.verbosity() >= 2 {
        eprintln!("Playwright v{}", VERSION);
    }

    let mut ctx = CommandContext::new(&cli, SearchPaths::from_env());

    let exit_code = match &cli.command {
        None => cli::commands::new::execute_default(&mut ctx)?,
        Some(Commands::New(args)) => args.execute(&mut ctx)?,
        Some(Commands::RolesPath(args)) => args.execute(&mut ctx)?,
    };

    ctx.output.flush();
    std::process::exit(exit_code);
}

/// Initialize logging based on verbosity level
fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(verbosity >= 3))
        .with(env_filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
