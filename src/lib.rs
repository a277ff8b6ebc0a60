//! # Playwright - Ansible Playbook Scaffolding
//!
//! Playwright creates the directory skeleton for a new Ansible playbook
//! under the roles path declared by the active Ansible configuration.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────────┐    ┌────────────────────┐    ┌──────────────────────┐
//! │  ConfigLocator   │───▶│ RolesPathResolver  │───▶│ StructureGenerator   │
//! │ (ANSIBLE_CONFIG, │    │ (roles_path = a:b) │    │ (<roles>/<name>/...) │
//! │  ./ansible.cfg)  │    │                    │    │                      │
//! └──────────────────┘    └────────────────────┘    └──────────────────────┘
//! ```
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! use playwright::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = ConfigLocator::from_env().locate()?;
//!     let roles_path = RolesPathResolver::new().resolve(&config)?;
//!
//!     let request = PlaybookRequest {
//!         with_handlers: true,
//!         ..PlaybookRequest::new("webserver")
//!     };
//!     let layout = StructureGenerator::new().generate_request(&roles_path, &request)?;
//!
//!     println!("Created {} folders", layout.directories.len());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export commonly used items in prelude
pub mod prelude {
    //! Convenient re-exports of commonly used types.

    pub use crate::config::{ConfigLocator, FsProbe, PathProbe, SearchPaths};
    pub use crate::error::{Error, Result};
    pub use crate::playbook::{Folder, PlaybookLayout, PlaybookRequest, StructureGenerator};
    pub use crate::roles::RolesPathResolver;
}

/// Error types and result aliases for Playwright operations.
pub mod error;

/// Configuration file discovery.
///
/// Finds the Ansible configuration file from the `ANSIBLE_CONFIG` override
/// or the standard project and system locations.
pub mod config;

/// Roles path resolution from the configuration file.
pub mod roles;

/// Playbook skeleton generation.
pub mod playbook;

/// String-level path joining shared by the resolver and the generator.
pub mod paths;

pub use error::{Error, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
