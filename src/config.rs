//! Configuration file discovery for Playwright
//!
//! Locates the Ansible configuration file by checking, in order:
//! - The `ANSIBLE_CONFIG` environment variable (trusted without a stat)
//! - Project configuration (./ansible.cfg)
//! - Project dotfile (./.ansible.cfg)
//! - System configuration (/etc/ansible/ansible.cfg)
//!
//! The candidate list and the existence check are both injectable so the
//! discovery order can be exercised without touching the real environment.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable that overrides file-based discovery.
pub const ANSIBLE_CONFIG_VAR: &str = "ANSIBLE_CONFIG";

/// Project configuration file.
pub const ANSIBLE_CONFIG: &str = "./ansible.cfg";

/// Project configuration dotfile.
pub const ANSIBLE_CONFIG_DOT: &str = "./.ansible.cfg";

/// System-wide configuration file.
pub const ANSIBLE_CONFIG_OS: &str = "/etc/ansible/ansible.cfg";

/// Where to look for the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPaths {
    /// Name of the override environment variable
    pub env_var: String,

    /// Value of the override captured at construction
    pub env_override: Option<String>,

    /// File candidates, highest priority first
    pub candidates: Vec<PathBuf>,
}

impl Default for SearchPaths {
    fn default() -> Self {
        Self {
            env_var: ANSIBLE_CONFIG_VAR.to_string(),
            env_override: None,
            candidates: vec![
                PathBuf::from(ANSIBLE_CONFIG),
                PathBuf::from(ANSIBLE_CONFIG_DOT),
                PathBuf::from(ANSIBLE_CONFIG_OS),
            ],
        }
    }
}

impl SearchPaths {
    /// Default candidates with the override read from the process environment.
    pub fn from_env() -> Self {
        let mut paths = Self::default();
        paths.env_override = std::env::var(&paths.env_var).ok();
        paths
    }

    /// Replace the override value, e.g. with an explicit `--config` path.
    pub fn with_override(mut self, value: impl Into<String>) -> Self {
        self.env_override = Some(value.into());
        self
    }

    /// Replace the file candidates.
    pub fn with_candidates<I, P>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.candidates = candidates.into_iter().map(Into::into).collect();
        self
    }

    /// The override value, if set and non-empty.
    pub fn override_path(&self) -> Option<&str> {
        self.env_override.as_deref().filter(|v| !v.is_empty())
    }
}

/// Answers whether a path exists.
pub trait PathProbe {
    /// Returns true if `path` exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl PathProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        std::fs::metadata(path).is_ok()
    }
}

impl<F> PathProbe for F
where
    F: Fn(&Path) -> bool,
{
    fn exists(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Finds the active configuration file.
#[derive(Debug, Clone)]
pub struct ConfigLocator<P = FsProbe> {
    search: SearchPaths,
    probe: P,
}

impl ConfigLocator<FsProbe> {
    /// Locator using the process environment and the real filesystem.
    pub fn from_env() -> Self {
        Self::new(SearchPaths::from_env())
    }

    /// Locator over `search` using the real filesystem.
    pub fn new(search: SearchPaths) -> Self {
        Self::with_probe(search, FsProbe)
    }
}

impl<P: PathProbe> ConfigLocator<P> {
    /// Locator over `search` using a custom existence check.
    pub fn with_probe(search: SearchPaths, probe: P) -> Self {
        Self { search, probe }
    }

    /// The search configuration in use.
    pub fn search_paths(&self) -> &SearchPaths {
        &self.search
    }

    /// The existence check in use.
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Returns the first configuration file found.
    pub fn locate(&self) -> Result<PathBuf> {
        if let Some(path) = self.search.override_path() {
            info!(var = %self.search.env_var, path, "Using configuration from environment");
            return Ok(PathBuf::from(path));
        }

        for candidate in &self.search.candidates {
            if self.probe.exists(candidate) {
                info!(path = %candidate.display(), "Found configuration file");
                return Ok(candidate.clone());
            }
            debug!(path = %candidate.display(), "Configuration candidate not present");
        }

        Err(Error::ConfigNotFound)
    }
}
