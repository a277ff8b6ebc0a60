//! Roles path resolution for Playwright
//!
//! Reads the `roles_path` option out of an Ansible configuration file. The
//! result is always relative to the directory holding the configuration file
//! and is built with [`legacy_join`], so `roles_path = /a/b` in
//! `conf/ansible.cfg` resolves to `conf//a/b`.

use crate::error::{Error, Result};
use crate::paths::legacy_join;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// Option name scanned for in the configuration file.
pub const ROLES_PATH_KEY: &str = "roles_path";

/// Suffix used when the configuration does not name a roles path.
pub const DEFAULT_ROLES_DIR: &str = "roles";

/// Resolves the roles path from a configuration file.
#[derive(Debug, Clone, Copy, Default)]
pub struct RolesPathResolver;

impl RolesPathResolver {
    /// Create a new resolver
    pub fn new() -> Self {
        Self
    }

    /// Resolve the roles path declared by the configuration at `config_path`.
    ///
    /// The first line containing `roles_path` decides the result. Its first
    /// colon-separated entry is used; an empty value falls back to `roles`.
    /// A file without such a line also falls back to `roles` and logs a
    /// warning. Bytes that are not valid UTF-8 are tolerated; only I/O
    /// failures are reported as [`Error::ConfigReadError`].
    pub fn resolve(&self, config_path: &Path) -> Result<String> {
        let file = File::open(config_path).map_err(|source| Error::ConfigUnreadable {
            path: config_path.to_path_buf(),
            source,
        })?;

        let path_str = config_path.to_string_lossy();
        let prefix = config_prefix(&path_str);
        let default_path = legacy_join(prefix, DEFAULT_ROLES_DIR);

        // Lines are raw bytes; a stray Latin-1 comment must not stop the scan
        for line in BufReader::new(file).split(b'\n') {
            let bytes = line.map_err(|source| Error::ConfigReadError {
                path: config_path.to_path_buf(),
                source,
            })?;
            let line = String::from_utf8_lossy(&bytes);

            if !line.contains(ROLES_PATH_KEY) {
                continue;
            }

            debug!(line = %line, "Found roles_path option");
            return Ok(match roles_path_candidates(&line).first() {
                Some(first) => legacy_join(prefix, first),
                None => default_path,
            });
        }

        warn!("Roles path was not found in configuration file, using default path.");
        Ok(default_path)
    }
}

/// Everything in `path` up to and including its last `/`.
pub fn config_prefix(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..=idx],
        None => "",
    }
}

/// Candidate roles paths declared by a `roles_path = a:b` line.
///
/// Only the text between the first and second `=` is considered. An empty
/// value, or a line with no `=`, yields no candidates.
pub fn roles_path_candidates(option: &str) -> Vec<&str> {
    let value = option.split('=').nth(1).map(str::trim).unwrap_or_default();

    if value.is_empty() {
        return Vec::new();
    }

    value.split(':').collect()
}
