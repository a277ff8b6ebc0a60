//! Error types for Playwright.
//!
//! Every fallible operation in the library returns [`Result`], and the CLI
//! maps each variant to a process exit status through [`Error::exit_code`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Playwright operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Playwright.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// No configuration file could be discovered.
    #[error("Cannot find Ansible configuration file")]
    ConfigNotFound,

    /// A configuration file was located but could not be opened.
    #[error("Cannot open Ansible configuration file '{path}'")]
    ConfigUnreadable {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reading failed part way through the configuration file.
    #[error("Cannot read data from Ansible configuration file '{path}'")]
    ConfigReadError {
        /// Path being scanned
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    // ========================================================================
    // Scaffolding Errors
    // ========================================================================
    /// The scaffolding request was rejected before touching the filesystem.
    #[error("Invalid playbook request: {0}")]
    InvalidRequest(String),

    /// Creating a directory or file failed.
    #[error("Failed to create '{path}'")]
    Io {
        /// Path being created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Creates a new invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Creates a new filesystem error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if the error happened while locating or reading the
    /// configuration file.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::ConfigNotFound | Error::ConfigUnreadable { .. } | Error::ConfigReadError { .. }
        )
    }

    /// Returns the error code for CLI exit status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ConfigNotFound => 2,
            Error::ConfigUnreadable { .. } | Error::ConfigReadError { .. } => 3,
            Error::InvalidRequest(_) => 4,
            Error::Io { .. } => 5,
        }
    }
}
