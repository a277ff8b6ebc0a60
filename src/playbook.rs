//! Playbook skeleton generation.
//!
//! A playbook lives at `<roles_path>/<name>/` and holds one directory per
//! selected [`Folder`]. Every folder except `files` and `templates` is seeded
//! with an empty `main.yml`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{DirBuilder, File};
use std::path::PathBuf;
use tracing::debug;

use crate::error::{Error, Result};
use crate::paths::{ensure_trailing_separator, legacy_join};

/// Name used by [`StructureGenerator::generate_default`].
pub const DEFAULT_PLAYBOOK_NAME: &str = "my-playbook";

/// Marker file created inside seeded folders.
pub const MAIN_FILE: &str = "main.yml";

/// Default permissions for created directories (rwxr-xr-x).
pub const DEFAULT_DIR_MODE: u32 = 0o755;

/// A conventional playbook subfolder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Folder {
    /// Task lists
    Tasks,
    /// Handlers notified by tasks
    Handlers,
    /// Template sources
    Templates,
    /// Static files
    Files,
    /// High-precedence variables
    Vars,
    /// Default variables
    Defaults,
    /// Metadata and dependencies
    Meta,
}

impl Folder {
    /// Every folder, in creation order.
    pub const ALL: [Folder; 7] = [
        Folder::Tasks,
        Folder::Handlers,
        Folder::Templates,
        Folder::Files,
        Folder::Vars,
        Folder::Defaults,
        Folder::Meta,
    ];

    /// Directory name on disk.
    pub fn as_str(&self) -> &'static str {
        match self {
            Folder::Tasks => "tasks",
            Folder::Handlers => "handlers",
            Folder::Templates => "templates",
            Folder::Files => "files",
            Folder::Vars => "vars",
            Folder::Defaults => "defaults",
            Folder::Meta => "meta",
        }
    }

    /// Whether the folder is seeded with `main.yml`.
    pub fn has_main_file(&self) -> bool {
        !matches!(self, Folder::Files | Folder::Templates)
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request to scaffold one playbook.
///
/// `tasks` is always part of the selection; the flags add optional folders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybookRequest {
    /// Playbook name
    pub name: String,
    /// Include `handlers`
    pub with_handlers: bool,
    /// Include `templates`
    pub with_templates: bool,
    /// Include `files`
    pub with_files: bool,
    /// Include `vars`
    pub with_vars: bool,
    /// Include `defaults`
    pub with_defaults: bool,
    /// Include `meta`
    pub with_meta: bool,
    /// Select every optional folder
    pub all: bool,
}

impl PlaybookRequest {
    /// Request for `name` with only `tasks` selected.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Request for `name` with every folder selected.
    pub fn all(name: impl Into<String>) -> Self {
        Self {
            all: true,
            ..Self::new(name)
        }
    }

    /// Selected folders in creation order, starting with `tasks`.
    pub fn folders(&self) -> Vec<Folder> {
        Folder::ALL
            .into_iter()
            .filter(|folder| self.all || self.selects(*folder))
            .collect()
    }

    fn selects(&self, folder: Folder) -> bool {
        match folder {
            Folder::Tasks => true,
            Folder::Handlers => self.with_handlers,
            Folder::Templates => self.with_templates,
            Folder::Files => self.with_files,
            Folder::Vars => self.with_vars,
            Folder::Defaults => self.with_defaults,
            Folder::Meta => self.with_meta,
        }
    }
}

/// What a generation run created, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlaybookLayout {
    /// Playbook root directory (with trailing separator)
    pub root: PathBuf,
    /// Created folders
    pub directories: Vec<PathBuf>,
    /// Created `main.yml` files
    pub files: Vec<PathBuf>,
}

/// Creates playbook directory skeletons.
#[derive(Debug, Clone)]
pub struct StructureGenerator {
    dir_mode: u32,
}

impl Default for StructureGenerator {
    fn default() -> Self {
        Self {
            dir_mode: DEFAULT_DIR_MODE,
        }
    }
}

impl StructureGenerator {
    /// Create a generator using the default directory mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the permissions given to created directories (unix only).
    pub fn with_dir_mode(mut self, mode: u32) -> Self {
        self.dir_mode = mode;
        self
    }

    /// Scaffold the playbook described by `request` under `roles_path`.
    pub fn generate_request(&self, roles_path: &str, request: &PlaybookRequest) -> Result<PlaybookLayout> {
        self.generate(roles_path, &request.name, &request.folders())
    }

    /// Scaffold `my-playbook` with only `tasks` under `roles_path`.
    pub fn generate_default(&self, roles_path: &str) -> Result<PlaybookLayout> {
        self.generate_request(roles_path, &PlaybookRequest::new(DEFAULT_PLAYBOOK_NAME))
    }

    /// Create `<roles_path>/<name>/<folder>` for each folder, seeding
    /// `main.yml` where the folder calls for one.
    ///
    /// Existing directories are reused and existing `main.yml` files are
    /// truncated. Nothing is rolled back if a later step fails.
    pub fn generate(&self, roles_path: &str, name: &str, folders: &[Folder]) -> Result<PlaybookLayout> {
        if roles_path.is_empty() {
            return Err(Error::invalid_request("roles path is empty"));
        }
        if name.is_empty() {
            return Err(Error::invalid_request("playbook name is empty"));
        }

        let roles_root = ensure_trailing_separator(roles_path);
        let playbook_root = ensure_trailing_separator(&legacy_join(&roles_root, name));
        debug!(root = %playbook_root, "Generating playbook structure");

        let mut layout = PlaybookLayout {
            root: PathBuf::from(&playbook_root),
            ..PlaybookLayout::default()
        };

        for folder in folders {
            let folder_path = legacy_join(&playbook_root, folder.as_str());
            self.create_dir(&folder_path)?;
            debug!(path = %folder_path, "Created directory");
            layout.directories.push(PathBuf::from(&folder_path));

            if folder.has_main_file() {
                let file_path = legacy_join(&ensure_trailing_separator(&folder_path), MAIN_FILE);
                File::create(&file_path).map_err(|e| Error::io(&file_path, e))?;
                debug!(path = %file_path, "Created file");
                layout.files.push(PathBuf::from(file_path));
            }
        }

        Ok(layout)
    }

    fn create_dir(&self, path: &str) -> Result<()> {
        let mut builder = DirBuilder::new();
        builder.recursive(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(self.dir_mode);
        }

        builder.create(path).map_err(|e| Error::io(path, e))
    }
}
