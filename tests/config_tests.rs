//! Integration tests for configuration discovery and roles path resolution
//!
//! These tests verify:
//! - Discovery order (override -> ./ansible.cfg -> ./.ansible.cfg -> /etc)
//! - Injected existence checks and candidate lists
//! - roles_path extraction and its string-concatenation semantics
//! - Fallback to `<config dir>/roles`
//! - Fallback for files holding bytes that are not valid UTF-8
//! - Error kinds for unopenable and unreadable files

use playwright::config::{ConfigLocator, PathProbe, SearchPaths, ANSIBLE_CONFIG_OS};
use playwright::roles::RolesPathResolver;
use playwright::Error;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Probe that records every path it was asked about.
struct RecordingProbe {
    existing: Vec<PathBuf>,
    asked: RefCell<Vec<PathBuf>>,
}

impl RecordingProbe {
    fn new(existing: &[&str]) -> Self {
        Self {
            existing: existing.iter().map(PathBuf::from).collect(),
            asked: RefCell::new(Vec::new()),
        }
    }
}

impl PathProbe for RecordingProbe {
    fn exists(&self, path: &Path) -> bool {
        self.asked.borrow_mut().push(path.to_path_buf());
        self.existing.iter().any(|p| p == path)
    }
}

// ============================================================================
// Discovery Tests
// ============================================================================

#[test]
fn test_override_preferred_over_existing_files() {
    let probe = RecordingProbe::new(&["./ansible.cfg", "/tmp/custom.cfg"]);
    let search = SearchPaths::default().with_override("/tmp/custom.cfg");
    let locator = ConfigLocator::with_probe(search, probe);

    assert_eq!(locator.locate().unwrap(), PathBuf::from("/tmp/custom.cfg"));
}

#[test]
fn test_override_skips_existence_checks() {
    let probe = RecordingProbe::new(&[]);
    let search = SearchPaths::default().with_override("relative/ansible.cfg");
    let locator = ConfigLocator::with_probe(search, probe);

    assert_eq!(locator.locate().unwrap(), PathBuf::from("relative/ansible.cfg"));
    assert!(locator.probe().asked.borrow().is_empty());
}

#[test]
fn test_candidates_checked_in_order() {
    let probe = RecordingProbe::new(&[ANSIBLE_CONFIG_OS]);
    let locator = ConfigLocator::with_probe(SearchPaths::default(), probe);

    assert_eq!(locator.locate().unwrap(), PathBuf::from(ANSIBLE_CONFIG_OS));
}

#[test]
fn test_every_candidate_checked_before_failing() {
    let probe = RecordingProbe::new(&[]);
    let locator = ConfigLocator::with_probe(SearchPaths::default(), probe);

    assert!(matches!(locator.locate(), Err(Error::ConfigNotFound)));
    assert_eq!(
        *locator.probe().asked.borrow(),
        vec![
            PathBuf::from("./ansible.cfg"),
            PathBuf::from("./.ansible.cfg"),
            PathBuf::from("/etc/ansible/ansible.cfg"),
        ]
    );
}

#[test]
fn test_custom_candidates_with_real_filesystem() {
    let dir = tempdir().unwrap();
    let second = dir.path().join("second.cfg");
    fs::write(&second, "").unwrap();

    let search = SearchPaths::default().with_candidates([dir.path().join("first.cfg"), second.clone()]);
    assert_eq!(ConfigLocator::new(search).locate().unwrap(), second);
}

#[test]
fn test_search_paths_serde() {
    let json = r#"{"candidates": ["a.cfg", "b.cfg"]}"#;
    let search: SearchPaths = serde_json::from_str(json).unwrap();

    assert_eq!(search.env_var, "ANSIBLE_CONFIG");
    assert_eq!(search.env_override, None);
    assert_eq!(search.candidates, vec![PathBuf::from("a.cfg"), PathBuf::from("b.cfg")]);
}

// ============================================================================
// Resolution Tests
// ============================================================================

fn config_in(dir: &Path, content: &str) -> (PathBuf, String) {
    let conf_dir = dir.join("conf");
    fs::create_dir_all(&conf_dir).unwrap();
    let path = conf_dir.join("ansible.cfg");
    fs::write(&path, content).unwrap();
    let prefix = format!("{}/", conf_dir.display());
    (path, prefix)
}

#[test]
fn test_resolve_uses_only_first_candidate() {
    let dir = tempdir().unwrap();
    let (path, prefix) = config_in(dir.path(), "[defaults]\nroles_path = /a/b:/c/d\n");

    let resolved = RolesPathResolver::new().resolve(&path).unwrap();
    assert_eq!(resolved, format!("{prefix}/a/b"));
}

#[test]
fn test_resolve_tolerates_missing_spaces() {
    let dir = tempdir().unwrap();
    let (path, prefix) = config_in(dir.path(), "roles_path=site-roles\n");

    let resolved = RolesPathResolver::new().resolve(&path).unwrap();
    assert_eq!(resolved, format!("{prefix}site-roles"));
}

#[test]
fn test_resolve_empty_value() {
    let dir = tempdir().unwrap();
    let (path, prefix) = config_in(dir.path(), "roles_path = \n");

    let resolved = RolesPathResolver::new().resolve(&path).unwrap();
    assert_eq!(resolved, format!("{prefix}roles"));
}

#[test]
fn test_resolve_directory_is_read_error() {
    let dir = tempdir().unwrap();

    let err = RolesPathResolver::new().resolve(dir.path()).unwrap_err();
    assert!(matches!(err, Error::ConfigReadError { .. }), "{err:?}");
}

#[test]
fn test_resolve_missing_file_is_unreadable() {
    let dir = tempdir().unwrap();

    let err = RolesPathResolver::new()
        .resolve(&dir.path().join("nope.cfg"))
        .unwrap_err();
    assert!(matches!(err, Error::ConfigUnreadable { .. }));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_resolve_latin1_comment_before_key() {
    let dir = tempdir().unwrap();
    let (path, prefix) = config_in(dir.path(), "");
    fs::write(&path, b"# Caf\xe9 settings\n[defaults]\nroles_path = site\n").unwrap();

    let resolved = RolesPathResolver::new().resolve(&path).unwrap();
    assert_eq!(resolved, format!("{prefix}site"));
}

proptest! {
    #[test]
    fn prop_missing_key_falls_back_to_default(lines in prop::collection::vec("[a-z_ =:/#\\[\\]]{0,40}", 0..20)) {
        let content = lines.join("\n");
        prop_assume!(!content.contains("roles_path"));

        let dir = tempdir().unwrap();
        let (path, prefix) = config_in(dir.path(), &content);

        let resolved = RolesPathResolver::new().resolve(&path).unwrap();
        prop_assert_eq!(resolved, format!("{prefix}roles"));
    }

    #[test]
    fn prop_arbitrary_bytes_never_error(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        prop_assume!(!String::from_utf8_lossy(&bytes).contains("roles_path"));

        let dir = tempdir().unwrap();
        let (path, prefix) = config_in(dir.path(), "");
        fs::write(&path, &bytes).unwrap();

        let resolved = RolesPathResolver::new().resolve(&path).unwrap();
        prop_assert_eq!(resolved, format!("{prefix}roles"));
    }
}
