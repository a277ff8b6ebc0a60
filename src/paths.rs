//! String-level path joining.
//!
//! Roles paths are built by plain concatenation rather than separator-aware
//! joining: `legacy_join("dir/", "/a")` is `"dir//a"`, and
//! `legacy_join("dir", "roles")` is `"dirroles"`. Existing configurations
//! depend on this, so every join in the crate goes through this module.

/// Separator appended by [`ensure_trailing_separator`].
pub const SEPARATOR: char = '/';

/// Concatenates `prefix` and `suffix` verbatim.
pub fn legacy_join(prefix: &str, suffix: &str) -> String {
    let mut joined = String::with_capacity(prefix.len() + suffix.len());
    joined.push_str(prefix);
    joined.push_str(suffix);
    joined
}

/// Returns `path` with a trailing `/`, appending one only when missing.
pub fn ensure_trailing_separator(path: &str) -> String {
    if path.ends_with(SEPARATOR) {
        path.to_string()
    } else {
        legacy_join(path, "/")
    }
}
