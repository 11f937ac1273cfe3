//! Lexical path helpers.
//!
//! These never touch the filesystem: `.` and `..` are collapsed purely on the
//! path components, the way a path-resolve call does before any symlink is
//! followed.

use std::path::{Component, Path, PathBuf};

/// Collapse `.` and `..` components without consulting the filesystem.
///
/// `..` at the root stays at the root. A relative path that climbs above its
/// start keeps its leading `..` components.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

/// Join `relative` onto `base`, treating a leading separator in `relative` as
/// part of the relative path rather than as a new root.
pub fn join_under(base: &Path, relative: &str) -> PathBuf {
    let relative = relative.trim_start_matches(['/', '\\']);
    normalize_lexically(&base.join(relative))
}

/// Resolve `path` against `base`: absolute inputs are kept, relative ones are
/// joined. The result is lexically normalized.
pub fn resolve_against(base: &Path, path: &str) -> PathBuf {
    normalize_lexically(&base.join(path))
}
