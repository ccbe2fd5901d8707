// Rust guideline compliant 2026-10-19

//! Lexical path helpers.
//!
//! Nothing here touches the filesystem: symlinks are not resolved and paths
//! need not exist.

use std::path::{Component, Path};

/// Returns `path` relative to `base`, joined with `/`.
///
/// Relative inputs are resolved against `base` first. Both sides are
/// normalized lexically, so `a/./b/../c` compares equal to `a/c`. A path equal
/// to `base` yields the empty string. When the two paths share no root (for
/// example different Windows drives) the normalized absolute path is returned.
///
/// # Arguments
///
/// * `base` - Directory the result is relative to, usually the working directory
/// * `path` - Absolute or `base`-relative file path
///
/// # Returns
///
/// The relative path as a `/`-separated string.
pub fn relative_to(base: &Path, path: &Path) -> String {
    let joined;
    let target = if path.is_absolute() {
        path
    } else {
        joined = base.join(path);
        joined.as_path()
    };

    let from = normalize(base);
    let to = normalize(target);

    if root_of(&from) != root_of(&to) {
        return render(&to);
    }

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = Vec::with_capacity(from.len() - common + to.len() - common);
    parts.extend(std::iter::repeat("..".to_string()).take(from.len() - common));
    parts.extend(to[common..].iter().map(component_str));
    parts.join("/")
}

/// Converts every path relative to `base` in order.
pub fn relative_all<P: AsRef<Path>>(base: &Path, paths: &[P]) -> Vec<String> {
    paths
        .iter()
        .map(|p| relative_to(base, p.as_ref()))
        .collect()
}

/// Lexically normalizes a path into its components.
fn normalize(path: &Path) -> Vec<Component<'_>> {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last().copied() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}

fn root_of<'a, 'b>(components: &'b [Component<'a>]) -> &'b [Component<'a>] {
    let len = components
        .iter()
        .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        .count();
    &components[..len]
}

fn render(components: &[Component<'_>]) -> String {
    let path: std::path::PathBuf = components.iter().collect();
    path.to_string_lossy().into_owned()
}

fn component_str(component: &Component<'_>) -> String {
    component.as_os_str().to_string_lossy().into_owned()
}
