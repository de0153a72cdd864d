use std::path::{Component, Path, PathBuf};

/// Create a relative path from `base` to `target`.
///
/// Purely lexical: both paths are expected to be absolute and normalised.
/// Returns `.` when they are equal.
pub fn relative_path(target: &Path, base: &Path) -> PathBuf {
    let target_parts: Vec<Component> = target.components().collect();
    let base_parts: Vec<Component> = base.components().collect();

    let common = target_parts.iter().zip(&base_parts).take_while(|(t, b)| t == b).count();

    // Build the relative path: ".." for each remaining base component,
    // then append all remaining target components
    let mut result = PathBuf::new();
    for _ in &base_parts[common..] {
        result.push("..");
    }
    for component in &target_parts[common..] {
        match component {
            Component::Normal(p) => result.push(p),
            Component::ParentDir => result.push(".."),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    if result.as_os_str().is_empty() { PathBuf::from(".") } else { result }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_same_dir() {
        let result = relative_path(Path::new("/project/src/file.js"), Path::new("/project/src"));
        assert_eq!(result, PathBuf::from("file.js"));
    }

    #[test]
    fn test_relative_path_child_dir() {
        let result = relative_path(
            Path::new("/project/node_modules/lodash/get"),
            Path::new("/project"),
        );
        assert_eq!(result, PathBuf::from("node_modules/lodash/get"));
    }

    #[test]
    fn test_relative_path_parent_dir() {
        let result =
            relative_path(Path::new("/project/node_modules/lodash"), Path::new("/project/a/b"));
        assert_eq!(result, PathBuf::from("../../node_modules/lodash"));
    }

    #[test]
    fn test_relative_path_sibling_dir() {
        let target = Path::new("/project/apps/web/index.js");
        let base = Path::new("/project/apps/api");
        assert_eq!(relative_path(target, base), PathBuf::from("../web/index.js"));
    }

    #[test]
    fn test_relative_path_same_path() {
        let p = Path::new("/project/src");
        assert_eq!(relative_path(p, p), PathBuf::from("."));
    }

    #[test]
    fn test_relative_path_target_is_ancestor() {
        let result = relative_path(Path::new("/project"), Path::new("/project/a/b"));
        assert_eq!(result, PathBuf::from("../.."));
    }
}
