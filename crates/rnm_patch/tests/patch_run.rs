use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::Parser;
use rnm_patch::{Config, Replacement, run_patch};
use tempfile::TempDir;

fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
    let file_path = dir.join(path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&file_path, content).expect("Failed to write test file");
    file_path
}

fn config(root: &Path, extra: &[&str]) -> Config {
    let mut args = vec!["resolve-node-modules", root.to_str().unwrap()];
    args.extend_from_slice(extra);
    Config::parse_from(args)
}

/// A monorepo where a bundled file still points at a package nested one level
/// too shallow, while the package is hoisted to the repository root.
fn hoisted_monorepo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_test_file(root, "node_modules/lodash/get.js", "module.exports = {}");
    create_test_file(root, "node_modules/lodash/package.json", "{}");
    create_test_file(
        root,
        "packages/app/dist/index.js",
        "const get = require('../node_modules/lodash/get');\n",
    );
    temp_dir
}

#[test]
fn test_rewrites_hoisted_package_path() {
    let temp_dir = hoisted_monorepo();
    let root = temp_dir.path();

    let result = run_patch(&config(root, &[])).unwrap();

    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].path, "packages/app/dist/index.js");
    assert_eq!(
        result.files[0].replacements,
        vec![Replacement {
            from: "../node_modules/lodash/get".to_string(),
            to: "../../../node_modules/lodash/get".to_string(),
        }]
    );
    assert_eq!(
        fs::read_to_string(root.join("packages/app/dist/index.js")).unwrap(),
        "const get = require('../../../node_modules/lodash/get');\n"
    );
}

#[test]
fn test_second_run_is_a_no_op() {
    let temp_dir = hoisted_monorepo();
    let root = temp_dir.path();

    let first = run_patch(&config(root, &[])).unwrap();
    assert_eq!(first.total_replacements(), 1);

    let second = run_patch(&config(root, &[])).unwrap();
    assert!(second.files.is_empty());
    assert_eq!(second.files_scanned, first.files_scanned);
}

#[test]
fn test_dry_run_reports_identically_and_writes_nothing() {
    let temp_dir = hoisted_monorepo();
    let root = temp_dir.path();
    let file = root.join("packages/app/dist/index.js");
    let before = fs::read(&file).unwrap();

    let dry = run_patch(&config(root, &["--dry-run"])).unwrap();
    assert_eq!(fs::read(&file).unwrap(), before);

    let wet = run_patch(&config(root, &[])).unwrap();
    assert_eq!(dry.files, wet.files);
    assert_ne!(fs::read(&file).unwrap(), before);
}

#[test]
fn test_missing_package_is_left_alone() {
    let temp_dir = hoisted_monorepo();
    let root = temp_dir.path();
    let content = "import x from '../node_modules/rnm-not-installed-anywhere/index.js';\n";
    let file = create_test_file(root, "src/broken.js", content);

    let result = run_patch(&config(root, &[])).unwrap();
    assert!(result.get("src/broken.js").is_none());
    assert_eq!(fs::read_to_string(file).unwrap(), content);
}

#[test]
fn test_binary_files_are_never_visited() {
    let temp_dir = hoisted_monorepo();
    let root = temp_dir.path();
    let content = "../node_modules/lodash/get";
    let image = create_test_file(root, "packages/app/logo.png", content);

    let result = run_patch(&config(root, &[])).unwrap();
    assert!(result.get("packages/app/logo.png").is_none());
    assert_eq!(fs::read_to_string(&image).unwrap(), content);

    let result = run_patch(&config(root, &["--include-binaries"])).unwrap();
    assert!(result.get("packages/app/logo.png").is_some());
}

#[test]
fn test_exact_match_does_not_accept_prefixes() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_test_file(root, "node_modules/foo-extended/index.js", "");
    let content = "require('x/node_modules/foo')";
    let file = create_test_file(root, "src/index.js", content);

    let exact = run_patch(&config(root, &["--exact", "--dry-run"])).unwrap();
    assert!(exact.files.is_empty());

    let prefix = run_patch(&config(root, &["--dry-run"])).unwrap();
    assert_eq!(prefix.get("src/index.js").map(|r| r[0].to.as_str()), Some("../node_modules/foo"));
    assert_eq!(fs::read_to_string(file).unwrap(), content);
}

#[test]
fn test_missing_root_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let err = run_patch(&config(&temp_dir.path().join("missing"), &[])).unwrap_err();
    assert!(err.to_string().starts_with("Failed to patch files in"));
}
