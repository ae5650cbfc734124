//! Shared helpers for project-init integration tests.

use assert_cmd::cargo::cargo_bin_cmd;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEMPLATE_PYPROJECT: &str = r#"[project]
name = "template-project"
version = "0.1.0"
description = "Project template"

[tool.pytest.ini_options]
asyncio_mode = "auto"
"#;

/// Helper to create a project root as shipped by the template:
/// a `pyproject.toml`, the placeholder package, and the placeholder test.
#[allow(unused)]
pub fn create_template_project() -> TempDir {
    let temp = TempDir::new().unwrap();

    fs::write(temp.path().join("pyproject.toml"), TEMPLATE_PYPROJECT).unwrap();

    let legacy_pkg = temp.path().join("src/template_project");
    fs::create_dir_all(&legacy_pkg).unwrap();
    fs::write(legacy_pkg.join("__init__.py"), "").unwrap();
    fs::write(
        legacy_pkg.join("hello.py"),
        "def hello() -> str:\n    return \"Hello, World!\"\n",
    )
    .unwrap();

    fs::create_dir_all(temp.path().join("tests")).unwrap();
    fs::write(
        temp.path().join("tests/test_basic.py"),
        "from template_project import hello\n",
    )
    .unwrap();

    temp
}

/// Every path under `root` mapped to its content (`None` for directories).
#[allow(unused)]
pub fn snapshot(root: &Path) -> BTreeMap<PathBuf, Option<Vec<u8>>> {
    fn walk(root: &Path, dir: &Path, out: &mut BTreeMap<PathBuf, Option<Vec<u8>>>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            let rel = path.strip_prefix(root).unwrap().to_path_buf();
            if path.is_dir() {
                out.insert(rel, None);
                walk(root, &path, out);
            } else {
                out.insert(rel, Some(fs::read(&path).unwrap()));
            }
        }
    }

    let mut out = BTreeMap::new();
    walk(root, root, &mut out);
    out
}

/// Relative paths of every file under `root/dir`, sorted.
#[allow(unused)]
pub fn files_under(root: &Path, dir: &str) -> Vec<String> {
    snapshot(root)
        .into_iter()
        .filter(|(p, content)| content.is_some() && p.starts_with(dir))
        .map(|(p, _)| p.to_string_lossy().replace('\\', "/"))
        .collect()
}

/// Helper to run project-init in `root`
pub fn run_init(
    root: &Path,
    name: &str,
    project_type: &str,
    extra_args: &[&str],
) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("project-init");
    cmd.arg("--name")
        .arg(name)
        .arg("--type")
        .arg(project_type)
        .args(extra_args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .current_dir(root);

    cmd.assert()
}
