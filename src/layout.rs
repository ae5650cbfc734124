//! Project archetypes and the directory/file plan each one produces.
//!
//! A [`Plan`] is an ordered list of [`Step`]s computed from a package name
//! and a [`ProjectType`]. Order matters: the materializer executes steps
//! front to back and stops at the first failure.

use clap::ValueEnum;
use std::fmt;
use std::path::{Path, PathBuf};

/// Name of the empty file that marks a directory as an importable package.
pub const PACKAGE_MARKER: &str = "__init__.py";

/// Project archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ProjectType {
    /// Importable library with a `core` package
    Library,
    /// Command-line application with an `app.cli` entry point
    Cli,
    /// Long-running service with `app` and `infra` packages
    Service,
}

impl ProjectType {
    /// Sub-packages created under both `src/<pkg>` and `tests/<pkg>`.
    pub fn subpackages(self) -> &'static [&'static str] {
        match self {
            ProjectType::Library => &["core"],
            ProjectType::Cli => &["core", "app"],
            ProjectType::Service => &["core", "app", "infra"],
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProjectType::Library => "library",
            ProjectType::Cli => "cli",
            ProjectType::Service => "service",
        })
    }
}

/// A directory to create, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirSpec {
    pub path: PathBuf,
    /// Whether a [`PACKAGE_MARKER`] file accompanies the directory.
    pub marker: bool,
}

/// A file to create, relative to the project root, with literal content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Dir(DirSpec),
    File(FileSpec),
}

/// Ordered steps producing the layout for one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<Step>,
}

impl Plan {
    /// Builds the plan for `package_name` laid out as `project_type`.
    ///
    /// Source packages come first, then their seed files, then the
    /// mirrored test tree ending with the smoke test.
    pub fn for_project(package_name: &str, project_type: ProjectType) -> Self {
        let mut plan = Plan { steps: Vec::new() };

        let src_pkg = Path::new("src").join(package_name);
        plan.package(&src_pkg);
        for sub in project_type.subpackages() {
            plan.package(&src_pkg.join(sub));
        }

        match project_type {
            ProjectType::Library => {
                plan.file(src_pkg.join("core").join("api.py"), "# Public library API\n");
            }
            ProjectType::Cli => {
                plan.file(
                    src_pkg.join("__main__.py"),
                    format!(
                        "from {}.app.cli import main\n\
                         \n\
                         if __name__ == \"__main__\":\n    \
                         raise SystemExit(main())\n",
                        package_name
                    ),
                );
                plan.file(
                    src_pkg.join("app").join("cli.py"),
                    "def main() -> int:\n    print(\"CLI entrypoint\")\n    return 0\n",
                );
            }
            ProjectType::Service => {
                plan.file(
                    src_pkg.join("app").join("main.py"),
                    "def run() -> None:\n    print(\"Service starting...\")\n",
                );
                plan.file(
                    src_pkg.join("infra").join("healthcheck.py"),
                    "def check() -> bool:\n    return True\n",
                );
            }
        }

        let tests_root = PathBuf::from("tests");
        let tests_pkg = tests_root.join(package_name);
        plan.dir(&tests_root);
        plan.dir(&tests_pkg);
        for sub in project_type.subpackages() {
            plan.package(&tests_pkg.join(sub));
        }
        plan.file(
            tests_pkg.join("test_smoke.py"),
            "def test_smoke() -> None:\n    assert True\n",
        );

        plan
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Relative paths of every directory and file the plan would produce,
    /// marker files included.
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut out = Vec::new();
        for step in &self.steps {
            match step {
                Step::Dir(dir) => {
                    out.push(dir.path.clone());
                    if dir.marker {
                        out.push(dir.path.join(PACKAGE_MARKER));
                    }
                }
                Step::File(file) => out.push(file.path.clone()),
            }
        }
        out
    }

    fn package(&mut self, path: &Path) {
        self.steps.push(Step::Dir(DirSpec {
            path: path.to_path_buf(),
            marker: true,
        }));
    }

    fn dir(&mut self, path: &Path) {
        self.steps.push(Step::Dir(DirSpec {
            path: path.to_path_buf(),
            marker: false,
        }));
    }

    fn file(&mut self, path: PathBuf, content: impl Into<String>) {
        self.steps.push(Step::File(FileSpec {
            path,
            content: content.into(),
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(plan: &Plan) -> Vec<PathBuf> {
        plan.steps()
            .iter()
            .filter_map(|s| match s {
                Step::File(f) => Some(f.path.clone()),
                Step::Dir(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_library_plan() {
        let plan = Plan::for_project("my_lib", ProjectType::Library);
        assert_eq!(
            files(&plan),
            vec![
                PathBuf::from("src/my_lib/core/api.py"),
                PathBuf::from("tests/my_lib/test_smoke.py"),
            ]
        );
        assert!(!plan.paths().contains(&PathBuf::from("src/my_lib/app")));
    }

    #[test]
    fn test_cli_entry_point_imports_package() {
        let plan = Plan::for_project("my_cli", ProjectType::Cli);
        let main = plan
            .steps()
            .iter()
            .find_map(|s| match s {
                Step::File(f) if f.path.ends_with("__main__.py") => Some(f.content.clone()),
                _ => None,
            })
            .unwrap();

        assert!(main.starts_with("from my_cli.app.cli import main\n"));
        assert!(main.contains("raise SystemExit(main())"));
    }

    #[test]
    fn test_service_plan_mirrors_subpackages_in_tests() {
        let plan = Plan::for_project("svc", ProjectType::Service);
        let paths = plan.paths();

        for sub in ["core", "app", "infra"] {
            assert!(paths.contains(&PathBuf::from(format!("src/svc/{sub}/__init__.py"))));
            assert!(paths.contains(&PathBuf::from(format!("tests/svc/{sub}/__init__.py"))));
        }
        assert!(paths.contains(&PathBuf::from("src/svc/infra/healthcheck.py")));
    }

    #[test]
    fn test_tests_roots_have_no_marker() {
        let plan = Plan::for_project("pkg", ProjectType::Library);
        let paths = plan.paths();

        assert!(paths.contains(&PathBuf::from("tests/pkg")));
        assert!(!paths.contains(&PathBuf::from("tests/__init__.py")));
        assert!(!paths.contains(&PathBuf::from("tests/pkg/__init__.py")));
    }

    #[test]
    fn test_smoke_test_is_last_step() {
        for kind in [ProjectType::Library, ProjectType::Cli, ProjectType::Service] {
            let plan = Plan::for_project("pkg", kind);
            match plan.steps().last() {
                Some(Step::File(f)) => assert!(f.path.ends_with("test_smoke.py")),
                other => panic!("unexpected last step: {:?}", other),
            }
        }
    }

    #[test]
    fn test_display_matches_cli_value() {
        assert_eq!(ProjectType::Service.to_string(), "service");
        assert_eq!(
            ProjectType::from_str("cli", false).unwrap(),
            ProjectType::Cli
        );
    }
}
