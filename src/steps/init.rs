//! Orchestration logic for project initialization.
//!
//! All file system modifications go through a [`Materializer`], so a dry
//! run walks exactly the same path as a real one.

use crate::cleanup::cleanup_legacy;
use crate::config::{ConfigOutcome, PYPROJECT, update_project_name};
use crate::error::Result;
use crate::fs::{Action, Materializer};
use crate::hooks::{Hook, run_hook};
use crate::layout::{Plan, ProjectType};
use crate::tree;
use crate::verify::{preflight_checks, project_name};

use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Arguments for project initialization.
#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Package name, used under src/ and tests/ (use underscores, not hyphens)
    #[arg(long)]
    pub name: String,

    /// Project archetype
    #[arg(long = "type", value_enum, value_name = "TYPE")]
    pub project_type: ProjectType,

    /// Print what would be created without touching the filesystem
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Print the generated src/ and tests/ trees
    #[arg(long)]
    pub tree: bool,

    /// Run `pre-commit install` after initialization
    #[arg(long)]
    pub install_hooks: bool,

    /// Run `git remote remove origin` after initialization
    #[arg(long)]
    pub detach_remote: bool,
}

impl InitArgs {
    /// Hooks selected on the command line, in execution order.
    pub fn hooks(&self) -> Vec<Hook> {
        let mut hooks = Vec::new();
        if self.install_hooks {
            hooks.push(Hook::InstallPreCommit);
        }
        if self.detach_remote {
            hooks.push(Hook::DetachRemote);
        }
        hooks
    }
}

/// Outcome of a successful initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub package_name: String,
    /// Kebab-case name written to the configuration file.
    pub project_name: String,
    pub project_type: ProjectType,
    pub dry_run: bool,
    pub config: ConfigOutcome,
    /// Every mutation performed (or planned, in dry-run), in order.
    pub actions: Vec<Action>,
}

impl Report {
    pub fn created_paths(&self) -> Vec<PathBuf> {
        tree::collect_from_actions(&self.actions)
    }
}

/// Initializes the project layout for `package_name` under `root`.
///
/// ## Phases
///
/// 1. Pre-flight checks (name validity, `src/<pkg>` absent)
/// 2. Project name update in `pyproject.toml`
/// 3. Source layout and seed files
/// 4. Mirrored test layout and smoke test
/// 5. Legacy placeholder cleanup
///
/// Stops at the first error. Changes made before the failure stay on disk.
pub fn materialize(
    root: &Path,
    package_name: &str,
    project_type: ProjectType,
    dry_run: bool,
) -> Result<Report> {
    preflight_checks(root, package_name)?;

    let project_name = project_name(package_name);
    let mut fs_ops = Materializer::new(root, dry_run);

    let config = update_project_name(&project_name, &mut fs_ops)?;

    let plan = Plan::for_project(package_name, project_type);
    log::debug!(
        "Plan for '{}' ({}): {} steps",
        package_name,
        project_type,
        plan.steps().len()
    );
    fs_ops.apply(&plan)?;

    cleanup_legacy(&mut fs_ops)?;

    Ok(Report {
        package_name: package_name.to_string(),
        project_name,
        project_type,
        dry_run,
        config,
        actions: fs_ops.into_actions(),
    })
}

/// Executes the command: materialize, then optional tree and hooks.
pub fn execute(args: InitArgs) -> Result<()> {
    let root = match &args.root {
        Some(root) => root.clone(),
        None => std::env::current_dir()?,
    };

    log::debug!("Project root: {}", root.display());

    let report = materialize(&root, &args.name, args.project_type, args.dry_run)?;

    if args.tree {
        print_trees(&root, &report);
    }

    for hook in args.hooks() {
        run_hook(hook, &root, args.dry_run);
    }

    print_summary(&report);
    Ok(())
}

fn print_trees(root: &Path, report: &Report) {
    for base in ["src", "tests"] {
        let top = Path::new(base).join(&report.package_name);
        let paths = if report.dry_run {
            report.created_paths()
        } else {
            tree::collect_from_disk(root, &top)
        };
        println!("\n{}", tree::render(&top, &paths).trim_end());
    }
}

fn print_summary(report: &Report) {
    let mode = if report.dry_run {
        "DRY RUN:".yellow().bold()
    } else {
        "CREATED:".green().bold()
    };

    println!(
        "\n{} initialized {} project structure for '{}'.",
        mode, report.project_type, report.package_name
    );

    match &report.config {
        ConfigOutcome::Updated { previous } => println!(
            "         updated {} name '{}' → '{}'",
            PYPROJECT, previous, report.project_name
        ),
        ConfigOutcome::Unchanged => println!("         {} name left unchanged", PYPROJECT),
        ConfigOutcome::Missing => println!("         no {} found", PYPROJECT),
    }

    if report.dry_run {
        println!(
            "{} change{} planned. Run without {} to apply.",
            report.actions.len().to_string().cyan().bold(),
            if report.actions.len() == 1 { "" } else { "s" },
            "--dry-run".cyan()
        );
    }
}
