//! Idempotent, fail-safe file system primitives.
//!
//! Every mutation the initializer makes goes through a [`Materializer`].
//! Each primitive performs its existence checks first, prints one progress
//! line, records an [`Action`], and only then touches the disk.
//!
//! ## Dry-Run Mode
//!
//! When `dry_run = true`, checks, progress lines, and recorded actions are
//! identical to a real run, but nothing is written. A dry run therefore
//! reaches the same verdict a real run would from the same starting state.
//!
//! ## No Rollback
//!
//! Primitives execute immediately. If a later step fails, earlier writes
//! stay on disk.
//!
//! ## Example
//!
//! ```no_run
//! # use project_init::fs::Materializer;
//! # use std::path::Path;
//! # fn example() -> project_init::error::Result<()> {
//! let mut fs = Materializer::new(Path::new("."), false);
//!
//! fs.touch_package(Path::new("src/my_pkg"))?;
//! fs.create_file(Path::new("src/my_pkg/api.py"), "# api\n")?;
//! # Ok(())
//! # }
//! ```

use crate::error::{InitError, Result};
use crate::layout::{PACKAGE_MARKER, Plan, Step};

use colored::Colorize;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// A file system mutation, performed or (in dry-run) planned.
///
/// Paths are relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateDir(PathBuf),
    CreateFile(PathBuf),
    UpdateFile(PathBuf),
    Delete(PathBuf),
}

impl Action {
    pub fn path(&self) -> &Path {
        match self {
            Action::CreateDir(p)
            | Action::CreateFile(p)
            | Action::UpdateFile(p)
            | Action::Delete(p) => p,
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            Action::CreateDir(_) => "dir",
            Action::CreateFile(_) => "file",
            Action::UpdateFile(_) => "update",
            Action::Delete(_) => "delete",
        }
    }
}

/// Executes file system primitives rooted at a project directory.
pub struct Materializer {
    root: PathBuf,
    dry_run: bool,
    actions: Vec<Action>,
}

impl Materializer {
    pub fn new(root: &Path, dry_run: bool) -> Self {
        Self {
            root: root.to_path_buf(),
            dry_run,
            actions: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Actions recorded so far, in execution order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn into_actions(self) -> Vec<Action> {
        self.actions
    }

    /// Executes every step of `plan` in order, stopping at the first error.
    pub fn apply(&mut self, plan: &Plan) -> Result<()> {
        for step in plan.steps() {
            match step {
                Step::Dir(dir) if dir.marker => self.touch_package(&dir.path)?,
                Step::Dir(dir) => self.ensure_dir(&dir.path)?,
                Step::File(file) => self.create_file(&file.path, &file.content)?,
            }
        }
        Ok(())
    }

    /// Creates `rel` and an empty package marker inside it.
    ///
    /// No-op if `rel` already exists, even when the marker is missing.
    pub fn touch_package(&mut self, rel: &Path) -> Result<()> {
        self.check_directories(rel)?;

        let path = self.root.join(rel);
        if path.exists() {
            log::debug!("Already present, skipping: {}", path.display());
            return Ok(());
        }

        self.record(Action::CreateDir(rel.to_path_buf()));
        self.record(Action::CreateFile(rel.join(PACKAGE_MARKER)));

        if !self.dry_run {
            fs::create_dir_all(&path).map_err(|e| with_path(e, "create", &path))?;
            let marker = path.join(PACKAGE_MARKER);
            fs::write(&marker, "").map_err(|e| with_path(e, "write", &marker))?;
        }

        Ok(())
    }

    /// Creates `rel` as a plain directory. No-op if it exists.
    pub fn ensure_dir(&mut self, rel: &Path) -> Result<()> {
        self.check_directories(rel)?;

        let path = self.root.join(rel);
        if path.exists() {
            log::debug!("Already present, skipping: {}", path.display());
            return Ok(());
        }

        self.record(Action::CreateDir(rel.to_path_buf()));

        if !self.dry_run {
            fs::create_dir_all(&path).map_err(|e| with_path(e, "create", &path))?;
        }

        Ok(())
    }

    /// Writes `content` to `rel` as UTF-8.
    ///
    /// # Errors
    ///
    /// - `RefuseOverwrite` if anything, a dangling symlink included, already
    ///   exists at `rel`
    /// - `Io` (`NotADirectory`) if an existing parent component is not a
    ///   directory
    pub fn create_file(&mut self, rel: &Path, content: &str) -> Result<()> {
        if let Some(parent) = rel.parent() {
            self.check_directories(parent)?;
        }

        let path = self.root.join(rel);
        if fs::symlink_metadata(&path).is_ok() {
            return Err(InitError::RefuseOverwrite(path));
        }

        self.record(Action::CreateFile(rel.to_path_buf()));

        if !self.dry_run {
            let mut file = fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .map_err(|e| match e.kind() {
                    ErrorKind::AlreadyExists => InitError::RefuseOverwrite(path.clone()),
                    _ => with_path(e, "create", &path),
                })?;
            file.write_all(content.as_bytes())
                .map_err(|e| with_path(e, "write", &path))?;
        }

        Ok(())
    }

    /// Replaces the content of an existing file.
    pub fn update_file(&mut self, rel: &Path, content: &str) -> Result<()> {
        let path = self.root.join(rel);

        self.record(Action::UpdateFile(rel.to_path_buf()));

        if !self.dry_run {
            fs::write(&path, content).map_err(|e| with_path(e, "write", &path))?;
        }

        Ok(())
    }

    /// Removes `rel` (recursively for directories). Absent paths are ignored.
    pub fn remove(&mut self, rel: &Path) -> Result<()> {
        let path = self.root.join(rel);
        let Ok(metadata) = fs::symlink_metadata(&path) else {
            log::debug!("Nothing to remove: {}", path.display());
            return Ok(());
        };

        self.record(Action::Delete(rel.to_path_buf()));

        if !self.dry_run {
            if metadata.is_dir() {
                fs::remove_dir_all(&path).map_err(|e| with_path(e, "remove", &path))?;
            } else {
                fs::remove_file(&path).map_err(|e| with_path(e, "remove", &path))?;
            }
        }

        Ok(())
    }

    /// Fails if any existing component of `rel` is not a directory.
    ///
    /// Components past the first missing one are not inspected; they will be
    /// created.
    fn check_directories(&self, rel: &Path) -> Result<()> {
        let mut current = self.root.clone();
        for component in rel.components() {
            current.push(component);
            match fs::metadata(&current) {
                Ok(meta) if meta.is_dir() => continue,
                Ok(_) => return Err(not_a_directory(&current)),
                // Dangling symlink: creating through it would fail.
                Err(_) if fs::symlink_metadata(&current).is_ok() => {
                    return Err(not_a_directory(&current));
                }
                Err(_) => return Ok(()),
            }
        }
        Ok(())
    }

    fn record(&mut self, action: Action) {
        let path = self.root.join(action.path());
        let tag = match (&action, self.dry_run) {
            (_, true) => "[DRY-RUN]".yellow().bold(),
            (Action::Delete(_), false) => "[DELETE]".red().bold(),
            (Action::UpdateFile(_), false) => "[UPDATE]".cyan().bold(),
            _ => "[CREATE]".green().bold(),
        };

        println!("{} {}: {}", tag, action.verb(), path.display());
        self.actions.push(action);
    }
}

fn not_a_directory(path: &Path) -> InitError {
    InitError::Io(std::io::Error::new(
        ErrorKind::NotADirectory,
        format!("Not a directory: {}", path.display()),
    ))
}

fn with_path(e: std::io::Error, op: &str, path: &Path) -> InitError {
    InitError::Io(std::io::Error::new(
        e.kind(),
        format!("Failed to {} {}: {}", op, path.display(), e),
    ))
}
