//! Optional external hooks run after a successful initialization.
//!
//! Hooks shell out to tools that may not be installed. Every failure is
//! logged as a warning and swallowed; a hook never changes the outcome of
//! the run.

use colored::Colorize;
use std::path::Path;
use std::process::Command;

/// An external command run in the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    /// `pre-commit install`
    InstallPreCommit,
    /// `git remote remove origin`, detaching the project from its template.
    DetachRemote,
}

impl Hook {
    pub fn program(self) -> &'static str {
        match self {
            Hook::InstallPreCommit => "pre-commit",
            Hook::DetachRemote => "git",
        }
    }

    pub fn args(self) -> &'static [&'static str] {
        match self {
            Hook::InstallPreCommit => &["install"],
            Hook::DetachRemote => &["remote", "remove", "origin"],
        }
    }

    pub fn command_line(self) -> String {
        std::iter::once(self.program())
            .chain(self.args().iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Runs `hook` in `root`. Returns `true` if the command exited successfully.
///
/// In dry-run mode the command is only announced.
pub fn run_hook(hook: Hook, root: &Path, dry_run: bool) -> bool {
    if dry_run {
        println!("{} run: {}", "[DRY-RUN]".yellow().bold(), hook.command_line());
        return true;
    }

    println!("{} run: {}", "[HOOK]".blue().bold(), hook.command_line());

    match Command::new(hook.program())
        .args(hook.args())
        .current_dir(root)
        .output()
    {
        Ok(output) if output.status.success() => {
            log::debug!("'{}' succeeded", hook.command_line());
            true
        }
        Ok(output) => {
            log::warn!(
                "'{}' failed: {}",
                hook.command_line(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
            false
        }
        Err(e) => {
            log::warn!("Could not run '{}': {}", hook.command_line(), e);
            false
        }
    }
}
