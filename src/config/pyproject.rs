//! Project configuration (`pyproject.toml`) updates.
//!
//! Only the declared project name is touched, with a single line-anchored
//! regex substitution so formatting, comments, and every other line are
//! preserved byte for byte.

use crate::error::Result;
use crate::fs::Materializer;
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;

/// File name of the project configuration, relative to the project root.
pub const PYPROJECT: &str = "pyproject.toml";

/// What happened to the configuration file's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOutcome {
    /// The first `name = "..."` line was rewritten. Holds the value it had.
    Updated { previous: String },
    /// No `name` assignment found, or it already had the new value.
    Unchanged,
    /// No configuration file at the project root.
    Missing,
}

/// Replaces the first line-anchored `name = "..."` assignment in `content`
/// with `new_name`, keeping the original quote style.
///
/// Returns the rewritten content and the previous value, or `None` when no
/// assignment is found.
pub fn replace_name(content: &str, new_name: &str) -> Result<Option<(String, String)>> {
    let pattern = Regex::new(r#"(?m)^(name\s*=\s*)(["'])([^"'\r\n]*)(["'])"#)?;

    let Some(caps) = pattern.captures(content) else {
        return Ok(None);
    };
    let previous = caps[3].to_string();

    let rewritten = pattern
        .replacen(content, 1, |caps: &Captures| {
            format!("{}{}{}{}", &caps[1], &caps[2], new_name, &caps[4])
        })
        .into_owned();

    Ok(Some((rewritten, previous)))
}

/// Sets the project name in `<root>/pyproject.toml`.
///
/// A missing file or a file without a `name` assignment is not an error:
/// both are reported through the returned [`ConfigOutcome`].
///
/// # Errors
///
/// - `Io`: The file exists but cannot be read or written
pub fn update_project_name(new_name: &str, fs_ops: &mut Materializer) -> Result<ConfigOutcome> {
    let path = fs_ops.root().join(PYPROJECT);
    if !path.exists() {
        log::warn!("{} not found, skipping name update", path.display());
        return Ok(ConfigOutcome::Missing);
    }

    let content = fs::read_to_string(&path)?;

    let (rewritten, previous) = match replace_name(&content, new_name)? {
        Some(found) if found.0 != content => found,
        _ => {
            println!("  (no changes made to {} name)", PYPROJECT);
            return Ok(ConfigOutcome::Unchanged);
        }
    };

    if let Err(e) = rewritten.parse::<toml_edit::DocumentMut>() {
        log::warn!("{} may not be valid TOML after update: {}", path.display(), e);
    }

    log::debug!("Project name: {} → {}", previous, new_name);
    fs_ops.update_file(Path::new(PYPROJECT), &rewritten)?;

    Ok(ConfigOutcome::Updated { previous })
}
