//! Pre-flight checks performed before any file system mutation.
//!
//! Unlike `rules`, these functions may touch the file system, but only to
//! read it.

use crate::error::{InitError, Result};
use crate::verify::rules::validate_package_name;
use std::path::Path;

/// Validates everything that must hold before the first mutation.
///
/// # Checks Performed
///
/// 1. Package name is a valid identifier
/// 2. `src/<package_name>` does not exist under `root`
///
/// # Errors
///
/// Returns the first violation encountered. No file system modifications
/// are made.
pub fn preflight_checks(root: &Path, package_name: &str) -> Result<()> {
    validate_package_name(package_name)?;

    let src_pkg = root.join("src").join(package_name);
    if src_pkg.exists() {
        return Err(InitError::AlreadyExists(src_pkg));
    }

    if !root.is_dir() {
        return Err(InitError::Other(anyhow::anyhow!(
            "Project root is not a directory: {}",
            root.display()
        )));
    }

    log::debug!("Pre-flight checks passed for '{}'", package_name);
    Ok(())
}
