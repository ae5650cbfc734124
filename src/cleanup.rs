//! Removal of the placeholders shipped with the project template.

use crate::error::Result;
use crate::fs::Materializer;
use std::path::Path;

/// Placeholder package directory, removed recursively.
pub const LEGACY_PACKAGE: &str = "src/template_project";

/// Placeholder test module.
pub const LEGACY_TEST: &str = "tests/test_basic.py";

/// Deletes the template placeholders if they are present.
pub fn cleanup_legacy(fs_ops: &mut Materializer) -> Result<()> {
    for rel in [LEGACY_PACKAGE, LEGACY_TEST] {
        fs_ops.remove(Path::new(rel))?;
    }
    Ok(())
}
