//! Validation rules for package names.
//!
//! Pure functions with no I/O or side effects.

use crate::error::{InitError, Result};

/// Words that cannot name an importable package.
const RESERVED_WORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// Validates that `name` can be used both as a directory and as an
/// importable module name.
///
/// ## Rules
/// - Non-empty
/// - Contains only `[a-zA-Z0-9_]`
/// - Does not start with a digit
/// - Not a reserved word (`class`, `import`, `None`, ...)
///
/// ## Warnings (non-fatal)
/// - Uppercase letters (convention: lowercase_with_underscores)
pub fn validate_package_name(name: &str) -> Result<()> {
    let Some(first) = name.chars().next() else {
        return Err(InitError::InvalidName(
            name.to_string(),
            "cannot be empty".to_string(),
        ));
    };

    if first.is_ascii_digit() {
        return Err(InitError::InvalidName(
            name.to_string(),
            "must not start with a digit".to_string(),
        ));
    }

    for (idx, ch) in name.chars().enumerate() {
        if ch == '-' {
            return Err(InitError::InvalidName(
                name.to_string(),
                format!(
                    "use underscores, not hyphens (e.g. '{}')",
                    name.replace('-', "_")
                ),
            ));
        }

        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return Err(InitError::InvalidName(
                name.to_string(),
                format!("invalid character '{}' at position {}", ch, idx),
            ));
        }
    }

    if RESERVED_WORDS.contains(&name) {
        return Err(InitError::InvalidName(
            name.to_string(),
            format!("'{}' is a reserved word", name),
        ));
    }

    if name.chars().any(|c| c.is_ascii_uppercase()) {
        log::warn!(
            "'{}' has uppercase (convention: lowercase_with_underscores)",
            name
        );
    }

    Ok(())
}

/// Converts a package name to the kebab-case project name used in
/// `pyproject.toml`.
pub fn project_name(package_name: &str) -> String {
    package_name.replace('_', "-")
}
