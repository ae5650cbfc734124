//! Validation performed before initialization touches the disk.

pub mod preflight;
pub mod rules;

pub use preflight::preflight_checks;
pub use rules::{project_name, validate_package_name};
