//! Project configuration file manipulation.

pub mod pyproject;

pub use pyproject::{ConfigOutcome, PYPROJECT, update_project_name};
