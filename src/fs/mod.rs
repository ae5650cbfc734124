//! File system operations with dry-run support.
//!
//! Provides the create/delete/update primitives the initializer is built
//! from. Operations execute immediately; there is no rollback.

pub mod materializer;

pub use materializer::{Action, Materializer};
