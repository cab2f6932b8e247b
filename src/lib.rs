/// Handles argument parsing and drives a migration run.
pub mod cli;

/// Immutable run configuration.
pub mod config;

/// Compiled-in defaults.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Selects files by name suffix.
pub mod filter;

/// A set of helpers for writing files back to disk.
pub mod ioutils;

/// Decodes file contents with ordered encoding fallback.
pub mod loader;

/// Run summary.
pub mod report;

/// Per-file rewrite orchestration.
pub mod rewrite;

/// Literal search-and-replace.
pub mod substitute;

/// Directory tree traversal.
pub mod walker;
