//! Per-file rewrite pipeline for pkgfix
//!
//! This module contains the core rewrite components:
//! - `operation`: Describes what happened to a single file
//! - `processor`: Loads, substitutes and writes back one file at a time

pub mod operation;
pub mod processor;
