//! Project Tree - print a directory as an ASCII tree
//!
//! This crate provides functionality for:
//! - Listing a directory depth-first in sorted order
//! - Skipping version-control, dependency, editor and cache folders plus log, lock and env files
//! - Rendering entries with box-drawing connectors

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod tree;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, TreeError};
pub use tree::{IgnoreRules, TreePrinter};
