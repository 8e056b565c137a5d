//! cwd-tree - Print a directory as an indented tree
//!
//! This crate provides:
//! - A depth-first tree renderer over a pluggable directory source
//! - The command that prints the current working directory

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod tree;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, TreeError};
