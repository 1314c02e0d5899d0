//! User interface
//!
//! This module contains command-line parsing for the depstats binary.

pub mod cli;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
