//! Library exports for merlin-cli.
//!
//! Exposes the CLI structure so it can be inspected and tested outside
//! the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
