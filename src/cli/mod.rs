//! CLI module for TechResQ
//!
//! Provides command-line interface with argument parsing.

pub mod args;

pub use args::{Args, Commands, Verbosity};
