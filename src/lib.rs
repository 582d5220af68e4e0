//! TechResQ v0.1.0 - Interactive Terminal Demo
//!
//! A terminal rendition of the TechResQ disaster-preparedness demo:
//! canned-reply chat, preparedness quiz, symptom advisor, campus risk
//! calculator, and a placeholder-backed disaster news feed.
//!
//! # Architecture
//!
//! - **Core logic**: `advisor`, `risk`, `quiz`, `chat` (pure, total functions)
//! - **External interface**: `news` (single outbound HTTP GET)
//! - **Shell**: `repl` + `cli` (interactive session and one-shot commands)

pub mod errors;

pub mod advisor;
pub mod chat;
pub mod news;
pub mod quiz;
pub mod risk;
pub mod stats;

// Re-export commonly used types
pub use errors::{Result, SiteError};

// Interface layer
pub mod cli;
pub mod config;
pub mod repl;
