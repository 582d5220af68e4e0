//! Command-line argument parsing for TechResQ
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};

/// TechResQ - Interactive disaster-preparedness demo for the terminal
#[derive(Parser, Debug)]
#[command(name = "techresq")]
#[command(version = "0.1.0")]
#[command(about = "A proactive approach to safety, in your terminal", long_about = None)]
pub struct Args {
    /// Verbosity level: -q (quiet), default (normal), -v (verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress decorative output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand (interactive session if omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive demo session
    Start,

    /// Run the preparedness quiz standalone
    Quiz,

    /// Compute a campus risk tier from counts
    Risk {
        /// Number of buildings on campus
        #[arg(long, default_value = "0")]
        buildings: String,

        /// Number of students on campus
        #[arg(long, default_value = "0")]
        students: String,
    },

    /// Get canned health advice for a symptom description
    Advise {
        /// Free-text symptom description
        #[arg(value_name = "SYMPTOMS", num_args = 0.., trailing_var_arg = true)]
        symptoms: Vec<String>,
    },

    /// Fetch and print the disaster news feed
    News,

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose > 0 {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

impl Verbosity {
    /// Check if decorative output (banner, counters) should be shown
    pub fn show_decoration(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Check if extra detail (scores, timings) should be shown
    pub fn show_detail(&self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}
