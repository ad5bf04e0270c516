//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Four-function calculator backed by a remote calculator API.
#[derive(Parser, Debug, Clone)]
#[command(name = "tally")]
#[command(about = "Four-function calculator backed by a remote calculator API")]
#[command(version)]
pub struct Cli {
    /// Base URL of the calculator API (overrides API_URL).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Session file to resume from and save to.
    #[arg(long, global = true)]
    pub session: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Press a sequence of keys and print the display, e.g. `tally keys "12+3*4="`.
    Keys {
        /// Keys: 0-9 . + - * / = C (whitespace is ignored)
        sequence: String,
    },

    /// Interactive calculator.
    Repl,

    /// Show the calculation history.
    History {
        /// Delete all history instead of showing it.
        #[arg(long)]
        clear: bool,
    },

    /// Check that the calculator API is up.
    Health,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
