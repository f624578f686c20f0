//! Command-line argument definitions for the Arbor CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Arbor outline diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input outline, or `-` to read standard input
    #[arg(help = "Path to the input file, or - for stdin", required_unless_present = "syntax")]
    pub input: Option<String>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Also write the outline text that was rendered to this path
    #[arg(long, value_name = "PATH")]
    pub emit_outline: Option<String>,

    /// Print the outline syntax reference and exit
    #[arg(long)]
    pub syntax: bool,
}
