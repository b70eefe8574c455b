#![warn(missing_docs)]
//! cli argument parser module

use clap::Parser;

/// Structure containing all the flags and arguments that can be passed to
/// binary from a shell. Use [`parse_arguments()`] to parse arguments from
/// `std::env::args` and receive a [`Cli`] instance.
#[derive(Debug, Parser)]
#[clap(version, about)]
pub struct Cli {
    /// Specify the configuration file to use, overrides the normal
    /// configuration file resolution
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<std::path::PathBuf>,

    /// Dump the default configuration to stdout and exit
    #[arg(long)]
    pub dump_default: bool,

    /// Render arrays as colored boxed grids instead of plain rows
    #[arg(long)]
    pub pretty: bool,

    /// Log at debug level, unless overridden by `RUST_LOG`
    #[arg(short, long)]
    pub verbose: bool,
}

#[must_use]
pub fn parse_arguments() -> Cli {
    Cli::parse()
}
