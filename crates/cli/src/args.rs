// crates/cli/src/args.rs
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug, Default)]
#[command(
    name = "dircount",
    version = crate::VERSION,
    about = "Count lines across the regular files of a directory",
    override_usage = "dircount [options] <directory>",
    disable_help_flag = true
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Directory to process. Non-recursive; the last one given wins.
    #[arg(value_hint = ValueHint::DirPath)]
    pub directories: Vec<PathBuf>,

    /// Count with line-by-line reads (default)
    #[arg(short = 'g', long = "getline", help_heading = "Strategy")]
    pub getline: bool,

    /// Count '\n' bytes in a byte stream
    #[arg(short = 'n', long = "delimiter-scan", help_heading = "Strategy")]
    pub delimiter_scan: bool,

    /// Count '\n' bytes in 1 MiB chunks
    #[arg(short = 'm', long = "buffered-delimiter-scan", help_heading = "Strategy")]
    pub buffered_delimiter_scan: bool,

    /// Benchmark all three strategies
    #[arg(short = 'b', long = "benchmark", help_heading = "Strategy")]
    pub benchmark: bool,

    /// Worker pool size (defaults to the number of logical CPUs)
    #[arg(short = 'j', long, help_heading = "Execution")]
    pub jobs: Option<usize>,

    /// Read size in bytes for the buffered scan
    #[arg(long, value_parser = crate::parsers::parse_chunk_size, help_heading = "Execution")]
    pub chunk_size: Option<usize>,

    /// Abort on the first unreadable file instead of skipping it
    #[arg(long, help_heading = "Execution")]
    pub strict: bool,

    /// Print results as JSON
    #[arg(long, help_heading = "Output")]
    pub json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = ArgAction::Count, help_heading = "Output")]
    pub verbose: u8,

    /// Print this help message
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,
}

impl Args {
    /// The directory that will be processed.
    #[must_use]
    pub fn directory(&self) -> Option<&PathBuf> {
        self.directories.last()
    }
}
