// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
pub use dircount_engine::config::{Config, ConfigBuilder};
use dircount_engine::error::EngineError;
use dircount_engine::options::Strategy;
use std::path::PathBuf;

/// What the invocation asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Count with one strategy. `None` means no strategy flag was given:
    /// getline is used and only the bare total is printed.
    Count(Option<Strategy>),
    Benchmark,
}

impl Mode {
    /// Flag precedence when several are given: `-b`, `-n`, `-g`, `-m`.
    #[must_use]
    pub const fn from_args(args: &Args) -> Self {
        if args.benchmark {
            Self::Benchmark
        } else if args.delimiter_scan {
            Self::Count(Some(Strategy::DelimiterScan))
        } else if args.getline {
            Self::Count(Some(Strategy::Getline))
        } else if args.buffered_delimiter_scan {
            Self::Count(Some(Strategy::BufferedDelimiterScan))
        } else {
            Self::Count(None)
        }
    }

    #[must_use]
    pub fn strategy(self) -> Strategy {
        match self {
            Self::Count(strategy) => strategy.unwrap_or_default(),
            Self::Benchmark => Strategy::default(),
        }
    }
}

/// Fully resolved invocation.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub mode: Mode,
    pub directory: PathBuf,
    pub engine: Config,
    pub json: bool,
}

impl TryFrom<Args> for Invocation {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self> {
        if args.help {
            return Err(AppError::HelpRequested);
        }
        let directory = args.directory().cloned().ok_or(AppError::NoDirectory)?;
        let mode = Mode::from_args(&args);

        let mut builder = ConfigBuilder::default();
        builder
            .strategy(mode.strategy())
            .jobs(args.jobs.unwrap_or_else(num_cpus::get))
            .strict(args.strict);
        if let Some(chunk_size) = args.chunk_size {
            builder.chunk_size(chunk_size);
        }
        let engine = builder
            .build()
            .map_err(|e| EngineError::Config(e.to_string()))?;
        engine.validate()?;

        Ok(Self {
            mode,
            directory,
            engine,
            json: args.json,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn invocation(argv: &[&str]) -> Result<Invocation> {
        let mut full = vec!["dircount"];
        full.extend_from_slice(argv);
        Invocation::try_from(Args::try_parse_from(full).unwrap())
    }

    #[test]
    fn test_default_mode_is_bare_getline() {
        let inv = invocation(&["dir"]).unwrap();
        assert_eq!(inv.mode, Mode::Count(None));
        assert_eq!(inv.engine.strategy, Strategy::Getline);
        assert_eq!(inv.engine.chunk_size, dircount_engine::config::DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn test_flag_precedence() {
        assert_eq!(invocation(&["-m", "-b", "dir"]).unwrap().mode, Mode::Benchmark);
        assert_eq!(
            invocation(&["-m", "-g", "-n", "dir"]).unwrap().mode,
            Mode::Count(Some(Strategy::DelimiterScan))
        );
        assert_eq!(
            invocation(&["-m", "-g", "dir"]).unwrap().mode,
            Mode::Count(Some(Strategy::Getline))
        );
        let inv = invocation(&["-m", "dir"]).unwrap();
        assert_eq!(inv.engine.strategy, Strategy::BufferedDelimiterScan);
    }

    #[test]
    fn test_help_and_missing_directory() {
        assert!(matches!(invocation(&["-h", "dir"]), Err(AppError::HelpRequested)));
        assert!(matches!(invocation(&["-n"]), Err(AppError::NoDirectory)));
    }

    #[test]
    fn test_execution_options() {
        let inv = invocation(&["-j", "2", "--chunk-size", "8K", "--strict", "dir"]).unwrap();
        assert_eq!(inv.engine.jobs, 2);
        assert_eq!(inv.engine.chunk_size, 8 * 1024);
        assert!(inv.engine.strict);
    }

    #[test]
    fn test_zero_jobs_is_rejected() {
        assert!(matches!(
            invocation(&["-j", "0", "dir"]),
            Err(AppError::Engine(_))
        ));
    }
}
