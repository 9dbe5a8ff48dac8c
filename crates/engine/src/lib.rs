// crates/engine/src/lib.rs
use rayon::prelude::*;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

pub mod bench;
pub mod config;
pub mod counter;
pub mod error;
pub mod filesystem;
pub mod options;
pub mod stats;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::stats::{FileCount, RunResult};

/// Count every regular file directly inside `dir`.
///
/// # Errors
/// Path errors for `dir`, plus everything [`count_files`] returns.
pub fn run(dir: &Path, config: &Config) -> Result<RunResult> {
    let files = filesystem::collect_files(dir)?;
    count_files(&files, config)
}

/// Fan out one counting task per file onto a worker pool and fold the
/// results once every task has finished.
///
/// In non-strict mode unreadable files are returned in `RunResult::errors`
/// and left out of the total. In strict mode the first one aborts the run.
/// A panicking task or a pool that cannot be built always aborts the run.
///
/// # Errors
/// See above.
pub fn count_files(files: &[PathBuf], config: &Config) -> Result<RunResult> {
    dispatch(files, config, |path| counter::count_file(path, config))
}

/// Fan-out/fan-in over `files` with `count` as the per-file work.
fn dispatch<F>(files: &[PathBuf], config: &Config, count: F) -> Result<RunResult>
where
    F: Fn(&Path) -> Result<u64> + Sync,
{
    config.validate()?;

    let mut result = RunResult {
        strategy: config.strategy,
        counts: Vec::with_capacity(files.len()),
        errors: Vec::new(),
    };
    if files.is_empty() {
        return Ok(result);
    }

    let jobs = config.jobs.min(files.len());
    log::debug!(
        "counting {} files with {} on {jobs} workers",
        files.len(),
        config.strategy
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .thread_name(|i| format!("dircount-worker-{i}"))
        .build()?;

    // Barrier: collect returns only after every task completed.
    let outcomes: Vec<Result<u64>> =
        pool.install(|| files.par_iter().map(|path| run_task(path, &count)).collect());

    for (path, outcome) in files.iter().zip(outcomes) {
        match outcome {
            Ok(lines) => {
                log::trace!("{}: {lines}", path.display());
                result.counts.push(FileCount {
                    path: path.clone(),
                    lines,
                });
            }
            Err(e) if config.strict || e.is_run_level() => return Err(e),
            Err(e) => {
                // Reported to the user by the caller.
                log::debug!("skipping {}: {e}", path.display());
                result.errors.push((path.clone(), e));
            }
        }
    }

    log::debug!(
        "{}: total {} from {} files, {} skipped",
        config.strategy,
        result.total(),
        result.counts.len(),
        result.errors.len()
    );
    Ok(result)
}

/// One counting task. Panics stay inside the task and become errors.
fn run_task<F>(path: &Path, count: &F) -> Result<u64>
where
    F: Fn(&Path) -> Result<u64>,
{
    panic::catch_unwind(AssertUnwindSafe(|| count(path))).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(ToString::to_string)
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Err(EngineError::TaskPanicked {
            path: path.to_path_buf(),
            message,
        })
    })
}
