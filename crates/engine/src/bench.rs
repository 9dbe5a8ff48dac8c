use crate::config::Config;
use crate::count_files;
use crate::error::Result;
use crate::options::Strategy;
use crate::stats::{BenchmarkReport, FailedFile, TimingRecord};
use std::path::PathBuf;
use std::time::Instant;

/// Time a full dispatch of `files` under each strategy, in the order of
/// [`Strategy::ALL`]. The strategy in `config` is ignored.
///
/// `BenchmarkReport::failed` lists every file that failed in any of the
/// runs, once, with the error from the first run it failed in.
///
/// # Errors
/// Propagates the first error that aborts one of the three runs.
pub fn benchmark(files: &[PathBuf], config: &Config) -> Result<BenchmarkReport> {
    let mut records = Vec::with_capacity(Strategy::ALL.len());
    let mut failed = Vec::new();

    for strategy in Strategy::ALL {
        let run_config = config.with_strategy(strategy);
        let start = Instant::now();
        let result = count_files(files, &run_config)?;
        let elapsed = start.elapsed();

        records.push(TimingRecord {
            strategy,
            elapsed,
            total: result.total(),
            failed: result.errors.len(),
        });
        merge_failed(&mut failed, result.failed_files());
    }

    let report = BenchmarkReport { records, failed };
    if !report.totals_agree() {
        // Reported to the user by the caller.
        log::info!(
            "strategies disagree on the total: {}",
            report
                .records
                .iter()
                .map(|r| format!("{}={}", r.strategy, r.total))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    Ok(report)
}

fn merge_failed(failed: &mut Vec<FailedFile>, run: Vec<FailedFile>) {
    for file in run {
        if !failed.iter().any(|f| f.path == file.path) {
            failed.push(file);
        }
    }
}
