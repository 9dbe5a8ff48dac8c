use crate::error::EngineError;
use crate::options::Strategy;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Line count of one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCount {
    pub path: PathBuf,
    pub lines: u64,
}

/// Outcome of one dispatch over a file list.
#[derive(Debug)]
pub struct RunResult {
    pub strategy: Strategy,
    /// Successfully counted files, in input order.
    pub counts: Vec<FileCount>,
    /// Files that could not be read, in input order. Not part of `total()`.
    pub errors: Vec<(PathBuf, EngineError)>,
}

impl RunResult {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|c| c.lines).sum()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn failed_files(&self) -> Vec<FailedFile> {
        self.errors
            .iter()
            .map(|(path, err)| FailedFile {
                path: path.clone(),
                error: err.to_string(),
            })
            .collect()
    }

    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            strategy: self.strategy,
            total: self.total(),
            files: self.counts.len(),
            failed: self.failed_files(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFile {
    pub path: PathBuf,
    pub error: String,
}

/// Serializable view of a [`RunResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub strategy: Strategy,
    pub total: u64,
    pub files: usize,
    pub failed: Vec<FailedFile>,
}

/// Wall-clock timing of one strategy in a benchmark run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimingRecord {
    pub strategy: Strategy,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
    pub total: u64,
    pub failed: usize,
}

impl TimingRecord {
    #[must_use]
    pub fn elapsed_millis(&self) -> f64 {
        millis(self.elapsed)
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_millis<S: serde::Serializer>(elapsed: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(millis(*elapsed))
}

#[allow(clippy::cast_precision_loss)]
fn millis(elapsed: Duration) -> f64 {
    elapsed.as_nanos() as f64 / 1_000_000.0
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkReport {
    pub records: Vec<TimingRecord>,
    /// Files that failed in any of the runs, each listed once.
    pub failed: Vec<FailedFile>,
}

impl BenchmarkReport {
    /// All strategies produced the same total.
    #[must_use]
    pub fn totals_agree(&self) -> bool {
        self.records.windows(2).all(|w| w[0].total == w[1].total)
    }
}
