// crates/cli/src/presentation.rs
use crate::config::Mode;
use crate::error::Result;
use dircount_engine::error::EngineError;
use dircount_engine::stats::{BenchmarkReport, FailedFile, RunResult, RunSummary};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

/// Print the outcome of a counting run.
///
/// # Errors
/// Fails if writing to `out` fails.
pub fn print_count<W: Write>(out: &mut W, mode: Mode, result: &RunResult) -> io::Result<()> {
    match mode {
        Mode::Count(Some(strategy)) => {
            writeln!(out, "Lines count using {strategy} method: {}", result.total())
        }
        _ => writeln!(out, "{}", result.total()),
    }
}

/// Print per-strategy timings preceded by `Benchmarking...`.
///
/// # Errors
/// Fails if writing to `out` fails.
pub fn print_benchmark<W: Write>(out: &mut W, report: &BenchmarkReport) -> io::Result<()> {
    writeln!(out, "Benchmarking...")?;
    for record in &report.records {
        writeln!(
            out,
            "{} method total running time: {:.3} millisecond",
            record.strategy,
            record.elapsed_millis()
        )?;
        writeln!(out, "Total lines: {}", record.total)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct CountJson<'a> {
    mode: &'static str,
    #[serde(flatten)]
    summary: &'a RunSummary,
}

/// JSON form of [`print_count`].
///
/// # Errors
/// Fails on serialization or write errors.
pub fn print_count_json<W: Write>(out: &mut W, result: &RunResult) -> Result<()> {
    let summary = result.summary();
    serde_json::to_writer_pretty(&mut *out, &CountJson {
        mode: "count",
        summary: &summary,
    })?;
    writeln!(out)?;
    Ok(())
}

/// JSON form of [`print_benchmark`].
///
/// # Errors
/// Fails on serialization or write errors.
pub fn print_benchmark_json<W: Write>(out: &mut W, report: &BenchmarkReport) -> Result<()> {
    let value = serde_json::json!({
        "mode": "benchmark",
        "totals_agree": report.totals_agree(),
        "records": report.records,
        "failed": report.failed,
    });
    serde_json::to_writer_pretty(&mut *out, &value)?;
    writeln!(out)?;
    Ok(())
}

/// Report files that were skipped, one line each.
///
/// # Errors
/// Fails if writing to `err` fails.
pub fn print_errors<W: Write>(err: &mut W, errors: &[(PathBuf, EngineError)]) -> io::Result<()> {
    for (path, e) in errors {
        writeln!(err, "Error processing {}: {e}", path.display())?;
    }
    Ok(())
}

/// Same as [`print_errors`] for errors already rendered to text.
///
/// # Errors
/// Fails if writing to `err` fails.
pub fn print_failed<W: Write>(err: &mut W, failed: &[FailedFile]) -> io::Result<()> {
    for f in failed {
        writeln!(err, "Error processing {}: {}", f.path.display(), f.error)?;
    }
    Ok(())
}
