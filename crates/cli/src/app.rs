// crates/cli/src/app.rs
use crate::args::Args;
use crate::config::{Invocation, Mode};
use crate::error::Result;
use crate::presentation;
use dircount_engine::{bench, filesystem};
use std::io::Write;
use std::path::PathBuf;

/// Resolve `args`, run the requested mode and write results to `out`.
/// Skipped files are reported on `err`.
///
/// # Errors
/// Usage and path errors, run-aborting engine errors, and write failures.
pub fn run<W: Write, E: Write>(args: Args, out: &mut W, err: &mut E) -> Result<()> {
    let invocation = Invocation::try_from(args)?;
    let files = filesystem::collect_files(&invocation.directory)?;
    log::info!(
        "{} regular files in {}",
        files.len(),
        invocation.directory.display()
    );
    execute(&invocation, &files, out, err)
}

/// Run the resolved invocation over an already enumerated file list.
///
/// # Errors
/// Run-aborting engine errors and write failures.
pub fn execute<W: Write, E: Write>(
    invocation: &Invocation,
    files: &[PathBuf],
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    match invocation.mode {
        Mode::Benchmark => {
            let report = bench::benchmark(files, &invocation.engine)?;
            if invocation.json {
                presentation::print_benchmark_json(out, &report)?;
            } else {
                presentation::print_benchmark(out, &report)?;
            }
            if !report.totals_agree() {
                writeln!(err, "Warning: strategies reported different totals")?;
            }
            presentation::print_failed(err, &report.failed)?;
        }
        mode @ Mode::Count(_) => {
            let result = dircount_engine::count_files(files, &invocation.engine)?;
            presentation::print_errors(err, &result.errors)?;
            if invocation.json {
                presentation::print_count_json(out, &result)?;
            } else {
                presentation::print_count(out, mode, &result)?;
            }
        }
    }

    Ok(())
}
