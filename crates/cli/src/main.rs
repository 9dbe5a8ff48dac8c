use clap::{CommandFactory, Parser};
use dircount_cli::args::Args;
use dircount_cli::error::AppError;
use dircount_cli::{app, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    if std::env::args_os().len() < 2 {
        print_help();
        return ExitCode::FAILURE;
    }

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    logging::init(args.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut err = std::io::stderr();
    match app::run(args, &mut out, &mut err) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::HelpRequested) => {
            print_help();
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{e}");
            e.exit_code()
        }
    }
}

fn print_help() {
    let _ = Args::command().print_help();
    println!();
}
