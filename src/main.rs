//! matcost CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run, and report the error
//! text with a failure status. For programmatic use, prefer `matcost::api`.

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
