//! Entry point for the dupsweep CLI.

use clap::Parser;
use dupsweep::{cli::Cli, error::ExitCode, run_app};

fn main() {
    let cli = Cli::parse();

    match run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            eprintln!("error: {:#}", err);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    }
}
