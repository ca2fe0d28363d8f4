//! dasc CLI - Convert block-structured HTML documents to JSON
//!
//! Thin entry point: all behavior lives in the library so integration tests
//! exercise the same code paths.

use std::process::ExitCode;

use colored::Colorize;
use dasc_cli::error::exit_code_from_error;

#[tokio::main]
async fn main() -> ExitCode {
    match dasc_cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::from(exit_code_from_error(&err))
        },
    }
}
