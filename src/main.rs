use std::process::ExitCode;
use suite_runner::cli;

#[tokio::main]
async fn main() -> ExitCode {
    match cli::run().await {
        // The suite code is the sum of the per-binary exit codes; the OS
        // keeps only its low byte.
        Ok(suite_code) => ExitCode::from(suite_code as u8),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
