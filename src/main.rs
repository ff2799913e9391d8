//! Kodegen Bundler Package - installer builder for published applications.
//!
//! This binary builds installer packages (.msi) from a directory of
//! published application files with proper error handling and artifact
//! verification.

use kodegen_bundler_package::cli;
use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            for hint in e.recovery_suggestions() {
                eprintln!("  hint: {}", hint);
            }
            1
        }
    };

    process::exit(exit_code);
}
