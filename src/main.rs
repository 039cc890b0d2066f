//! Binary entrypoint for the `gapspace` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A .env file may supply GAP_ROOT and friends during development.
    dotenvy::dotenv().ok();
    env_logger::init();

    match gapspace::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
