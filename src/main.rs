//=========================================================================
// Game of Life — Binary Entry Point
//
// Installs the logger and runs the engine with default settings.
// Any engine error is fatal: it is logged and the process exits non-zero.
//
// Log verbosity follows `RUST_LOG` (default: info).
//
//=========================================================================

use std::process::ExitCode;

use life_engine::EngineBuilder;
use log::error;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match EngineBuilder::new().build().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(target: "engine", "{}", e);
            ExitCode::FAILURE
        }
    }
}
