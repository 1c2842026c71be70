//! Entry point for the RF4 launcher.
use std::{io, process::ExitCode, thread};

use clap::Parser;
use rf4_launcher::{
    app::runtime::{run_session, JsonLineAgent, LaunchOutcome, RuntimeExit},
    cli::LaunchArgs,
    lib::telemetry,
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<LaunchOutcome, RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = LaunchArgs::parse();

    let mut input = io::stdin().lock();
    let mut output = io::stdout();
    let mut agent = JsonLineAgent::new(io::stdout());
    run_session(&args, &mut input, &mut output, &mut agent, &mut thread::sleep)
}
