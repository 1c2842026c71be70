use std::{
    io::{BufRead, Write},
    process::ExitCode,
    time::Duration,
};

use anyhow::Error;
use tracing::info;

use super::{agent::SessionAgent, countdown};
use crate::{
    app::config::LauncherConfig,
    cli::{console, resolve_profile, LaunchArgs, Resolution},
    lib::{errors::LaunchError, telemetry},
    profile::ProfileCatalog,
};

/// Exit code for configuration, prompt and hand-off failures.
pub const EXIT_CONFIG: u8 = 1;
/// Exit code for invalid command-line input, matching clap's usage errors.
pub const EXIT_USAGE: u8 = 2;

/// Bundles a runtime error message with an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    code: u8,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            code: EXIT_CONFIG,
        }
    }

    pub fn from_launch_error(err: LaunchError) -> Self {
        let code = match err {
            LaunchError::InvalidArgument(_) => EXIT_USAGE,
            LaunchError::Config(_) | LaunchError::Prompt(_) | LaunchError::InputClosed => {
                EXIT_CONFIG
            }
        };
        Self {
            message: format!("Error: {err}"),
            code,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code()
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code)
    }

    pub fn code(&self) -> u8 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<LaunchError> for RuntimeExit {
    fn from(err: LaunchError) -> Self {
        Self::from_launch_error(err)
    }
}

/// How a launch ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    Started,
    Cancelled,
    Unavailable,
}

/// Load the config, resolve a profile, and hand it to `agent`.
///
/// The config file is fully read before anything is prompted. `sleep` paces the countdown.
pub fn run_session<R, W, A>(
    args: &LaunchArgs,
    input: &mut R,
    output: &mut W,
    agent: &mut A,
    sleep: &mut impl FnMut(Duration),
) -> Result<LaunchOutcome, RuntimeExit>
where
    R: BufRead,
    W: Write,
    A: SessionAgent,
{
    let config = LauncherConfig::load(args.config_override.clone()).map_err(LaunchError::from)?;
    let catalog = ProfileCatalog::load(&config);

    let resolution = resolve_profile(&args.request(), &catalog, &config.game, input, output)?;
    let profile = match resolution {
        Resolution::Continue(profile) => profile,
        Resolution::Cancelled => {
            writeln!(output, "{}", console::TERMINATED).map_err(LaunchError::from)?;
            info!(target: "rf4_launcher::runtime", "User quit before selecting a profile");
            return Ok(LaunchOutcome::Cancelled);
        }
        Resolution::Unavailable => {
            writeln!(output, "{}", console::NOT_IMPLEMENTED).map_err(LaunchError::from)?;
            info!(
                target: "rf4_launcher::runtime",
                "Custom configuration requested; not available"
            );
            return Ok(LaunchOutcome::Unavailable);
        }
    };

    console::write_profile_summary(output, &profile).map_err(LaunchError::from)?;

    let countdown_secs = config.game.enable_count_down.then_some(countdown::COUNTDOWN_SECS);
    if let Some(secs) = countdown_secs {
        countdown::run_countdown(output, secs, sleep).map_err(LaunchError::from)?;
    }
    writeln!(output, "{}", console::STARTED).map_err(LaunchError::from)?;
    output.flush().map_err(LaunchError::from)?;

    telemetry::emit_handoff(&profile, countdown_secs);
    agent.start(profile).map_err(RuntimeExit::from_error)?;
    Ok(LaunchOutcome::Started)
}
