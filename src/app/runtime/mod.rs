//! Session start-up: orchestration, countdown and hand-off to the play session.
mod agent;
mod countdown;
mod startup;

pub use agent::{JsonLineAgent, SessionAgent};
pub use countdown::{run_countdown, COUNTDOWN_SECS};
pub use startup::{run_session, LaunchOutcome, RuntimeExit, EXIT_CONFIG, EXIT_USAGE};
