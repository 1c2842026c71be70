//! Telemetry initialization and launcher log helpers.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::profile::UserProfile;

/// Filter used when `RUST_LOG` is unset. Prompts share the terminal with logs.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Emit the resolved profile right before it is handed to the play session.
pub fn emit_handoff(profile: &UserProfile, countdown_secs: Option<u64>) {
    info!(
        target: "rf4_launcher::runtime",
        profile = profile.name(),
        reel = profile.reel_name(),
        fishing_strategy = profile.fishing_strategy(),
        keep_strategy = profile.keep_strategy().as_str(),
        fish_count = profile.current_fish_count(),
        countdown_secs = countdown_secs,
        retrieval_duration_second = profile.retrieval_duration_second(),
        retrieval_delay_second = profile.retrieval_delay_second(),
        "Handing profile to play session"
    );
}
