use tracing::{debug, info};

use super::{LauncherConfig, PathOrigin, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_path_source(path: &std::path::Path, origin: PathOrigin) {
    match origin {
        PathOrigin::Cli => info!(
            target: "rf4_launcher::config",
            path = %path.display(),
            "Loading configuration from --config"
        ),
        PathOrigin::Env => info!(
            target: "rf4_launcher::config",
            path = %path.display(),
            "Loading configuration using RF4_CONFIG_PATH environment variable"
        ),
        PathOrigin::Default => debug!(
            target: "rf4_launcher::config",
            path = %path.display(),
            env = CONFIG_ENV_KEY,
            default = DEFAULT_CONFIG_PATH,
            "RF4_CONFIG_PATH not set; using default config.ini"
        ),
    }
}

pub fn log_loaded(config: &LauncherConfig) {
    info!(
        target: "rf4_launcher::config",
        path = %config.source_path.display(),
        sections = config.sections.len(),
        keepnet_limit = config.game.keepnet_limit,
        enable_count_down = config.game.enable_count_down,
        "Configuration file loaded successfully"
    );
}
