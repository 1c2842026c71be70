//! Load and validate the launcher configuration file.
use std::{
    env,
    path::{Path, PathBuf},
};

use config::Map;
use ini::{Ini, ParseOption};
use tracing::{debug, error, info};

use crate::lib::errors::ConfigError;

pub mod game;
pub mod telemetry;

pub use game::{parse_game_section, GameSettings, GAME_SECTION};

pub const CONFIG_ENV_KEY: &str = "RF4_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config.ini";

/// Where the configuration path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathOrigin {
    Cli,
    Env,
    Default,
}

/// Key/value pairs of one INI section, in file order.
pub type Section = Map<String, String>;

/// Parsed configuration file: the `game` settings plus every section in file order.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    pub game: GameSettings,
    pub sections: Map<String, Section>,
    pub source_path: PathBuf,
}

/// Values are taken verbatim: quotes stay and `\` is an ordinary character.
fn parse_options() -> ParseOption {
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
    }
}

impl LauncherConfig {
    /// Resolve the path in the order: CLI override, `RF4_CONFIG_PATH`, `config.ini`; then load it.
    pub fn load(override_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let (path, origin) = match override_path {
            Some(path) => (path, PathOrigin::Cli),
            None => match env::var(CONFIG_ENV_KEY) {
                Ok(value) if !value.trim().is_empty() => (PathBuf::from(value), PathOrigin::Env),
                _ => (PathBuf::from(DEFAULT_CONFIG_PATH), PathOrigin::Default),
            },
        };

        let path = absolutize(path)?;
        telemetry::log_path_source(&path, origin);
        Self::load_from_path(path)
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        log_load_start(&path);
        let document = Ini::load_from_file_opt(&path, parse_options())
            .map_err(|err| ConfigError::from_ini_error(path.clone(), err))
            .map_err(|err| log_failure(&path, err, "Failed to read configuration file"))?;
        Self::from_document(document, path)
    }

    /// Load configuration from in-memory INI text. `path` only labels errors and logs.
    pub fn load_from_str(text: &str, path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        log_load_start(&path);
        let document = Ini::load_from_str_opt(text, parse_options())
            .map_err(|err| ConfigError::from_parse_error(path.clone(), err))
            .map_err(|err| log_failure(&path, err, "Failed to parse configuration file"))?;
        Self::from_document(document, path)
    }

    fn from_document(document: Ini, path: PathBuf) -> Result<Self, ConfigError> {
        let config = Self::from_sections(collect_sections(&document), path.clone())
            .map_err(|err| log_failure(&path, err, "Failed to validate configuration file"))?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_sections(sections: Map<String, Section>, path: PathBuf) -> Result<Self, ConfigError> {
        let game = parse_game_section(sections.get(GAME_SECTION), &path)?;

        Ok(Self {
            game,
            sections,
            source_path: path,
        })
    }

    /// Look up a section by its exact name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }
}

fn log_load_start(path: &Path) {
    info!(
        target: "rf4_launcher::config",
        path = %path.display(),
        "Starting configuration load"
    );
}

fn log_failure(path: &Path, error: ConfigError, message: &str) -> ConfigError {
    error!(
        target: "rf4_launcher::config",
        path = %path.display(),
        reason = %error,
        "{}",
        message
    );
    error
}

fn absolutize(path: PathBuf) -> Result<PathBuf, ConfigError> {
    if path.is_absolute() {
        return Ok(path);
    }

    let cwd = env::current_dir().map_err(|err| ConfigError::InvalidField {
        path: path.clone(),
        field: "path",
        message: format!("failed to obtain current directory: {err}"),
    })?;
    Ok(cwd.join(path))
}

/// Repeated sections merge and a repeated key keeps its last value.
fn collect_sections(document: &Ini) -> Map<String, Section> {
    let mut sections: Map<String, Section> = Map::new();
    for (name, properties) in document.iter() {
        let Some(name) = name else {
            if !properties.is_empty() {
                debug!(
                    target: "rf4_launcher::config",
                    keys = properties.len(),
                    "Ignoring keys outside of any section"
                );
            }
            continue;
        };

        let section = sections.entry(name.to_string()).or_default();
        for (key, value) in properties.iter() {
            section.insert(key.to_string(), value.to_string());
        }
    }
    sections
}
