use std::path::Path;

use config::{Value, ValueKind};

use super::Section;
use crate::lib::errors::ConfigError;

/// Name of the section holding global settings.
pub const GAME_SECTION: &str = "game";

/// Global settings from the `[game]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    /// Keepnet capacity. Fish counts must stay strictly below it.
    pub keepnet_limit: u32,
    pub enable_count_down: bool,
}

pub fn parse_game_section(
    raw: Option<&Section>,
    path: &Path,
) -> Result<GameSettings, ConfigError> {
    let section = raw.ok_or(ConfigError::MissingField {
        path: path.to_path_buf(),
        field: "game",
    })?;

    let keepnet_limit = section
        .get("keepnet_limit")
        .ok_or(ConfigError::MissingField {
            path: path.to_path_buf(),
            field: "game.keepnet_limit",
        })
        .and_then(|value| parse_keepnet_limit(value, path))?;

    let enable_count_down = section
        .get("enable_count_down")
        .ok_or(ConfigError::MissingField {
            path: path.to_path_buf(),
            field: "game.enable_count_down",
        })
        .and_then(|value| parse_flag(value, path))?;

    Ok(GameSettings {
        keepnet_limit,
        enable_count_down,
    })
}

fn parse_keepnet_limit(value: &str, path: &Path) -> Result<u32, ConfigError> {
    match value.trim().parse::<u32>() {
        Ok(limit) if limit >= 1 => Ok(limit),
        _ => Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "game.keepnet_limit",
            message: format!("Use a positive integer (got `{value}`)"),
        }),
    }
}

fn parse_flag(value: &str, path: &Path) -> Result<bool, ConfigError> {
    Value::new(None, ValueKind::String(value.trim().to_string()))
        .into_bool()
        .map_err(|_| ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "game.enable_count_down",
            message: format!("Use true/false, yes/no, on/off or 1/0 (got `{value}`)"),
        })
}
