//! Assembly of the immutable [`UserProfile`] handed to the play session.
use serde::Serialize;
use tracing::warn;

use super::catalog::{CatalogEntry, ProfileCatalog};
use crate::{app::config::Section, lib::errors::ConfigError};

pub const REEL_NAME_KEY: &str = "reel_name";
pub const FISHING_STRATEGY_KEY: &str = "fishing_strategy";
pub const RETRIEVAL_DURATION_KEY: &str = "retrieval_duration_second";
pub const RETRIEVAL_DELAY_KEY: &str = "retrieval_delay_second";

/// Used when `retrieval_duration_second` is absent or unusable. Indistinguishable from an explicit 0.
pub const DEFAULT_RETRIEVAL_DURATION_SECS: f64 = 0.0;
/// Used when `retrieval_delay_second` is absent or unusable. Indistinguishable from an explicit 0.
pub const DEFAULT_RETRIEVAL_DELAY_SECS: f64 = 0.0;

/// Which caught fish go into the keepnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeepStrategy {
    #[default]
    All,
    Marked,
}

impl KeepStrategy {
    /// Only `--marked` selects a strategy. `--all` restates the default, so `--marked` wins when both are given.
    pub fn from_marked_flag(marked: bool) -> Self {
        if marked {
            KeepStrategy::Marked
        } else {
            KeepStrategy::All
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            KeepStrategy::All => "all",
            KeepStrategy::Marked => "marked",
        }
    }
}

/// Resolved configuration for one automated session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    name: String,
    reel_name: String,
    fishing_strategy: String,
    keep_strategy: KeepStrategy,
    current_fish_count: u32,
    retrieval_duration_second: f64,
    retrieval_delay_second: f64,
}

impl UserProfile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reel_name(&self) -> &str {
        &self.reel_name
    }

    pub fn fishing_strategy(&self) -> &str {
        &self.fishing_strategy
    }

    pub fn keep_strategy(&self) -> KeepStrategy {
        self.keep_strategy
    }

    pub fn current_fish_count(&self) -> u32 {
        self.current_fish_count
    }

    pub fn retrieval_duration_second(&self) -> f64 {
        self.retrieval_duration_second
    }

    pub fn retrieval_delay_second(&self) -> f64 {
        self.retrieval_delay_second
    }
}

/// Build the profile stored at `index`. Callers validate the id and fish count first.
pub fn build_profile(
    catalog: &ProfileCatalog,
    index: usize,
    keep_strategy: KeepStrategy,
    fish_count: u32,
) -> Result<UserProfile, ConfigError> {
    let (name, section) = match catalog.get(index) {
        Some(CatalogEntry::Profile { name, section }) => (name, section),
        _ => {
            return Err(ConfigError::UnknownProfile {
                path: catalog.source_path().to_path_buf(),
                index,
            })
        }
    };

    let required = |key: &'static str| {
        section
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigError::MissingProfileKey {
                path: catalog.source_path().to_path_buf(),
                profile: name.clone(),
                key,
            })
    };
    let reel_name = required(REEL_NAME_KEY)?;
    let fishing_strategy = required(FISHING_STRATEGY_KEY)?;

    Ok(UserProfile {
        name: name.clone(),
        reel_name,
        fishing_strategy,
        keep_strategy,
        current_fish_count: fish_count,
        retrieval_duration_second: optional_seconds(
            name,
            section,
            RETRIEVAL_DURATION_KEY,
            DEFAULT_RETRIEVAL_DURATION_SECS,
        ),
        retrieval_delay_second: optional_seconds(
            name,
            section,
            RETRIEVAL_DELAY_KEY,
            DEFAULT_RETRIEVAL_DELAY_SECS,
        ),
    })
}

fn optional_seconds(profile: &str, section: &Section, key: &'static str, default: f64) -> f64 {
    let Some(raw) = section.get(key) else {
        return default;
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => {
            warn!(
                target: "rf4_launcher::config",
                profile = %profile,
                key,
                value = %raw,
                default,
                "Unusable duration; falling back to default"
            );
            default
        }
    }
}
