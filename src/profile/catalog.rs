//! Discovery of selectable profiles among the configuration sections.
use std::path::{Path, PathBuf};

use tracing::info;

use crate::app::config::{LauncherConfig, Section};

/// Key whose presence turns a section into a selectable profile.
pub const PROFILE_MARKER_KEY: &str = "fishing_strategy";
/// Label of the reserved entry at index 0.
pub const CUSTOM_CONFIGURATION_LABEL: &str = "edit custom configuration";

/// One row of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEntry {
    /// Reserved slot for editing a custom configuration. Not buildable.
    CustomConfiguration,
    /// A config section that carries `fishing_strategy`.
    Profile { name: String, section: Section },
}

impl CatalogEntry {
    pub fn name(&self) -> &str {
        match self {
            CatalogEntry::CustomConfiguration => CUSTOM_CONFIGURATION_LABEL,
            CatalogEntry::Profile { name, .. } => name,
        }
    }
}

/// Ordered, immutable list of selectable profiles.
///
/// Index 0 is always [`CatalogEntry::CustomConfiguration`]; indices `1..len()`
/// follow the order in which qualifying sections appear in the file.
#[derive(Debug, Clone)]
pub struct ProfileCatalog {
    entries: Vec<CatalogEntry>,
    source_path: PathBuf,
}

impl ProfileCatalog {
    /// Build the catalog from an already loaded configuration.
    pub fn load(config: &LauncherConfig) -> Self {
        let mut entries = vec![CatalogEntry::CustomConfiguration];
        entries.extend(
            config
                .sections
                .iter()
                .filter(|(_, section)| section.contains_key(PROFILE_MARKER_KEY))
                .map(|(name, section)| CatalogEntry::Profile {
                    name: name.clone(),
                    section: section.clone(),
                }),
        );

        info!(
            target: "rf4_launcher::config",
            path = %config.source_path.display(),
            profiles = entries.len() - 1,
            "Discovered selectable profiles"
        );

        Self {
            entries,
            source_path: config.source_path.clone(),
        }
    }

    /// Number of entries, placeholder included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the placeholder is present even without profiles.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Path of the file the catalog was built from.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }
}
