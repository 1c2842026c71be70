//! Profile catalog, validation predicates and profile assembly.
pub mod builder;
pub mod catalog;
pub mod validate;

pub use builder::{
    build_profile, KeepStrategy, UserProfile, DEFAULT_RETRIEVAL_DELAY_SECS,
    DEFAULT_RETRIEVAL_DURATION_SECS,
};
pub use catalog::{CatalogEntry, ProfileCatalog, CUSTOM_CONFIGURATION_LABEL};
pub use validate::{
    is_fish_count_valid, is_profile_id_valid, CUSTOM_CONFIGURATION_SENTINEL, QUIT_SENTINEL,
};
