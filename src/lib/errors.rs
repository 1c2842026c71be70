use std::{io, path::PathBuf};

use ini::ParseError as IniParseError;
use thiserror::Error;

/// Errors that can occur while loading or validating the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to open or read the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file is not well-formed INI.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: IniParseError,
    },
    /// Required field is missing.
    #[error("Configuration file {path} is missing `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
    /// A section advertised as a profile lacks a key needed to build it.
    #[error("Profile `[{profile}]` in {path} is missing `{key}`")]
    MissingProfileKey {
        path: PathBuf,
        profile: String,
        key: &'static str,
    },
    /// The catalog holds no buildable profile at the requested index.
    #[error("Configuration file {path} has no profile at index {index}")]
    UnknownProfile { path: PathBuf, index: usize },
}

impl ConfigError {
    /// Helper to wrap an I/O failure while reading the file.
    pub fn from_read_error(path: PathBuf, source: io::Error) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap an INI syntax error.
    pub fn from_parse_error(path: PathBuf, source: IniParseError) -> Self {
        Self::Parse { path, source }
    }

    /// Split a file load failure into read and parse errors.
    pub fn from_ini_error(path: PathBuf, source: ini::Error) -> Self {
        match source {
            ini::Error::Io(err) => Self::from_read_error(path, err),
            ini::Error::Parse(err) => Self::from_parse_error(path, err),
        }
    }
}

/// Non-interactive CLI input that failed validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("Invalid fish count {count}: must be at least 0 and below the keepnet limit ({keepnet_limit})")]
    FishCountOutOfRange { count: i64, keepnet_limit: u32 },
    #[error("Invalid profile id {id}: choose a number between 0 and {max}", max = .catalog_size.saturating_sub(1))]
    ProfileIdOutOfRange { id: String, catalog_size: usize },
}

/// Failures that stop profile resolution before a session can start.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    #[error("Failed to read user input: {0}")]
    Prompt(#[from] io::Error),
    #[error("Input closed before a profile was selected")]
    InputClosed,
}
